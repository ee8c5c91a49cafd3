use super::{FloorId, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Row-major index of an in-bounds position.
    pub fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    pub fn position(&self, index: usize) -> Position {
        let width = self.width as usize;
        Position::new((index % width) as i32, (index / width) as i32)
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

/// Canonical terrain classes for map tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TerrainKind {
    Floor,
    Wall,
    CityWall,
    Door,
    DownStairs,
    /// Forward portal into the dungeon.
    PortalBlue,
    /// Return portal back to the city.
    PortalRed,
}

impl TerrainKind {
    pub fn is_walkable(self) -> bool {
        !matches!(self, TerrainKind::Wall | TerrainKind::CityWall)
    }

    pub fn is_transparent(self) -> bool {
        !matches!(
            self,
            TerrainKind::Wall | TerrainKind::CityWall | TerrainKind::Door
        )
    }

    pub fn portal_kind(self) -> Option<PortalKind> {
        match self {
            TerrainKind::PortalBlue => Some(PortalKind::Forward),
            TerrainKind::PortalRed => Some(PortalKind::Return),
            _ => None,
        }
    }
}

/// Mutable tile layer for the current floor, with per-cell visibility.
///
/// `visible` is the current field of view; `known` accumulates every cell
/// that has ever been visible.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    dimensions: MapDimensions,
    tiles: Vec<TerrainKind>,
    visible: Vec<bool>,
    known: Vec<bool>,
}

impl TileGrid {
    pub fn filled(dimensions: MapDimensions, terrain: TerrainKind) -> Self {
        let area = dimensions.area();
        Self {
            dimensions,
            tiles: vec![terrain; area],
            visible: vec![false; area],
            known: vec![false; area],
        }
    }

    /// Floor interior surrounded by a one-tile wall border.
    pub fn walled_room(dimensions: MapDimensions) -> Self {
        let mut grid = Self::filled(dimensions, TerrainKind::Floor);
        for index in 0..dimensions.area() {
            let position = dimensions.position(index);
            if position.x == 0
                || position.y == 0
                || position.x == dimensions.width as i32 - 1
                || position.y == dimensions.height as i32 - 1
            {
                grid.tiles[index] = TerrainKind::Wall;
            }
        }
        grid
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    pub fn center(&self) -> Position {
        self.dimensions.center()
    }

    pub fn terrain(&self, position: Position) -> Option<TerrainKind> {
        self.dimensions.index(position).map(|index| self.tiles[index])
    }

    /// Replaces the terrain at `position`; returns false when out of bounds.
    pub fn set_terrain(&mut self, position: Position, terrain: TerrainKind) -> bool {
        match self.dimensions.index(position) {
            Some(index) => {
                self.tiles[index] = terrain;
                true
            }
            None => false,
        }
    }

    /// Out-of-bounds cells are never walkable.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.terrain(position).is_some_and(TerrainKind::is_walkable)
    }

    pub fn is_visible(&self, position: Position) -> bool {
        self.dimensions
            .index(position)
            .is_some_and(|index| self.visible[index])
    }

    pub fn is_known(&self, position: Position) -> bool {
        self.dimensions
            .index(position)
            .is_some_and(|index| self.known[index])
    }

    /// Marks a cell visible (and therefore known) or hides it again.
    pub fn set_visible(&mut self, position: Position, visible: bool) {
        if let Some(index) = self.dimensions.index(position) {
            self.visible[index] = visible;
            if visible {
                self.known[index] = true;
            }
        }
    }

    pub fn set_known(&mut self, position: Position, known: bool) {
        if let Some(index) = self.dimensions.index(position) {
            self.known[index] = known;
        }
    }

    /// Makes every cell visible and known.
    pub fn reveal_all(&mut self) {
        self.visible.iter_mut().for_each(|cell| *cell = true);
        self.known.iter_mut().for_each(|cell| *cell = true);
    }

    pub fn clear_visible(&mut self) {
        self.visible.iter_mut().for_each(|cell| *cell = false);
    }

    /// Iterates over every cell with its terrain.
    pub fn cells(&self) -> impl Iterator<Item = (Position, TerrainKind)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, terrain)| (self.dimensions.position(index), *terrain))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PortalKind {
    /// Leads from the city into the dungeon.
    Forward,
    /// Leads back to the city.
    Return,
}

impl PortalKind {
    pub fn terrain(self) -> TerrainKind {
        match self {
            PortalKind::Forward => TerrainKind::PortalBlue,
            PortalKind::Return => TerrainKind::PortalRed,
        }
    }

    pub fn colour_name(self) -> &'static str {
        match self {
            PortalKind::Forward => "blue",
            PortalKind::Return => "red",
        }
    }
}

/// A temporary portal that expires after `lifetime` more player moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Portal {
    pub position: Position,
    pub lifetime: u32,
    pub kind: PortalKind,
}

/// Aggregated world-level state: the current floor and its transient features.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    pub map: TileGrid,
    pub current_floor: FloorId,
    /// Active temporary portals on the current map.
    pub portals: Vec<Portal>,
    /// Successful player moves since the last portal spawn.
    pub move_counter: u32,
}

impl WorldState {
    pub fn new(map: TileGrid, current_floor: FloorId) -> Self {
        Self {
            map,
            current_floor,
            portals: Vec::new(),
            move_counter: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walled_room_has_border() {
        let grid = TileGrid::walled_room(MapDimensions::new(5, 4));
        assert_eq!(grid.terrain(Position::new(0, 0)), Some(TerrainKind::Wall));
        assert_eq!(grid.terrain(Position::new(4, 3)), Some(TerrainKind::Wall));
        assert!(grid.is_walkable(Position::new(2, 2)));
        assert!(!grid.is_walkable(Position::new(5, 2)));
        assert_eq!(grid.terrain(Position::new(-1, 0)), None);
    }

    #[test]
    fn visibility_marks_known() {
        let mut grid = TileGrid::filled(MapDimensions::new(3, 3), TerrainKind::Floor);
        let cell = Position::new(1, 1);
        grid.set_visible(cell, true);
        grid.clear_visible();
        assert!(!grid.is_visible(cell));
        assert!(grid.is_known(cell));
    }

    #[test]
    fn portals_are_walkable() {
        assert!(TerrainKind::PortalBlue.is_walkable());
        assert_eq!(
            TerrainKind::PortalRed.portal_kind(),
            Some(PortalKind::Return)
        );
        assert!(!TerrainKind::CityWall.is_walkable());
    }
}
