use super::{ActorState, EntityId, ItemState, Position};

/// Every entity on the current floor.
///
/// Actors are kept in spawn order, which is also the order NPCs take their
/// turns in.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub actors: Vec<ActorState>,
    pub items: Vec<ItemState>,
}

impl EntitiesState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.actors.iter_mut().find(|actor| actor.id == id)
    }

    pub fn living_actors(&self) -> impl Iterator<Item = &ActorState> {
        self.actors.iter().filter(|actor| actor.is_alive())
    }

    /// The living actor standing on `position`, if any.
    pub fn actor_at(&self, position: Position) -> Option<&ActorState> {
        self.living_actors()
            .find(|actor| actor.position == position)
    }

    /// Any actor that blocks movement into `position`.
    pub fn blocking_actor_at(&self, position: Position) -> Option<&ActorState> {
        self.actors
            .iter()
            .find(|actor| actor.blocks_movement && actor.position == position)
    }

    pub fn item(&self, id: EntityId) -> Option<&ItemState> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items_at(&self, position: Position) -> impl Iterator<Item = &ItemState> {
        self.items
            .iter()
            .filter(move |item| item.position == position)
    }

    pub fn remove_item(&mut self, id: EntityId) -> Option<ItemState> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }
}
