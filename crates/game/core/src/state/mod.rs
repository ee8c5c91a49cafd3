//! Authoritative game state representation.
//!
//! This module owns the data structures that describe entities, the current
//! floor and its transient features. Runtime layers clone or query this state
//! but mutate it exclusively through the engine.
pub mod types;

pub use types::{
    ActorState, Direction, EntitiesState, EntityId, Equipment, FloorId, InventoryState,
    ItemHandle, ItemInstance, ItemState, MapDimensions, Portal, PortalKind, Position,
    ResourceMeter, TerrainKind, TileGrid, WorldState,
};

use crate::env::ActorTemplate;

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Combined with `nonce` to generate unique seeds for each random event.
    pub game_seed: u64,

    /// Number of actions executed so far.
    pub nonce: u64,

    /// Sequential entity ID allocator. Never reused; 0 is reserved for the player.
    next_entity_id: u32,

    pub entities: EntitiesState,
    pub world: WorldState,
}

impl GameState {
    pub fn new(world: WorldState) -> Self {
        Self::with_seed(0, world)
    }

    pub fn with_seed(game_seed: u64, world: WorldState) -> Self {
        Self {
            game_seed,
            nonce: 0,
            next_entity_id: 1,
            entities: EntitiesState::empty(),
            world,
        }
    }

    /// Allocates a new unique EntityId.
    pub fn allocate_entity_id(&mut self) -> EntityId {
        if self.next_entity_id == EntityId::PLAYER.0 {
            self.next_entity_id = 1;
        }
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self.next_entity_id.wrapping_add(1);
        id
    }

    /// Adds (or replaces) the player actor.
    pub fn add_player(&mut self, template: &ActorTemplate, position: Position) -> EntityId {
        self.entities.actors.retain(|actor| !actor.id.is_player());
        let player = template.instantiate(EntityId::PLAYER, position);
        self.entities.actors.insert(0, player);
        EntityId::PLAYER
    }

    pub fn spawn_actor(&mut self, template: &ActorTemplate, position: Position) -> EntityId {
        let id = self.allocate_entity_id();
        self.entities
            .actors
            .push(template.instantiate(id, position));
        id
    }

    pub fn spawn_item(&mut self, handle: ItemHandle, position: Position) -> EntityId {
        let id = self.allocate_entity_id();
        self.entities
            .items
            .push(ItemState::new(id, position, handle));
        id
    }

    /// Places a fresh item directly into an actor's pack.
    ///
    /// Returns `None` when the actor is missing or its pack is full.
    pub fn give_item(&mut self, actor: EntityId, handle: ItemHandle) -> Option<EntityId> {
        let has_room = self
            .entities
            .actor(actor)
            .is_some_and(|actor| !actor.inventory.is_full());
        if !has_room {
            return None;
        }
        let id = self.allocate_entity_id();
        let actor = self.entities.actor_mut(actor)?;
        actor
            .inventory
            .try_push(ItemInstance::new(id, handle))
            .ok()?;
        Some(id)
    }

    pub fn player(&self) -> Option<&ActorState> {
        self.entities.actor(EntityId::PLAYER)
    }
}
