//! Turn-resolution rules for the barbarian roguelike.
//!
//! `barbarian-core` turns an actor's intent into a validated world mutation:
//! actions check their preconditions and apply, the combat resolver rolls
//! attacks, behaviors pick actions for non-player actors, and the scheduler
//! decides who may act each tick. All state mutation flows through
//! [`engine::GameEngine`]; collaborators such as item behaviours, floor
//! generation and randomness are reached through the oracles in [`env`].
pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod message;
pub mod pathfinding;
pub mod state;
pub mod stats;
pub mod transition;

#[cfg(test)]
mod testing;

pub use action::{
    Action, ActionContext, ActionOutcome, ActionTransition, AttackReport, BumpAction,
    ConverseAction, DropItemAction, EquipAction, ItemUse, MeleeAction, MoveAction, PickupAction,
    TakeStairsAction, UseItemAction, WaitAction,
};
pub use ai::{AggressionTable, Behavior, TargetCategory};
pub use combat::{AttackOutcome, AttackResult};
pub use config::GameConfig;
pub use engine::GameEngine;
pub use env::{
    ActorTemplate, BehaviorKind, Consumption, FloorGenerator, GameEnv, GeneratedFloor,
    ItemDefinition, ItemKind, ItemOracle, OracleError, PcgRng, RngOracle,
};
pub use error::{ActionError, ErrorSeverity, GameError, ImpossibleAction};
pub use message::{ColorHint, Message, MessageSink, NullSink};
pub use state::{
    ActorState, Direction, EntityId, FloorId, GameState, ItemHandle, MapDimensions, Position,
    TerrainKind, TileGrid, WorldState,
};
pub use stats::{CombatStats, TurnMeter};
