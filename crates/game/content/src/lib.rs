//! Static content for the barbarian roguelike and loaders for data files.
//!
//! This crate houses:
//! - actor templates for the player, companions and monsters
//! - the item catalog, including the behaviour of consumables
//! - the arena floor generator used by the simulator
//! - RON/TOML loaders for catalogs and rules configuration
//!
//! Everything here reaches the engine through the `barbarian-core` oracle
//! traits and never appears in game state.

pub mod actors;
pub mod floors;
pub mod items;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use actors::ActorCatalog;
pub use floors::ArenaFloors;
pub use items::{ItemCatalog, ItemEffect, ItemEntry};

#[cfg(feature = "loaders")]
pub use loaders::{ActorLoader, ConfigLoader, ItemLoader, LoadResult};
