//! Headless runtime for the barbarian roguelike.
//!
//! This crate wires the content oracles, an action provider for the player,
//! and a bounded message log around `barbarian-core`'s engine. Consumers
//! build a [`Simulation`] and drive it tick by tick.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes errors and the action provider abstraction
//! - [`simulation`] hosts the tick loop, its builder and field of view
//! - [`message`] and [`config`] hold the log and environment settings
pub mod api;
pub mod config;
pub mod message;
pub mod simulation;

pub use api::{
    ActionProvider, Result, RuntimeError, ScriptedProvider, WaitActionProvider, WanderProvider,
};
pub use config::SimConfig;
pub use message::MessageLog;
pub use simulation::{Simulation, SimulationBuilder, TickSummary};
