//! Traits describing the world data the engine consumes but does not own.
//!
//! Oracles expose item definitions and behaviours, floor generation, and
//! randomness. [`GameEnv`] bundles them so the engine can reach everything it
//! needs without hard coupling to concrete implementations.
mod actors;
mod error;
mod floors;
mod items;
mod rng;

pub use actors::{ActorTemplate, BehaviorKind};
pub use error::OracleError;
pub use floors::{ActorSpawn, FloorGenerator, GeneratedFloor, ItemSpawn};
pub use items::{Consumption, EquipmentSlot, EquippableStats, ItemDefinition, ItemKind, ItemOracle};
pub use rng::{PcgRng, RngOracle, RollContext, compute_seed};

/// Aggregates the oracles required by the action pipeline.
#[derive(Clone, Copy, Default)]
pub struct GameEnv<'a> {
    items: Option<&'a dyn ItemOracle>,
    floors: Option<&'a dyn FloorGenerator>,
    rng: Option<&'a dyn RngOracle>,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        items: Option<&'a dyn ItemOracle>,
        floors: Option<&'a dyn FloorGenerator>,
        rng: Option<&'a dyn RngOracle>,
    ) -> Self {
        Self { items, floors, rng }
    }

    pub fn with_all(
        items: &'a dyn ItemOracle,
        floors: &'a dyn FloorGenerator,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self::new(Some(items), Some(floors), Some(rng))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, items: &'a dyn ItemOracle) -> Self {
        self.items = Some(items);
        self
    }

    pub fn with_floors(mut self, floors: &'a dyn FloorGenerator) -> Self {
        self.floors = Some(floors);
        self
    }

    pub fn with_rng(mut self, rng: &'a dyn RngOracle) -> Self {
        self.rng = Some(rng);
        self
    }

    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// # Errors
    ///
    /// Returns `OracleError::FloorsNotAvailable` if no floor generator was provided.
    pub fn floors(&self) -> Result<&'a dyn FloorGenerator, OracleError> {
        self.floors.ok_or(OracleError::FloorsNotAvailable)
    }

    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("items", &self.items.is_some())
            .field("floors", &self.floors.is_some())
            .field("rng", &self.rng.is_some())
            .finish()
    }
}
