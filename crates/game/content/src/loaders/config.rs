//! Game configuration loader.

use std::path::Path;

use barbarian_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their default values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.turn_threshold == 0 {
            anyhow::bail!("turn_threshold must be positive");
        }
        if config.heal_interval == 0 {
            anyhow::bail!("heal_interval must be positive");
        }
        Ok(config)
    }
}
