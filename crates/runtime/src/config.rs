//! Simulator settings read from the process environment.

use std::env;
use std::path::PathBuf;

use barbarian_content::ConfigLoader;
use barbarian_core::GameConfig;

use crate::message::MessageLog;

/// Settings for one `barbarian-sim` run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// TOML rules file; built-in rules when absent.
    pub config_path: Option<PathBuf>,
    pub ticks: u64,
    /// Game seed; drawn at random when absent.
    pub seed: Option<u64>,
    pub log_dir: Option<PathBuf>,
    pub message_capacity: usize,
    pub sight_radius: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            ticks: Self::DEFAULT_TICKS,
            seed: None,
            log_dir: None,
            message_capacity: MessageLog::DEFAULT_CAPACITY,
            sight_radius: Self::DEFAULT_SIGHT_RADIUS,
        }
    }
}

impl SimConfig {
    pub const DEFAULT_TICKS: u64 = 200;
    pub const DEFAULT_SIGHT_RADIUS: u32 = 8;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BARBARIAN_CONFIG` - Path to a TOML rules file
    /// - `BARBARIAN_TICKS` - World ticks to simulate (default: 200)
    /// - `BARBARIAN_SEED` - Game seed (default: random)
    /// - `BARBARIAN_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `BARBARIAN_MESSAGES` - Message log capacity (default: 64)
    /// - `BARBARIAN_SIGHT` - Player sight radius (default: 8)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("BARBARIAN_CONFIG") {
            config.config_path = Some(path);
        }
        if let Some(ticks) = read_env::<u64>("BARBARIAN_TICKS") {
            config.ticks = ticks;
        }
        config.seed = read_env::<u64>("BARBARIAN_SEED");
        if let Some(dir) = read_env::<PathBuf>("BARBARIAN_LOG_DIR") {
            config.log_dir = Some(dir);
        }
        if let Some(capacity) = read_env::<usize>("BARBARIAN_MESSAGES") {
            config.message_capacity = capacity.max(1);
        }
        if let Some(radius) = read_env::<u32>("BARBARIAN_SIGHT") {
            config.sight_radius = radius;
        }

        config
    }

    /// Game rules from `config_path`, or the built-in defaults.
    pub fn rules(&self) -> anyhow::Result<GameConfig> {
        match &self.config_path {
            Some(path) => ConfigLoader::load(path),
            None => Ok(GameConfig::default()),
        }
    }

    /// The configured log directory, or the platform cache directory.
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(default_log_dir)
    }
}

/// Platform-specific log directory:
/// - Linux: `~/.cache/barbarian/logs` (or `$XDG_CACHE_HOME/barbarian/logs`)
/// - macOS: `~/Library/Caches/barbarian/logs`
/// - Fallback: `/tmp/barbarian/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "barbarian")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/barbarian"))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_log_dir_wins() {
        let config = SimConfig {
            log_dir: Some(PathBuf::from("/var/log/barbarian")),
            ..SimConfig::default()
        };
        assert_eq!(config.resolved_log_dir(), PathBuf::from("/var/log/barbarian"));
    }

    #[test]
    fn rules_come_from_the_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        std::fs::write(&path, "portal_spawn_threshold = 12\nportal_lifetime = 4\n").unwrap();
        let config = SimConfig {
            config_path: Some(path),
            ..SimConfig::default()
        };

        let rules = config.rules().unwrap();

        assert_eq!(rules.portal_spawn_threshold, 12);
        assert_eq!(rules.portal_lifetime, 4);
        assert_eq!(rules.turn_threshold, GameConfig::DEFAULT_TURN_THRESHOLD);
    }

    #[test]
    fn missing_rules_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = SimConfig {
            config_path: Some(dir.path().join("absent.toml")),
            ..SimConfig::default()
        };
        assert!(config.rules().is_err());
        assert_eq!(SimConfig::default().rules().unwrap(), GameConfig::default());
    }

    #[test]
    fn default_log_dir_ends_in_logs() {
        assert!(SimConfig::default().resolved_log_dir().ends_with("logs"));
    }
}
