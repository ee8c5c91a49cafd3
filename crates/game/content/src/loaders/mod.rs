//! Content loaders for reading game data from files.
//!
//! Rules configuration comes from TOML; actor and item catalogs from RON.

pub mod actors;
pub mod config;
pub mod items;

pub use actors::ActorLoader;
pub use config::ConfigLoader;
pub use items::ItemLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
