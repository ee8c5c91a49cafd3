//! Actor catalog loader.

use std::path::Path;

use barbarian_core::ActorTemplate;

use crate::actors::ActorCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for actor catalogs from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load an actor catalog from a RON file.
    ///
    /// RON format: `[("goblin", (name: "Goblin", hp: 6, ...)), ...]`
    pub fn load(path: &Path) -> LoadResult<ActorCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ActorCatalog> {
        let actors: Vec<(String, ActorTemplate)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))?;

        for (index, (id, _)) in actors.iter().enumerate() {
            if actors[..index].iter().any(|(other, _)| other == id) {
                anyhow::bail!("Duplicate actor id '{}'", id);
            }
        }
        Ok(ActorCatalog::new(actors))
    }
}
