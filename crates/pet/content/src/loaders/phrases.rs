//! Chat phrase loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::phrases::PhrasePool;

/// Loader for the pet's chat replies.
pub struct PhraseLoader;

impl PhraseLoader {
    pub fn load(path: &Path) -> LoadResult<PhrasePool> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a phrase pool from RON text. An empty pool is rejected.
    pub fn parse(content: &str) -> LoadResult<PhrasePool> {
        let pool: PhrasePool = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse phrase pool RON: {}", e))?;
        if pool.is_empty() {
            anyhow::bail!("Phrase pool must contain at least one response");
        }
        Ok(pool)
    }
}
