//! Content loaders for reading shop and chat data from RON files.

pub mod phrases;
pub mod shop;

pub use phrases::PhraseLoader;
pub use shop::ShopLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
