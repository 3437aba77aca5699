//! Static content for the pet simulation.
//!
//! - Shop catalog (items, prices, effects)
//! - Chat phrase pool used for the pet's replies
//!
//! Content is consumed by the runtime and never appears in the pet state
//! beyond item identifiers. Built-in defaults are always available; the RON
//! loaders replace them from files.

pub mod catalog;
pub mod phrases;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{ItemCategory, ItemEffect, ShopCatalog, ShopItem};
pub use phrases::PhrasePool;

#[cfg(feature = "loaders")]
pub use loaders::{PhraseLoader, ShopLoader};
