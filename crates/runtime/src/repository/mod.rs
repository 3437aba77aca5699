//! Repository layer for the persisted pet record.
//!
//! The record is a single document (`pet-storage`) holding the pet, the chat
//! log and the session flag. Every mutation overwrites it as a whole.
//!
//! Static content (shop items, chat phrases) lives in `pet-content`, not here.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStateRepository;
pub use memory::InMemoryStateRepo;
pub use traits::StateRepository;
