//! Repository contract for saving and loading the pet record.

use pet_core::PetState;

use super::Result;

/// Persistence port for the whole pet record.
///
/// Implementations overwrite the stored record on every save; there is no
/// history and no partial update.
pub trait StateRepository: Send + Sync {
    /// Replace the stored record.
    fn save(&self, state: &PetState) -> Result<()>;

    /// Load the stored record, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<PetState>>;

    /// Remove the stored record.
    fn clear(&self) -> Result<()>;
}
