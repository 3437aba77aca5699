//! In-memory StateRepository implementation for tests and local runs.

use std::sync::RwLock;

use pet_core::PetState;

use super::{RepositoryError, Result, StateRepository};

/// In-memory implementation of StateRepository.
#[derive(Default)]
pub struct InMemoryStateRepo {
    state: RwLock<Option<PetState>>,
    saves: RwLock<usize>,
}

impl InMemoryStateRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a record already stored.
    pub fn with_state(state: PetState) -> Self {
        Self {
            state: RwLock::new(Some(state)),
            saves: RwLock::new(0),
        }
    }

    /// Number of successful saves since creation.
    pub fn save_count(&self) -> usize {
        self.saves.read().map(|count| *count).unwrap_or(0)
    }
}

impl StateRepository for InMemoryStateRepo {
    fn save(&self, state: &PetState) -> Result<()> {
        let mut stored = self
            .state
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = Some(state.clone());

        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *saves += 1;
        Ok(())
    }

    fn load(&self) -> Result<Option<PetState>> {
        let stored = self
            .state
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(stored.clone())
    }

    fn clear(&self) -> Result<()> {
        let mut stored = self
            .state
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = None;
        Ok(())
    }
}
