//! In-memory state repository for tests and ephemeral sessions.

use std::sync::Mutex;

use reverie_core::EncounterState;

use super::{RepositoryError, Result, StateRepository};

/// Keeps the save in memory; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStateRepository {
    state: Mutex<Option<EncounterState>>,
}

impl MemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateRepository for MemoryStateRepository {
    fn load(&self) -> Result<Option<EncounterState>> {
        let guard = self.state.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(guard.clone())
    }

    fn save(&self, state: &EncounterState) -> Result<()> {
        let mut guard = self.state.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        *guard = Some(state.clone());
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        let mut guard = self.state.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        *guard = None;
        Ok(())
    }
}
