//! Repository contracts for saving and loading encounter state.
//!
//! The session saves after every resolved action — wasted actions included —
//! so the persisted record always reflects the latest turn.

mod error;
mod file;
mod memory;

pub use error::{RepositoryError, Result};
pub use file::FileStateRepository;
pub use memory::MemoryStateRepository;

use reverie_core::EncounterState;

/// Persistence collaborator for the single mutable encounter record.
pub trait StateRepository: Send + Sync {
    /// Loads the saved state, or `None` when no save exists.
    fn load(&self) -> Result<Option<EncounterState>>;

    /// Durably stores the given state, replacing any previous save.
    fn save(&self, state: &EncounterState) -> Result<()>;

    /// Deletes the save, if any.
    fn reset(&self) -> Result<()>;
}
