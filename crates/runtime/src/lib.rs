//! Session and persistence layer for the Reverie encounter resolver.
//!
//! This crate wires the deterministic battle core to its collaborators:
//! content tables loaded once at startup, a persistence repository written
//! after every resolved action, and a presentation surface that receives
//! narrated log lines. The whole layer is strictly synchronous; exactly one
//! player action is in flight at a time.

pub mod repository;
pub mod session;

pub use repository::{
    FileStateRepository, MemoryStateRepository, RepositoryError, StateRepository,
};
pub use session::{Session, SessionError, TurnOutcome};
