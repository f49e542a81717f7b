//! Authoritative encounter state representation.
//!
//! This module owns the mutable data a battle operates on: progression
//! bookkeeping, the battle meters, the live enemy instance, and the party
//! roster. Runtime layers clone or query this state but mutate it
//! exclusively through the engine.

mod battle;
mod enemy;
mod party;
mod progress;

pub use battle::BattleState;
pub use enemy::{EnemyState, SealState};
pub use party::{PartyMember, PartyState};
pub use progress::Progress;

/// Complete mutable record of a run: one active battle plus everything that
/// persists across stage transitions.
///
/// There is exactly one logical owner of this value (the session driving the
/// player's turns); the core never holds onto it between calls.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterState {
    /// Position in the fixed stage order; survives every transition.
    pub progress: Progress,
    /// Meters and caps for the active battle.
    pub battle: BattleState,
    /// The live enemy instance. Fully replaced at each stage transition,
    /// never partially reset.
    pub enemy: EnemyState,
    /// Party roster. Tracked and rendered; no reachable path damages it.
    pub party: PartyState,
}
