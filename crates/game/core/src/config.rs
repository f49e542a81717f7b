//! Fixed tuning values for battle resolution.
//!
//! Every number the resolver pipeline uses lives here; there is no
//! randomness and no per-content override for these values.

/// Tuning constants for the encounter resolver.
///
/// Grouped as associated constants so call sites read as
/// `EncounterConfig::EROSION_DAMAGE` rather than bare literals.
pub struct EncounterConfig;

impl EncounterConfig {
    /// Damage dealt by an erosion-resolved action.
    pub const EROSION_DAMAGE: u32 = 16;
    /// Collapse added by an erosion-resolved action.
    pub const EROSION_SURGE: u32 = 15;

    /// Damage dealt by an anchor-resolved action.
    pub const ANCHOR_DAMAGE: u32 = 10;
    /// Collapse removed by an anchor-resolved action.
    pub const ANCHOR_SETTLE: u32 = 10;

    /// Damage dealt by an echo-resolved action.
    pub const ECHO_DAMAGE: u32 = 8;
    /// Echo stacks added to the enemy by an echo-resolved action.
    pub const ECHO_GAIN: u32 = 1;

    /// Collapse seed for a brand-new run.
    pub const OPENING_COLLAPSE: u32 = 60;
    /// Collapse re-seed applied at every stage transition.
    pub const TRANSITION_COLLAPSE: u32 = 40;

    /// First turn number of every battle.
    pub const FIRST_TURN: u32 = 1;

    /// Pattern index floor for bosses that have crossed the phase threshold.
    ///
    /// Once a boss drops to half HP it permanently skips its opening pattern.
    pub const BOSS_PHASE_FLOOR: usize = 1;
}
