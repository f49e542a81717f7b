//! Battle meter bookkeeping.

use crate::config::EncounterConfig;
use crate::env::StageDef;
use crate::types::StageId;

/// Meters and caps of the active battle.
///
/// Invariant: `collapse` stays within `[0, collapse_limit]`; all mutation
/// goes through [`raise_collapse`](Self::raise_collapse) and
/// [`settle_collapse`](Self::settle_collapse), which clamp.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// Stage this battle belongs to.
    pub stage: StageId,
    /// Current turn, starting at 1.
    pub turn: u32,
    /// Turn cap from the stage record.
    pub max_turn: u32,
    /// Instability meter.
    pub collapse: u32,
    /// Collapse cap from the stage record.
    pub collapse_limit: u32,
}

impl BattleState {
    /// Builds the battle record for a stage, seeding the collapse meter with
    /// the given value (fresh runs and stage transitions seed differently).
    pub fn for_stage(stage: &StageDef, collapse_seed: u32) -> Self {
        Self {
            stage: stage.id.clone(),
            turn: EncounterConfig::FIRST_TURN,
            max_turn: stage.max_turn,
            collapse: collapse_seed.min(stage.collapse_limit),
            collapse_limit: stage.collapse_limit,
        }
    }

    /// Raises the collapse meter, clamped to the cap.
    pub fn raise_collapse(&mut self, amount: u32) {
        self.collapse = (self.collapse + amount).min(self.collapse_limit);
    }

    /// Lowers the collapse meter, clamped to zero.
    pub fn settle_collapse(&mut self, amount: u32) {
        self.collapse = self.collapse.saturating_sub(amount);
    }

    /// True once the instability meter has reached its cap.
    pub fn is_collapsed(&self) -> bool {
        self.collapse >= self.collapse_limit
    }

    /// True once the turn counter has moved past the cap.
    pub fn is_timed_out(&self) -> bool {
        self.turn > self.max_turn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn battle() -> BattleState {
        BattleState {
            stage: StageId::new("stage1"),
            turn: 1,
            max_turn: 5,
            collapse: 60,
            collapse_limit: 100,
        }
    }

    #[test]
    fn collapse_clamps_to_cap() {
        let mut b = battle();
        b.raise_collapse(55);
        assert_eq!(b.collapse, 100);
        assert!(b.is_collapsed());
    }

    #[test]
    fn collapse_clamps_to_zero() {
        let mut b = battle();
        b.settle_collapse(75);
        assert_eq!(b.collapse, 0);
    }

    #[test]
    fn seed_cannot_exceed_cap() {
        let stage = StageDef {
            id: StageId::new("stage1"),
            name: "opening".into(),
            max_turn: 5,
            collapse_limit: 50,
            enemy: "wisp".into(),
        };
        let b = BattleState::for_stage(&stage, 60);
        assert_eq!(b.collapse, 50);
    }

    #[test]
    fn timeout_requires_passing_the_cap() {
        let mut b = battle();
        b.turn = 5;
        assert!(!b.is_timed_out());
        b.turn = 6;
        assert!(b.is_timed_out());
    }
}
