//! Stage records and the oracle that serves them.

use crate::types::{EnemyId, StageId};

/// One configured encounter in the fixed progression order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageDef {
    pub id: StageId,
    pub name: String,
    /// Turn cap; exceeding it ends the encounter in timeout.
    pub max_turn: u32,
    /// Collapse cap; reaching it ends the encounter in collapse.
    pub collapse_limit: u32,
    /// Enemy fielded by this stage. Must resolve in the enemy table.
    pub enemy: EnemyId,
}

/// Read-only access to stage records and the fixed progression order.
pub trait StageOracle {
    /// Looks up a stage by id.
    fn stage(&self, id: &StageId) -> Option<&StageDef>;

    /// The fixed stage order a run progresses through. Never empty.
    fn stage_order(&self) -> &[StageId];
}
