//! Error types surfaced by the battle core.
//!
//! Setup errors signal corrupt or inconsistent content and abort battle
//! initialization; the core never substitutes a default enemy or stage.
//! A seal-blocked player action is *not* an error — it is a legitimate
//! outcome reported through the turn's narrated events.

use crate::types::{CharacterId, EnemyId, PatternId, StageId};

/// Fatal content-consistency failures raised while (re)initializing a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The fixed stage order is empty; there is nothing to fight.
    #[error("stage order is empty")]
    EmptyStageOrder,

    /// A stage id from the progression order has no stage record.
    #[error("unknown stage id: {0}")]
    UnknownStage(StageId),

    /// A stage references an enemy id with no template.
    #[error("unknown enemy id: {0}")]
    UnknownEnemy(EnemyId),

    /// An enemy's pattern script references an id with no pattern record.
    #[error("enemy {enemy} references unknown pattern id: {pattern}")]
    UnknownPattern { enemy: EnemyId, pattern: PatternId },
}

/// Failures raised while resolving a player action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The played card references a character with no record.
    #[error("card references unknown character id: {0}")]
    UnknownCharacter(CharacterId),

    /// Battle (re)initialization failed during stage progression.
    #[error(transparent)]
    Setup(#[from] SetupError),
}
