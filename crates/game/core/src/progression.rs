//! Battle initialization and stage progression.
//!
//! Initialization fails fast on content inconsistencies: an unknown enemy
//! or pattern id signals corrupt tables, and the core refuses to substitute
//! a default rather than play on in an unrecoverable state.

use crate::config::EncounterConfig;
use crate::env::EncounterEnv;
use crate::error::SetupError;
use crate::event::EncounterEvent;
use crate::state::{BattleState, EncounterState, EnemyState, PartyState, Progress};
use crate::types::EnemyId;

/// Spawns a fresh enemy instance for a battle, verifying referential
/// integrity of its pattern script up front.
pub fn init_enemy(env: &EncounterEnv<'_>, id: &EnemyId) -> Result<EnemyState, SetupError> {
    let template = env
        .enemies()
        .enemy(id)
        .ok_or_else(|| SetupError::UnknownEnemy(id.clone()))?;

    for pattern_id in &template.patterns {
        if env.patterns().pattern(pattern_id).is_none() {
            return Err(SetupError::UnknownPattern {
                enemy: id.clone(),
                pattern: pattern_id.clone(),
            });
        }
    }

    Ok(EnemyState::from_template(template))
}

/// Builds the state of a brand-new run: first stage of the fixed order,
/// opening collapse seed, default party.
pub fn new_run(env: &EncounterEnv<'_>) -> Result<EncounterState, SetupError> {
    let order = env.stages().stage_order();
    let first = order.first().ok_or(SetupError::EmptyStageOrder)?;
    let stage = env
        .stages()
        .stage(first)
        .ok_or_else(|| SetupError::UnknownStage(first.clone()))?;

    Ok(EncounterState {
        progress: Progress::default(),
        battle: BattleState::for_stage(stage, EncounterConfig::OPENING_COLLAPSE),
        enemy: init_enemy(env, &stage.enemy)?,
        party: PartyState::default(),
    })
}

/// Advances to the next stage after a win.
///
/// The progress index clamps at the final stage: winning there re-stages
/// the final encounter rather than advancing further. Turn and collapse are
/// re-seeded; caps are re-read from the new stage record; the enemy
/// instance is fully replaced.
pub fn start_next_battle(
    state: &mut EncounterState,
    env: &EncounterEnv<'_>,
    events: &mut Vec<EncounterEvent>,
) -> Result<(), SetupError> {
    let order = env.stages().stage_order();
    if order.is_empty() {
        return Err(SetupError::EmptyStageOrder);
    }
    state.progress.advance(order.len());

    let next_id = &order[state.progress.stage_index];
    let stage = env
        .stages()
        .stage(next_id)
        .ok_or_else(|| SetupError::UnknownStage(next_id.clone()))?;

    state.battle = BattleState::for_stage(stage, EncounterConfig::TRANSITION_COLLAPSE);
    state.enemy = init_enemy(env, &stage.enemy)?;

    events.push(EncounterEvent::Transition {
        stage: stage.name.clone(),
        enemy: state.enemy.name.clone(),
    });
    Ok(())
}
