//! Turn advancement and end-condition evaluation.
//!
//! End conditions are checked in exactly one place, after the player's
//! action and before the enemy acts. A lethal action therefore always wins,
//! even if it would also have capped the collapse meter.

use crate::env::EncounterEnv;
use crate::event::EncounterEvent;
use crate::pattern::apply_enemy_pattern;
use crate::state::EncounterState;

/// Terminal outcome of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EndCondition {
    /// Enemy defeated; the only outcome that triggers progression.
    Win,
    /// Collapse meter reached its cap.
    Collapse,
    /// Turn counter moved past the cap.
    Timeout,
}

/// Evaluates end conditions with fixed precedence: win, collapse, timeout.
pub fn check_end(state: &EncounterState) -> Option<EndCondition> {
    if state.enemy.is_defeated() {
        return Some(EndCondition::Win);
    }
    if state.battle.is_collapsed() {
        return Some(EndCondition::Collapse);
    }
    if state.battle.is_timed_out() {
        return Some(EndCondition::Timeout);
    }
    None
}

/// Completes the turn after a non-wasted player action that did not end the
/// battle: advances the counter, decays every seal by one, and lets the
/// enemy act.
pub fn next_turn(
    state: &mut EncounterState,
    env: &EncounterEnv<'_>,
    events: &mut Vec<EncounterEvent>,
) {
    state.battle.turn += 1;
    state.enemy.seals.decay();
    apply_enemy_pattern(state, env, events);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::EnemyTemplate;
    use crate::state::{BattleState, EnemyState, PartyState, Progress};
    use crate::types::{EnemyId, EnemyKind, StageId};

    fn state(hp: u32, collapse: u32, turn: u32) -> EncounterState {
        let template = EnemyTemplate {
            id: EnemyId::new("wisp"),
            name: "Pale Wisp".into(),
            max_hp: 100,
            kind: EnemyKind::Normal,
            base_pressure: 0,
            patterns: Vec::new(),
        };
        let mut enemy = EnemyState::from_template(&template);
        enemy.hp = hp;
        EncounterState {
            progress: Progress::default(),
            battle: BattleState {
                stage: StageId::new("stage1"),
                turn,
                max_turn: 5,
                collapse,
                collapse_limit: 100,
            },
            enemy,
            party: PartyState::default(),
        }
    }

    #[test]
    fn win_takes_precedence_over_collapse_and_timeout() {
        let s = state(0, 100, 9);
        assert_eq!(check_end(&s), Some(EndCondition::Win));
    }

    #[test]
    fn collapse_takes_precedence_over_timeout() {
        let s = state(10, 100, 9);
        assert_eq!(check_end(&s), Some(EndCondition::Collapse));
    }

    #[test]
    fn timeout_fires_only_past_the_cap() {
        assert_eq!(check_end(&state(10, 0, 5)), None);
        assert_eq!(check_end(&state(10, 0, 6)), Some(EndCondition::Timeout));
    }

    #[test]
    fn ongoing_battle_has_no_end_condition() {
        assert_eq!(check_end(&state(10, 99, 1)), None);
    }
}
