//! Action application: damage and collapse arithmetic for a resolved
//! attribute.
//!
//! This is the single place combat damage is computed. Effects are fixed
//! per attribute; there is no randomness and no critical hits.

use crate::config::EncounterConfig;
use crate::state::EncounterState;
use crate::types::Attribute;

/// What a resolved action did, for reporting and tests.
///
/// `collapse_delta` is the nominal meter shift before clamping; the state
/// itself is always clamped to `[0, collapse_limit]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub damage: u32,
    pub collapse_delta: i32,
    pub echo_gain: u32,
}

/// Applies the fixed effect of `attr` to the enemy and the battle meters.
///
/// | attribute | damage | collapse | secondary |
/// |-----------|--------|----------|-----------|
/// | erosion   | 16     | +15      | —         |
/// | anchor    | 10     | −10      | —         |
/// | echo      | 8      | 0        | enemy echo stacks +1 |
pub fn apply_action(state: &mut EncounterState, attr: Attribute) -> ActionOutcome {
    let outcome = match attr {
        Attribute::Erosion => {
            state.battle.raise_collapse(EncounterConfig::EROSION_SURGE);
            ActionOutcome {
                damage: EncounterConfig::EROSION_DAMAGE,
                collapse_delta: EncounterConfig::EROSION_SURGE as i32,
                echo_gain: 0,
            }
        }
        Attribute::Anchor => {
            state.battle.settle_collapse(EncounterConfig::ANCHOR_SETTLE);
            ActionOutcome {
                damage: EncounterConfig::ANCHOR_DAMAGE,
                collapse_delta: -(EncounterConfig::ANCHOR_SETTLE as i32),
                echo_gain: 0,
            }
        }
        Attribute::Echo => {
            state.enemy.echo_stacks += EncounterConfig::ECHO_GAIN;
            ActionOutcome {
                damage: EncounterConfig::ECHO_DAMAGE,
                collapse_delta: 0,
                echo_gain: EncounterConfig::ECHO_GAIN,
            }
        }
    };

    state.enemy.take_damage(outcome.damage);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BattleState, EnemyState, PartyState, Progress};
    use crate::env::EnemyTemplate;
    use crate::types::{EnemyId, EnemyKind, StageId};

    fn state() -> EncounterState {
        let template = EnemyTemplate {
            id: EnemyId::new("wisp"),
            name: "Pale Wisp".into(),
            max_hp: 100,
            kind: EnemyKind::Normal,
            base_pressure: 0,
            patterns: Vec::new(),
        };
        EncounterState {
            progress: Progress::default(),
            battle: BattleState {
                stage: StageId::new("stage1"),
                turn: 1,
                max_turn: 5,
                collapse: 60,
                collapse_limit: 100,
            },
            enemy: EnemyState::from_template(&template),
            party: PartyState::default(),
        }
    }

    #[test]
    fn erosion_hits_hard_and_destabilizes() {
        let mut s = state();
        let outcome = apply_action(&mut s, Attribute::Erosion);
        assert_eq!(outcome.damage, 16);
        assert_eq!(s.enemy.hp, 84);
        assert_eq!(s.battle.collapse, 75);
    }

    #[test]
    fn anchor_settles_the_meter() {
        let mut s = state();
        let outcome = apply_action(&mut s, Attribute::Anchor);
        assert_eq!(outcome.damage, 10);
        assert_eq!(s.enemy.hp, 90);
        assert_eq!(s.battle.collapse, 50);
    }

    #[test]
    fn echo_stacks_on_the_enemy() {
        let mut s = state();
        let outcome = apply_action(&mut s, Attribute::Echo);
        assert_eq!(outcome.damage, 8);
        assert_eq!(s.enemy.hp, 92);
        assert_eq!(s.battle.collapse, 60);
        assert_eq!(s.enemy.echo_stacks, 1);
        assert_eq!(outcome.echo_gain, 1);
    }

    #[test]
    fn repeated_erosion_clamps_at_the_cap() {
        let mut s = state();
        for _ in 0..10 {
            apply_action(&mut s, Attribute::Erosion);
        }
        assert_eq!(s.battle.collapse, 100);
    }

    #[test]
    fn repeated_anchor_clamps_at_zero() {
        let mut s = state();
        for _ in 0..10 {
            apply_action(&mut s, Attribute::Anchor);
        }
        assert_eq!(s.battle.collapse, 0);
        assert_eq!(s.enemy.hp, 0);
    }
}
