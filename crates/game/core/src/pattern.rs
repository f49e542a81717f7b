//! Enemy pattern engine.
//!
//! Runs once per completed turn on the enemy's behalf — never after a
//! seal-blocked player action. Applies constant pressure first, then the
//! scripted pattern scheduled at the current queue position, then advances
//! the queue cyclically.

use crate::config::EncounterConfig;
use crate::env::EncounterEnv;
use crate::event::EncounterEvent;
use crate::state::EncounterState;
use crate::types::PatternKind;

/// Applies the enemy's turn: base pressure, phase override, scheduled
/// pattern, queue advance. Each effect appends one narrated event.
pub fn apply_enemy_pattern(
    state: &mut EncounterState,
    env: &EncounterEnv<'_>,
    events: &mut Vec<EncounterEvent>,
) {
    let pressure = state.enemy.base_pressure;
    if pressure > 0 {
        state.battle.raise_collapse(pressure);
        events.push(EncounterEvent::Pressure {
            enemy: state.enemy.name.clone(),
            amount: pressure,
        });
    }

    // One-way boss phase: once below half HP the opening pattern is skipped
    // permanently. Re-applied every turn, so the floor holds even though the
    // index wraps through 0 when the queue cycles.
    if state.enemy.in_boss_phase() {
        state.enemy.pattern_index = state
            .enemy
            .pattern_index
            .max(EncounterConfig::BOSS_PHASE_FLOOR);
    }

    let Some(pattern_id) = state.enemy.current_pattern() else {
        // Empty script (or a phase floor past the end): nothing further
        // this turn, and the queue does not advance.
        return;
    };

    let Some(pattern) = env.patterns().pattern(pattern_id) else {
        // Content authoring error: the id is scheduled but has no record.
        // Skip the turn's pattern and leave the slot in place; the runtime
        // surfaces the diagnostic.
        events.push(EncounterEvent::PatternSkipped {
            pattern: pattern_id.clone(),
        });
        return;
    };

    match pattern.kind {
        PatternKind::Collapse => state.battle.raise_collapse(pattern.value),
        PatternKind::Echo => state.enemy.echo_stacks += pattern.value,
        PatternKind::Seal => state.enemy.seals.extend(pattern.target, pattern.value),
    }
    events.push(EncounterEvent::Pattern {
        desc: pattern.desc.clone(),
    });

    state.enemy.advance_pattern();
}
