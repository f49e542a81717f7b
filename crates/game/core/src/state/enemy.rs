//! Live enemy instance and its temporary attribute seals.

use crate::env::EnemyTemplate;
use crate::types::{Attribute, EnemyId, EnemyKind, PatternId};

/// Remaining-turn seal counters, one per attribute.
///
/// A sealed attribute cannot be resolved by the player until the counter
/// decays back to zero. Counters decay uniformly by one per completed turn
/// and never go below zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SealState([u32; 3]);

impl SealState {
    /// Remaining turns the given attribute is sealed for.
    pub fn remaining(&self, attr: Attribute) -> u32 {
        self.0[attr.index()]
    }

    /// True if the attribute is currently sealed.
    pub fn is_sealed(&self, attr: Attribute) -> bool {
        self.remaining(attr) > 0
    }

    /// Applies a seal of `turns` duration to the attribute.
    ///
    /// Seals do not stack additively: a longer seal overrides, a shorter one
    /// is ignored while a stronger seal is already active.
    pub fn extend(&mut self, attr: Attribute, turns: u32) {
        let slot = &mut self.0[attr.index()];
        *slot = (*slot).max(turns);
    }

    /// Ticks every counter down by one, stopping at zero.
    pub fn decay(&mut self) {
        for slot in &mut self.0 {
            *slot = slot.saturating_sub(1);
        }
    }
}

/// Mutable per-battle enemy instance, spawned from an [`EnemyTemplate`].
///
/// Invariant: `hp` stays within `[0, max_hp]` and `pattern_index` is a
/// valid index whenever `patterns` is non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyState {
    pub id: EnemyId,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub kind: EnemyKind,
    pub base_pressure: u32,
    /// Copy of the template's pattern script; cycled via `pattern_index`.
    pub patterns: Vec<PatternId>,
    pub pattern_index: usize,
    /// Accumulating counter with no consuming effect in scope.
    pub echo_stacks: u32,
    pub seals: SealState,
}

impl EnemyState {
    /// Spawns a fresh instance at full HP with an empty seal record.
    pub fn from_template(template: &EnemyTemplate) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            hp: template.max_hp,
            max_hp: template.max_hp,
            kind: template.kind,
            base_pressure: template.base_pressure,
            patterns: template.patterns.clone(),
            pattern_index: 0,
            echo_stacks: 0,
            seals: SealState::default(),
        }
    }

    /// Reduces HP, clamped to zero.
    pub fn take_damage(&mut self, damage: u32) {
        self.hp = self.hp.saturating_sub(damage);
    }

    /// True once HP has hit zero.
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// True once a boss has crossed its one-way phase threshold (half HP).
    pub fn in_boss_phase(&self) -> bool {
        self.kind == EnemyKind::Boss && self.hp * 2 <= self.max_hp
    }

    /// The pattern id scheduled for the current turn, if any.
    pub fn current_pattern(&self) -> Option<&PatternId> {
        self.patterns.get(self.pattern_index)
    }

    /// Advances the pattern index cyclically. No-op for an empty script,
    /// so an empty queue never divides by zero.
    pub fn advance_pattern(&mut self) {
        if !self.patterns.is_empty() {
            self.pattern_index = (self.pattern_index + 1) % self.patterns.len();
        }
    }
}
