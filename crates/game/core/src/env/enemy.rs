//! Enemy template definitions and oracle interface.
//!
//! Templates are static content; a battle operates on an [`EnemyState`]
//! spawned from a template, never on the template itself.
//!
//! [`EnemyState`]: crate::state::EnemyState

use crate::types::{EnemyId, EnemyKind, PatternId};

/// Static definition of an enemy, as loaded from the content tables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: EnemyId,
    pub name: String,
    pub max_hp: u32,
    pub kind: EnemyKind,
    /// Constant collapse contribution applied on every enemy turn.
    pub base_pressure: u32,
    /// Ordered, cyclically repeating pattern script. May be empty, in which
    /// case the enemy applies base pressure only.
    pub patterns: Vec<PatternId>,
}

/// Read-only access to enemy templates.
pub trait EnemyOracle {
    /// Looks up an enemy template by id.
    fn enemy(&self, id: &EnemyId) -> Option<&EnemyTemplate>;
}
