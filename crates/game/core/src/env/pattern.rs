//! Scripted enemy pattern definitions and oracle interface.

use crate::types::{Attribute, PatternId, PatternKind};

/// One scripted enemy effect, fired when its slot in the pattern queue
/// comes up.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternDef {
    pub id: PatternId,
    pub name: String,
    /// Narration line shown when the pattern fires.
    pub desc: String,
    pub kind: PatternKind,
    /// Collapse amount, echo stacks, or seal duration depending on `kind`.
    pub value: u32,
    /// Attribute a `seal` pattern locks out. Ignored for other kinds.
    ///
    /// Observed content only ever seals `anchor`; the field exists so the
    /// mechanic is parameterized rather than hard-wired to one attribute.
    pub target: Attribute,
}

/// Read-only access to pattern definitions.
pub trait PatternOracle {
    /// Looks up a pattern by id.
    fn pattern(&self, id: &PatternId) -> Option<&PatternDef>;
}
