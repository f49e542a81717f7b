//! Closed vocabulary of the battle core: attributes, pattern kinds, enemy
//! kinds, and the typed string ids that key into the content tables.
//!
//! Attributes and kinds are deliberately closed enums rather than raw string
//! tags so that every dispatch over them is an exhaustive match; adding a new
//! kind is a compile-time-visible decision.

use core::fmt;

/// Effect-category of a combat action.
///
/// The set is fixed; there is no extension point.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    /// Aggressive play: high damage, destabilizes the scene.
    Erosion,
    /// Stabilizing play: modest damage, settles the collapse meter.
    Anchor,
    /// Utility play: low damage, accumulates echo stacks on the enemy.
    Echo,
}

impl Attribute {
    /// All attributes, in canonical order.
    pub const ALL: [Attribute; 3] = [Attribute::Erosion, Attribute::Anchor, Attribute::Echo];

    /// Canonical position, used to index fixed-size per-attribute tables.
    pub(crate) const fn index(self) -> usize {
        match self {
            Attribute::Erosion => 0,
            Attribute::Anchor => 1,
            Attribute::Echo => 2,
        }
    }
}

/// What a scripted enemy pattern does when it fires.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PatternKind {
    /// Raises the collapse meter by the pattern value.
    Collapse,
    /// Adds the pattern value to the enemy's echo stacks.
    Echo,
    /// Seals the target attribute for `value` turns.
    Seal,
}

/// Enemy classification; bosses get the phase-transition pattern override.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EnemyKind {
    /// Regular encounter enemy.
    #[default]
    Normal,
    /// Boss enemy; skips its opening pattern once below half HP.
    Boss,
}

macro_rules! content_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

content_id!(
    /// Key of a stage/battle record in the content tables.
    StageId
);
content_id!(
    /// Key of an enemy template in the content tables.
    EnemyId
);
content_id!(
    /// Key of a scripted enemy pattern in the content tables.
    PatternId
);
content_id!(
    /// Key of a playable character in the content tables.
    CharacterId
);

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn attribute_round_trips_through_snake_case() {
        for attr in Attribute::ALL {
            let parsed = Attribute::from_str(attr.as_ref()).unwrap();
            assert_eq!(parsed, attr);
        }
        assert_eq!(Attribute::from_str("erosion").unwrap(), Attribute::Erosion);
        assert_eq!(Attribute::from_str("Anchor").unwrap(), Attribute::Anchor);
        assert!(Attribute::from_str("gravity").is_err());
    }

    #[test]
    fn pattern_kind_parses_content_tags() {
        assert_eq!(PatternKind::from_str("collapse").unwrap(), PatternKind::Collapse);
        assert_eq!(PatternKind::from_str("seal").unwrap(), PatternKind::Seal);
        assert!(PatternKind::from_str("sealing").is_err());
    }

    #[test]
    fn attribute_indices_are_distinct() {
        let mut seen = [false; 3];
        for attr in Attribute::ALL {
            assert!(!seen[attr.index()]);
            seen[attr.index()] = true;
        }
    }
}
