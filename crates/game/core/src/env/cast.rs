//! Playable cast: characters and the cards they can play.

use crate::types::{Attribute, CharacterId};

/// A playable character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterDef {
    pub id: CharacterId,
    pub name: String,
    /// Tie-break preference used when resolving a two-attribute card.
    pub attitude: Attribute,
}

/// A selectable action card.
///
/// Cards carry one or two elemental attributes; a card whose secondary
/// attribute is absent (or equal to the primary) always resolves to the
/// primary regardless of attitude.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub character: CharacterId,
    pub name: String,
    /// Narration line shown when the card takes effect.
    pub desc: String,
    pub attr1: Attribute,
    pub attr2: Option<Attribute>,
}

impl Card {
    /// The card attribute that differs from `attr`, if the card has one.
    ///
    /// Used by the seal gate to redirect a sealed action onto the card's
    /// other attribute.
    pub fn alternate_to(&self, attr: Attribute) -> Option<Attribute> {
        if self.attr1 != attr {
            return Some(self.attr1);
        }
        self.attr2.filter(|&a2| a2 != attr)
    }
}

/// Read-only access to characters and cards.
pub trait CastOracle {
    /// Looks up a character by id.
    fn character(&self, id: &CharacterId) -> Option<&CharacterDef>;

    /// Every selectable card, in content order.
    fn cards(&self) -> &[Card];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(attr1: Attribute, attr2: Option<Attribute>) -> Card {
        Card {
            character: CharacterId::new("adel"),
            name: "test".into(),
            desc: "test".into(),
            attr1,
            attr2,
        }
    }

    #[test]
    fn alternate_prefers_the_other_attribute() {
        let c = card(Attribute::Anchor, Some(Attribute::Echo));
        assert_eq!(c.alternate_to(Attribute::Anchor), Some(Attribute::Echo));
        assert_eq!(c.alternate_to(Attribute::Echo), Some(Attribute::Anchor));
    }

    #[test]
    fn single_attribute_card_has_no_alternate() {
        let c = card(Attribute::Anchor, None);
        assert_eq!(c.alternate_to(Attribute::Anchor), None);

        let fixed = card(Attribute::Anchor, Some(Attribute::Anchor));
        assert_eq!(fixed.alternate_to(Attribute::Anchor), None);
    }
}
