//! Attribute resolution and the seal gate.
//!
//! Resolution decides which single attribute of a one-or-two-attribute card
//! takes effect; the seal gate then intercepts the resolved attribute if the
//! enemy currently has it sealed. Both are pure over their inputs.

use crate::env::{Card, CastOracle};
use crate::error::EngineError;
use crate::state::SealState;
use crate::types::Attribute;

/// Decides which attribute of `card` takes effect for a character with the
/// given attitude.
///
/// Rule, in order: a card whose two attributes are equal is fixed and
/// resolves to that attribute regardless of attitude; otherwise whichever
/// card attribute equals the attitude wins, primary first; otherwise the
/// primary is the default.
pub fn resolve_active_attr(card: &Card, attitude: Attribute) -> Attribute {
    if card.attr2 == Some(card.attr1) {
        return card.attr1;
    }
    if card.attr1 == attitude {
        return card.attr1;
    }
    if card.attr2 == Some(attitude) {
        return attitude;
    }
    card.attr1
}

/// The attribute `card` would resolve to for its own character.
///
/// Pure lookup used by presentation layers to preview a choice before the
/// player commits it.
pub fn predicted_attribute<C>(cast: &C, card: &Card) -> Result<Attribute, EngineError>
where
    C: CastOracle + ?Sized,
{
    let character = cast
        .character(&card.character)
        .ok_or_else(|| EngineError::UnknownCharacter(card.character.clone()))?;
    Ok(resolve_active_attr(card, character.attitude))
}

/// Outcome of running a resolved attribute through the enemy's seal record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SealOutcome {
    /// No active seal on the resolved attribute; it executes as resolved.
    Unhindered(Attribute),
    /// The resolved attribute is sealed but the card offers an alternate;
    /// the alternate executes instead.
    Redirected { from: Attribute, to: Attribute },
    /// The resolved attribute is sealed and the card has no alternate.
    /// The action fails outright and the turn does not advance.
    Blocked(Attribute),
}

/// Intercepts a resolved attribute against the enemy's active seals.
///
/// A redirected action executes its alternate without a second interception;
/// one seal check per action.
pub fn gate_seal(card: &Card, resolved: Attribute, seals: &SealState) -> SealOutcome {
    if !seals.is_sealed(resolved) {
        return SealOutcome::Unhindered(resolved);
    }
    match card.alternate_to(resolved) {
        Some(alternate) => SealOutcome::Redirected {
            from: resolved,
            to: alternate,
        },
        None => SealOutcome::Blocked(resolved),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CharacterId;

    fn card(attr1: Attribute, attr2: Option<Attribute>) -> Card {
        Card {
            character: CharacterId::new("adel"),
            name: "test card".into(),
            desc: "test".into(),
            attr1,
            attr2,
        }
    }

    #[test]
    fn fixed_card_ignores_attitude() {
        let c = card(Attribute::Echo, Some(Attribute::Echo));
        for attitude in Attribute::ALL {
            assert_eq!(resolve_active_attr(&c, attitude), Attribute::Echo);
        }
    }

    #[test]
    fn attitude_picks_the_matching_attribute() {
        let c = card(Attribute::Erosion, Some(Attribute::Anchor));
        assert_eq!(resolve_active_attr(&c, Attribute::Erosion), Attribute::Erosion);
        assert_eq!(resolve_active_attr(&c, Attribute::Anchor), Attribute::Anchor);
    }

    #[test]
    fn unmatched_attitude_falls_back_to_primary() {
        let c = card(Attribute::Erosion, Some(Attribute::Anchor));
        assert_eq!(resolve_active_attr(&c, Attribute::Echo), Attribute::Erosion);

        let single = card(Attribute::Anchor, None);
        assert_eq!(resolve_active_attr(&single, Attribute::Echo), Attribute::Anchor);
    }

    #[test]
    fn unsealed_attribute_passes_through() {
        let c = card(Attribute::Anchor, Some(Attribute::Echo));
        let seals = SealState::default();
        assert_eq!(
            gate_seal(&c, Attribute::Anchor, &seals),
            SealOutcome::Unhindered(Attribute::Anchor)
        );
    }

    #[test]
    fn sealed_attribute_redirects_to_the_alternate() {
        let c = card(Attribute::Anchor, Some(Attribute::Echo));
        let mut seals = SealState::default();
        seals.extend(Attribute::Anchor, 2);
        assert_eq!(
            gate_seal(&c, Attribute::Anchor, &seals),
            SealOutcome::Redirected {
                from: Attribute::Anchor,
                to: Attribute::Echo,
            }
        );
    }

    #[test]
    fn sealed_single_attribute_card_is_blocked() {
        let c = card(Attribute::Anchor, None);
        let mut seals = SealState::default();
        seals.extend(Attribute::Anchor, 2);
        assert_eq!(
            gate_seal(&c, Attribute::Anchor, &seals),
            SealOutcome::Blocked(Attribute::Anchor)
        );
    }

    #[test]
    fn seals_intercept_any_attribute() {
        // The gate is parameterized by the resolved attribute, not wired to
        // anchor; content that seals erosion behaves the same way.
        let c = card(Attribute::Erosion, None);
        let mut seals = SealState::default();
        seals.extend(Attribute::Erosion, 1);
        assert_eq!(
            gate_seal(&c, Attribute::Erosion, &seals),
            SealOutcome::Blocked(Attribute::Erosion)
        );
    }
}
