//! Narrated events emitted during turn resolution.
//!
//! The core communicates everything player-visible through these events;
//! it never formats text for a particular surface. Each variant renders to
//! exactly one log line via [`Display`], in the voice of the stage
//! narration. Events are emitted in chronological order; a presentation
//! collaborator that wants most-recent-first reverses them.

use core::fmt;

use crate::types::{Attribute, PatternId};

/// One narrated beat of a resolved turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterEvent {
    /// A session began or resumed; the opening line of the log.
    StageOpened,
    /// The player committed a card.
    CardChosen { character: String, card: String },
    /// The card took effect with the resolved attribute.
    Intervention { attr: Attribute, desc: String },
    /// A seal redirected the action onto the card's other attribute.
    SealRedirected { from: Attribute, to: Attribute },
    /// A seal swallowed the action outright; the turn was wasted.
    SealBlocked { attr: Attribute },
    /// The enemy's constant pressure raised the collapse meter.
    Pressure { enemy: String, amount: u32 },
    /// A scripted enemy pattern fired.
    Pattern { desc: String },
    /// A scheduled pattern id had no record and was skipped.
    ///
    /// Diagnostic, not narration: presentation layers should not render
    /// this; the runtime logs it instead.
    PatternSkipped { pattern: PatternId },
    /// The enemy was defeated.
    Victory,
    /// The collapse meter reached its cap.
    Collapsed,
    /// The turn cap was exceeded.
    TimedOut,
    /// Progression moved to the next stage.
    Transition { stage: String, enemy: String },
}

impl EncounterEvent {
    /// True for events meant for operator diagnostics rather than narration.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, EncounterEvent::PatternSkipped { .. })
    }
}

impl fmt::Display for EncounterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncounterEvent::StageOpened => {
                write!(f, "[chronicle] The stage opens. Memory replays itself.")
            }
            EncounterEvent::CardChosen { character, card } => {
                write!(f, "[chronicle] {character}: {card}")
            }
            EncounterEvent::Intervention { attr, desc } => {
                write!(f, "[intervention: {attr}] {desc}")
            }
            EncounterEvent::SealRedirected { from, to } => {
                write!(f, "[seal] {from} is sealed; the action slips into {to}.")
            }
            EncounterEvent::SealBlocked { attr } => {
                write!(f, "[seal] {attr} is sealed; the action dissipates.")
            }
            EncounterEvent::Pressure { enemy, amount } => {
                write!(f, "[distortion] {enemy}'s pressure (+{amount})")
            }
            EncounterEvent::Pattern { desc } => write!(f, "[pattern] {desc}"),
            EncounterEvent::PatternSkipped { pattern } => {
                write!(f, "[pattern] {pattern} is missing from the record")
            }
            EncounterEvent::Victory => write!(f, "[closure] The scene is complete."),
            EncounterEvent::Collapsed => write!(f, "[collapse] The record crumbles."),
            EncounterEvent::TimedOut => write!(f, "[curtain] Time has passed."),
            EncounterEvent::Transition { stage, enemy } => {
                write!(f, "[transition] {stage}: {enemy}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narration_names_the_resolved_attribute() {
        let line = EncounterEvent::Intervention {
            attr: Attribute::Erosion,
            desc: "The wall remembers rain.".into(),
        }
        .to_string();
        assert_eq!(line, "[intervention: erosion] The wall remembers rain.");
    }

    #[test]
    fn only_skipped_patterns_are_diagnostic() {
        assert!(
            EncounterEvent::PatternSkipped {
                pattern: PatternId::new("p_missing")
            }
            .is_diagnostic()
        );
        assert!(!EncounterEvent::Victory.is_diagnostic());
    }
}
