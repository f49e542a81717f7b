//! Turn resolution pipeline.
//!
//! The [`EncounterEngine`] is the authoritative reducer for
//! [`EncounterState`]. A player-chosen card flows through attribute
//! resolution, the seal gate, action application, the single end-condition
//! check, and finally either turn advancement or stage progression. The
//! engine mutates state and narrates what happened; it performs no I/O.

use crate::action::apply_action;
use crate::env::{Card, EncounterEnv};
use crate::error::EngineError;
use crate::event::EncounterEvent;
use crate::progression::start_next_battle;
use crate::resolve::{SealOutcome, gate_seal, resolve_active_attr};
use crate::state::EncounterState;
use crate::turn::{EndCondition, check_end, next_turn};

/// Complete outcome of one player action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Terminal outcome, if the action ended the encounter.
    pub end: Option<EndCondition>,
    /// True when a seal swallowed the action: nothing changed except the
    /// narration, and the turn did not advance.
    pub wasted: bool,
    /// Narrated beats of this resolution, in chronological order.
    pub events: Vec<EncounterEvent>,
}

/// Encounter engine driving the resolution pipeline over a borrowed state.
///
/// Strictly turn-synchronous: one action runs to completion before the next
/// is accepted, so exclusive mutable access for the duration of a call is
/// the entire concurrency story.
pub struct EncounterEngine<'a> {
    state: &'a mut EncounterState,
}

impl<'a> EncounterEngine<'a> {
    /// Creates an engine over the given state.
    pub fn new(state: &'a mut EncounterState) -> Self {
        Self { state }
    }

    /// Read access to the current state, for callers that hold the engine.
    pub fn state(&self) -> &EncounterState {
        self.state
    }

    /// Resolves one player-chosen card.
    ///
    /// On a win the stage transition has already happened by the time this
    /// returns: the report carries `end = Some(Win)` while the state already
    /// describes the next battle.
    pub fn play_card(
        &mut self,
        env: &EncounterEnv<'_>,
        card: &Card,
    ) -> Result<TurnReport, EngineError> {
        let character = env
            .cast()
            .character(&card.character)
            .ok_or_else(|| EngineError::UnknownCharacter(card.character.clone()))?;

        let mut events = vec![EncounterEvent::CardChosen {
            character: character.name.clone(),
            card: card.name.clone(),
        }];

        let resolved = resolve_active_attr(card, character.attitude);
        let attr = match gate_seal(card, resolved, &self.state.enemy.seals) {
            SealOutcome::Unhindered(attr) => attr,
            SealOutcome::Redirected { from, to } => {
                events.push(EncounterEvent::SealRedirected { from, to });
                to
            }
            SealOutcome::Blocked(attr) => {
                events.push(EncounterEvent::SealBlocked { attr });
                return Ok(TurnReport {
                    end: None,
                    wasted: true,
                    events,
                });
            }
        };

        events.push(EncounterEvent::Intervention {
            attr,
            desc: card.desc.clone(),
        });
        apply_action(self.state, attr);

        let end = check_end(self.state);
        match end {
            Some(EndCondition::Win) => {
                events.push(EncounterEvent::Victory);
                start_next_battle(self.state, env, &mut events)?;
            }
            Some(EndCondition::Collapse) => events.push(EncounterEvent::Collapsed),
            Some(EndCondition::Timeout) => events.push(EncounterEvent::TimedOut),
            None => next_turn(self.state, env, &mut events),
        }

        Ok(TurnReport {
            end,
            wasted: false,
            events,
        })
    }
}
