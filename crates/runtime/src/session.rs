//! Session layer driving the battle core.
//!
//! A session owns the one mutable [`EncounterState`], the shared-immutable
//! content tables, and a persistence repository. It is strictly
//! turn-synchronous: one player action runs through the full resolution
//! pipeline, is persisted, and is narrated before the next is accepted.

use std::sync::Arc;

use reverie_content::ContentTables;
use reverie_core::engine::EncounterEngine;
use reverie_core::env::{Card, CastOracle};
use reverie_core::error::{EngineError, SetupError};
use reverie_core::event::EncounterEvent;
use reverie_core::progression::new_run;
use reverie_core::resolve::predicted_attribute;
use reverie_core::state::EncounterState;
use reverie_core::turn::EndCondition;
use reverie_core::types::Attribute;

use crate::repository::{RepositoryError, StateRepository};

/// Failures surfaced by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A card choice outside the loaded card list.
    #[error("card index {index} out of range ({count} cards)")]
    CardOutOfRange { index: usize, count: usize },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// What a resolved player action produced, shaped for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Terminal outcome, if the action ended the encounter.
    pub end: Option<EndCondition>,
    /// True when a seal swallowed the action and the turn did not advance.
    pub wasted: bool,
    /// Narrated log lines for this resolution, most-recent-first.
    pub log: Vec<String>,
}

/// One player's running encounter.
pub struct Session {
    tables: Arc<ContentTables>,
    repository: Box<dyn StateRepository>,
    state: EncounterState,
}

impl Session {
    /// Opens a session: resumes the persisted state when one exists,
    /// otherwise starts a fresh run and saves it immediately.
    ///
    /// A corrupted save is discarded with a diagnostic rather than aborting
    /// the session; the player restarts from the beginning.
    pub fn bootstrap(
        tables: Arc<ContentTables>,
        repository: Box<dyn StateRepository>,
    ) -> Result<Self, SessionError> {
        let state = match repository.load() {
            Ok(Some(state)) => {
                tracing::info!(
                    stage = %state.battle.stage,
                    turn = state.battle.turn,
                    "resuming saved encounter"
                );
                state
            }
            Ok(None) => {
                let state = new_run(&tables.env())?;
                repository.save(&state)?;
                tracing::info!(stage = %state.battle.stage, "starting fresh run");
                state
            }
            Err(RepositoryError::CorruptedData(detail)) => {
                tracing::warn!(%detail, "save data corrupted; starting over");
                let state = new_run(&tables.env())?;
                repository.save(&state)?;
                state
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            tables,
            repository,
            state,
        })
    }

    /// The opening narration line for a newly rendered log.
    pub fn opening_narration() -> String {
        EncounterEvent::StageOpened.to_string()
    }

    /// Current encounter state, for display.
    pub fn state(&self) -> &EncounterState {
        &self.state
    }

    /// Every selectable card, in content order.
    pub fn cards(&self) -> &[Card] {
        self.tables.cards()
    }

    /// Display name for a character id, when the cast knows it.
    pub fn character_name(&self, id: &reverie_core::types::CharacterId) -> Option<&str> {
        self.tables.character(id).map(|c| c.name.as_str())
    }

    /// The attribute the card at `index` would resolve to, for choice
    /// previews.
    pub fn predict(&self, index: usize) -> Result<Attribute, SessionError> {
        let card = self.card_at(index)?;
        Ok(predicted_attribute(self.tables.as_ref(), card)?)
    }

    /// Resolves the card at `index` through the full pipeline and persists
    /// the result — wasted (seal-blocked) actions included, so the save
    /// always reflects the latest turn.
    pub fn choose_card(&mut self, index: usize) -> Result<TurnOutcome, SessionError> {
        let card = self.card_at(index)?.clone();

        let env = self.tables.env();
        let report = EncounterEngine::new(&mut self.state).play_card(&env, &card)?;

        self.repository.save(&self.state)?;

        if let Some(end) = report.end {
            tracing::info!(%end, stage = %self.state.battle.stage, "encounter ended");
        } else {
            tracing::debug!(
                turn = self.state.battle.turn,
                collapse = self.state.battle.collapse,
                enemy_hp = self.state.enemy.hp,
                wasted = report.wasted,
                "turn resolved"
            );
        }

        let mut log = Vec::with_capacity(report.events.len());
        for event in &report.events {
            if event.is_diagnostic() {
                tracing::warn!(event = %event, "content diagnostic during resolution");
            } else {
                log.push(event.to_string());
            }
        }
        // Presentation wants most-recent-first.
        log.reverse();

        Ok(TurnOutcome {
            end: report.end,
            wasted: report.wasted,
            log,
        })
    }

    /// Discards the save and restarts from the first stage.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.repository.reset()?;
        self.state = new_run(&self.tables.env())?;
        self.repository.save(&self.state)?;
        tracing::info!("session reset to a fresh run");
        Ok(())
    }

    fn card_at(&self, index: usize) -> Result<&Card, SessionError> {
        let cards = self.tables.cards();
        cards.get(index).ok_or(SessionError::CardOutOfRange {
            index,
            count: cards.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStateRepository;
    use reverie_content::ContentFactory;
    use std::path::Path;

    fn tables() -> Arc<ContentTables> {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("../game/content/data");
        Arc::new(ContentFactory::new(data).load_all().unwrap())
    }

    fn session() -> Session {
        Session::bootstrap(tables(), Box::new(MemoryStateRepository::new())).unwrap()
    }

    #[test]
    fn bootstrap_persists_the_fresh_run() {
        let tables = tables();
        let repo = Arc::new(MemoryStateRepository::new());
        // Box a clone-backed view so the test can inspect the shared store.
        struct Shared(Arc<MemoryStateRepository>);
        impl StateRepository for Shared {
            fn load(&self) -> crate::repository::Result<Option<EncounterState>> {
                self.0.load()
            }
            fn save(&self, state: &EncounterState) -> crate::repository::Result<()> {
                self.0.save(state)
            }
            fn reset(&self) -> crate::repository::Result<()> {
                self.0.reset()
            }
        }

        let session = Session::bootstrap(tables, Box::new(Shared(Arc::clone(&repo)))).unwrap();
        let saved = repo.load().unwrap().unwrap();
        assert_eq!(&saved, session.state());
        assert_eq!(saved.battle.turn, 1);
    }

    #[test]
    fn choosing_a_card_advances_and_narrates_most_recent_first() {
        let mut session = session();
        let outcome = session.choose_card(0).unwrap();

        assert_eq!(outcome.end, None);
        assert!(!outcome.wasted);
        assert_eq!(session.state().battle.turn, 2);
        // Chronologically the card line comes first, so it is last here.
        assert!(outcome.log.last().unwrap().starts_with("[chronicle]"));
    }

    #[test]
    fn out_of_range_choice_is_rejected() {
        let mut session = session();
        let err = session.choose_card(999).unwrap_err();
        assert!(matches!(err, SessionError::CardOutOfRange { .. }));
    }

    #[test]
    fn wasted_action_is_persisted_but_does_not_advance() {
        let mut session = session();
        // Seal anchor so Estel's single-attribute anchor card is blocked.
        session.state.enemy.seals.extend(Attribute::Anchor, 2);
        let blocked_index = 2; // Steadfast Ledger: anchor only

        let outcome = session.choose_card(blocked_index).unwrap();
        assert!(outcome.wasted);
        assert_eq!(session.state().battle.turn, 1);
        assert_eq!(session.state().enemy.seals.remaining(Attribute::Anchor), 2);

        let saved = session.repository.load().unwrap().unwrap();
        assert_eq!(&saved, session.state());
    }

    #[test]
    fn predict_previews_the_resolved_attribute() {
        let session = session();
        // Split Recollection (erosion/anchor) played by Adel (erosion).
        assert_eq!(session.predict(1).unwrap(), Attribute::Erosion);
        // Held Note (echo/anchor) played by Vanessa (echo).
        assert_eq!(session.predict(5).unwrap(), Attribute::Echo);
    }

    #[test]
    fn reset_returns_to_the_first_stage() {
        let mut session = session();
        session.choose_card(0).unwrap();
        session.reset().unwrap();
        assert_eq!(session.state().battle.turn, 1);
        assert_eq!(session.state().progress.stage_index, 0);
    }
}
