//! Deterministic battle resolution core for the Reverie encounter game.
//!
//! A player repeatedly commits a card — an action tagged with one or two
//! elemental attributes — against a single enemy with hit points, a cyclic
//! pattern script, and temporary attribute seals. This crate owns the whole
//! resolution pipeline: attribute resolution, the seal gate, damage and
//! collapse arithmetic, the enemy pattern engine, turn advancement, the
//! end-condition check, and stage progression.
//!
//! The core consumes immutable content tables (through the oracle traits in
//! [`env`]) and a mutable [`EncounterState`], and produces state mutations
//! plus narrated [`EncounterEvent`]s. It performs no I/O, no rendering, and
//! no persistence; those are collaborator concerns layered on top.

pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod pattern;
pub mod progression;
pub mod resolve;
pub mod state;
pub mod turn;
pub mod types;

pub use action::{ActionOutcome, apply_action};
pub use config::EncounterConfig;
pub use engine::{EncounterEngine, TurnReport};
pub use env::{
    Card, CastOracle, CharacterDef, EncounterEnv, EnemyOracle, EnemyTemplate, Env, PatternDef,
    PatternOracle, StageDef, StageOracle,
};
pub use error::{EngineError, SetupError};
pub use event::EncounterEvent;
pub use pattern::apply_enemy_pattern;
pub use progression::{init_enemy, new_run, start_next_battle};
pub use resolve::{SealOutcome, gate_seal, predicted_attribute, resolve_active_attr};
pub use state::{
    BattleState, EncounterState, EnemyState, PartyMember, PartyState, Progress, SealState,
};
pub use turn::{EndCondition, check_end, next_turn};
pub use types::{
    Attribute, CharacterId, EnemyId, EnemyKind, PatternId, PatternKind, StageId,
};
