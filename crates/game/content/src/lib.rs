//! Data-driven content tables and loaders.
//!
//! This crate houses the static encounter content and provides loaders for
//! the five CSV source tables:
//! - stages/battles (turn cap, collapse cap, enemy reference)
//! - enemy templates (HP, type, pressure, pattern script)
//! - enemy patterns (kind, value, seal target)
//! - characters (attitude)
//! - cards (attributes, narration)
//!
//! Content is loaded once at startup, validated for referential integrity,
//! and consumed by the core through its oracle traits; it never appears in
//! encounter state. Malformed numerics and unknown attribute or kind tags
//! fail loading instead of leaking into battle arithmetic.

pub mod loaders;
pub mod tables;

pub use loaders::{
    CardLoader, CharacterLoader, ContentFactory, EnemyLoader, LoadResult, PatternLoader,
    StageLoader,
};
pub use tables::{ContentError, ContentTables};
