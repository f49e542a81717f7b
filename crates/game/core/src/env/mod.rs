//! Traits describing read-only content tables.
//!
//! Oracles expose the static content the resolver needs: stage records,
//! enemy templates, scripted patterns, and the playable cast. The [`Env`]
//! aggregate bundles them so the engine can reach everything it needs
//! without hard coupling to a concrete table implementation.
//!
//! Content is loaded once before any battle runs and is immutable for the
//! lifetime of a session; oracles therefore hand out shared references.

mod cast;
mod enemy;
mod pattern;
mod stage;

pub use cast::{Card, CastOracle, CharacterDef};
pub use enemy::{EnemyOracle, EnemyTemplate};
pub use pattern::{PatternDef, PatternOracle};
pub use stage::{StageDef, StageOracle};

/// Aggregates the read-only oracles required by the resolver pipeline.
///
/// All four tables are mandatory; partial content is not a supported state.
#[derive(Clone, Copy)]
pub struct Env<'a, S, E, P, C>
where
    S: StageOracle + ?Sized,
    E: EnemyOracle + ?Sized,
    P: PatternOracle + ?Sized,
    C: CastOracle + ?Sized,
{
    stages: &'a S,
    enemies: &'a E,
    patterns: &'a P,
    cast: &'a C,
}

/// Trait-object form used throughout the engine.
pub type EncounterEnv<'a> =
    Env<'a, dyn StageOracle + 'a, dyn EnemyOracle + 'a, dyn PatternOracle + 'a, dyn CastOracle + 'a>;

impl<'a, S, E, P, C> Env<'a, S, E, P, C>
where
    S: StageOracle + ?Sized,
    E: EnemyOracle + ?Sized,
    P: PatternOracle + ?Sized,
    C: CastOracle + ?Sized,
{
    pub fn new(stages: &'a S, enemies: &'a E, patterns: &'a P, cast: &'a C) -> Self {
        Self {
            stages,
            enemies,
            patterns,
            cast,
        }
    }

    pub fn stages(&self) -> &'a S {
        self.stages
    }

    pub fn enemies(&self) -> &'a E {
        self.enemies
    }

    pub fn patterns(&self) -> &'a P {
        self.patterns
    }

    pub fn cast(&self) -> &'a C {
        self.cast
    }
}
