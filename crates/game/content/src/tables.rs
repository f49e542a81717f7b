//! Validated, immutable content tables.

use std::collections::HashMap;

use reverie_core::env::{
    Card, CastOracle, CharacterDef, EnemyOracle, EnemyTemplate, Env, EncounterEnv, PatternDef,
    PatternOracle, StageDef, StageOracle,
};
use reverie_core::types::{CharacterId, EnemyId, PatternId, StageId};

/// Referential-integrity failures detected while assembling the tables.
///
/// Any of these means the content set is inconsistent; battle setup must
/// not proceed on a partially valid set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("no stages defined; the progression order is empty")]
    EmptyStageOrder,

    #[error("duplicate {table} id: {id}")]
    DuplicateId { table: &'static str, id: String },

    #[error("stage {stage} references unknown enemy id: {enemy}")]
    UnknownEnemyRef { stage: StageId, enemy: EnemyId },

    #[error("enemy {enemy} references unknown pattern id: {pattern}")]
    UnknownPatternRef { enemy: EnemyId, pattern: PatternId },

    #[error("card {card} references unknown character id: {character}")]
    UnknownCharacterRef { card: String, character: CharacterId },
}

/// The five lookup tables, keyed and cross-checked.
///
/// Stage progression order is the row order of the stage table. The whole
/// aggregate is shared-immutable for the lifetime of a session.
#[derive(Clone, Debug)]
pub struct ContentTables {
    stages: HashMap<StageId, StageDef>,
    stage_order: Vec<StageId>,
    enemies: HashMap<EnemyId, EnemyTemplate>,
    patterns: HashMap<PatternId, PatternDef>,
    characters: HashMap<CharacterId, CharacterDef>,
    cards: Vec<Card>,
}

impl ContentTables {
    /// Assembles and validates the tables from loaded rows.
    ///
    /// Fails fast on duplicate ids and on any dangling reference
    /// (stage → enemy, enemy → pattern, card → character).
    pub fn try_new(
        stages: Vec<StageDef>,
        enemies: Vec<EnemyTemplate>,
        patterns: Vec<PatternDef>,
        characters: Vec<CharacterDef>,
        cards: Vec<Card>,
    ) -> Result<Self, ContentError> {
        if stages.is_empty() {
            return Err(ContentError::EmptyStageOrder);
        }

        let stage_order: Vec<StageId> = stages.iter().map(|s| s.id.clone()).collect();

        let mut pattern_map = HashMap::new();
        for pattern in patterns {
            if let Some(dup) = pattern_map.insert(pattern.id.clone(), pattern) {
                return Err(ContentError::DuplicateId {
                    table: "pattern",
                    id: dup.id.to_string(),
                });
            }
        }

        let mut enemy_map = HashMap::new();
        for enemy in enemies {
            for pattern_id in &enemy.patterns {
                if !pattern_map.contains_key(pattern_id) {
                    return Err(ContentError::UnknownPatternRef {
                        enemy: enemy.id.clone(),
                        pattern: pattern_id.clone(),
                    });
                }
            }
            if let Some(dup) = enemy_map.insert(enemy.id.clone(), enemy) {
                return Err(ContentError::DuplicateId {
                    table: "enemy",
                    id: dup.id.to_string(),
                });
            }
        }

        let mut stage_map = HashMap::new();
        for stage in stages {
            if !enemy_map.contains_key(&stage.enemy) {
                return Err(ContentError::UnknownEnemyRef {
                    stage: stage.id.clone(),
                    enemy: stage.enemy.clone(),
                });
            }
            if let Some(dup) = stage_map.insert(stage.id.clone(), stage) {
                return Err(ContentError::DuplicateId {
                    table: "stage",
                    id: dup.id.to_string(),
                });
            }
        }

        let mut character_map = HashMap::new();
        for character in characters {
            if let Some(dup) = character_map.insert(character.id.clone(), character) {
                return Err(ContentError::DuplicateId {
                    table: "character",
                    id: dup.id.to_string(),
                });
            }
        }

        for card in &cards {
            if !character_map.contains_key(&card.character) {
                return Err(ContentError::UnknownCharacterRef {
                    card: card.name.clone(),
                    character: card.character.clone(),
                });
            }
        }

        Ok(Self {
            stages: stage_map,
            stage_order,
            enemies: enemy_map,
            patterns: pattern_map,
            characters: character_map,
            cards,
        })
    }

    /// The core-facing environment over these tables.
    pub fn env(&self) -> EncounterEnv<'_> {
        Env::new(self, self, self, self)
    }
}

impl StageOracle for ContentTables {
    fn stage(&self, id: &StageId) -> Option<&StageDef> {
        self.stages.get(id)
    }

    fn stage_order(&self) -> &[StageId] {
        &self.stage_order
    }
}

impl EnemyOracle for ContentTables {
    fn enemy(&self, id: &EnemyId) -> Option<&EnemyTemplate> {
        self.enemies.get(id)
    }
}

impl PatternOracle for ContentTables {
    fn pattern(&self, id: &PatternId) -> Option<&PatternDef> {
        self.patterns.get(id)
    }
}

impl CastOracle for ContentTables {
    fn character(&self, id: &CharacterId) -> Option<&CharacterDef> {
        self.characters.get(id)
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }
}
