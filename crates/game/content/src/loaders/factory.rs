//! Content factory for building the validated tables from a data directory.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::loaders::{
    CardLoader, CharacterLoader, EnemyLoader, LoadResult, PatternLoader, StageLoader,
};
use crate::tables::ContentTables;

/// Loads all encounter content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── battles.csv
/// ├── enemies.csv
/// ├── enemy_patterns.csv
/// ├── characters.csv
/// └── character_cards.csv
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a factory pointing at a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn table(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Loads and cross-validates all five tables.
    ///
    /// This is the one-shot bulk join at startup: every table must load and
    /// every cross-reference must resolve before any battle logic runs.
    pub fn load_all(&self) -> LoadResult<ContentTables> {
        let stages = StageLoader::load(&self.table("battles.csv"))?;
        let enemies = EnemyLoader::load(&self.table("enemies.csv"))?;
        let patterns = PatternLoader::load(&self.table("enemy_patterns.csv"))?;
        let characters = CharacterLoader::load(&self.table("characters.csv"))?;
        let cards = CardLoader::load(&self.table("character_cards.csv"))?;

        ContentTables::try_new(stages, enemies, patterns, characters, cards)
            .context("content tables failed referential-integrity validation")
    }

    /// The directory this factory reads from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reverie_core::env::{CastOracle, StageOracle};
    use reverie_core::progression::new_run;

    fn shipped_data() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    #[test]
    fn shipped_data_set_loads_and_validates() {
        let tables = ContentFactory::new(shipped_data()).load_all().unwrap();
        assert!(!tables.stage_order().is_empty());
        assert!(!tables.cards().is_empty());
    }

    #[test]
    fn shipped_data_set_can_start_a_run() {
        let tables = ContentFactory::new(shipped_data()).load_all().unwrap();
        let state = new_run(&tables.env()).unwrap();
        assert_eq!(state.battle.turn, 1);
        assert_eq!(state.battle.collapse, 60);
        assert_eq!(state.enemy.hp, state.enemy.max_hp);
    }

    #[test]
    fn missing_directory_fails() {
        assert!(ContentFactory::new("/nonexistent/data").load_all().is_err());
    }
}
