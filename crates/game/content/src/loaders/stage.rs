//! Stage table loader (`battles.csv`).

use std::path::Path;

use reverie_core::env::StageDef;
use serde::Deserialize;

use crate::loaders::{LoadResult, read_rows};

/// Raw stage row as it appears in the CSV source.
#[derive(Debug, Deserialize)]
struct StageRow {
    id: String,
    name: String,
    max_turn: u32,
    collapse_limit: u32,
    enemy_id: String,
}

/// Loader for the stage/battle table.
pub struct StageLoader;

impl StageLoader {
    /// Loads stage records in row order; row order is the progression order.
    pub fn load(path: &Path) -> LoadResult<Vec<StageDef>> {
        let rows: Vec<StageRow> = read_rows(path)?;
        Ok(rows
            .into_iter()
            .map(|row| StageDef {
                id: row.id.into(),
                name: row.name,
                max_turn: row.max_turn,
                collapse_limit: row.collapse_limit,
                enemy: row.enemy_id.into(),
            })
            .collect())
    }
}
