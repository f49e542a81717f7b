//! Enemy template loader (`enemies.csv`).

use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use reverie_core::env::EnemyTemplate;
use reverie_core::types::{EnemyKind, PatternId};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_rows};

/// Raw enemy row as it appears in the CSV source.
#[derive(Debug, Deserialize)]
struct EnemyRow {
    enemy_id: String,
    name: String,
    max_hp: u32,
    #[serde(rename = "type")]
    kind: String,
    /// Absent or empty means no constant pressure.
    #[serde(default)]
    base_pressure: Option<u32>,
    /// Pipe-joined pattern id list; absent or empty means no script.
    #[serde(default)]
    patterns: Option<String>,
}

/// Loader for the enemy template table.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let rows: Vec<EnemyRow> = read_rows(path)?;
        rows.into_iter()
            .map(|row| {
                let kind = EnemyKind::from_str(&row.kind).with_context(|| {
                    format!("enemy {}: unknown type tag `{}`", row.enemy_id, row.kind)
                })?;
                Ok(EnemyTemplate {
                    id: row.enemy_id.into(),
                    name: row.name,
                    max_hp: row.max_hp,
                    kind,
                    base_pressure: row.base_pressure.unwrap_or(0),
                    patterns: parse_pattern_script(row.patterns.as_deref().unwrap_or("")),
                })
            })
            .collect()
    }
}

/// Splits a pipe-joined pattern id list, dropping empty segments.
fn parse_pattern_script(raw: &str) -> Vec<PatternId> {
    raw.split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(PatternId::from)
        .collect()
}
