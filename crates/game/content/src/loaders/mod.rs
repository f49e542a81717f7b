//! Content loaders for reading encounter data from CSV files.
//!
//! Each loader converts one CSV table into the core's content types.
//! Parsing is strict: malformed numerics and unknown attribute or kind
//! tags abort the load rather than flowing into battle state.

pub mod card;
pub mod character;
pub mod enemy;
pub mod factory;
pub mod pattern;
pub mod stage;

pub use card::CardLoader;
pub use character::CharacterLoader;
pub use enemy::EnemyLoader;
pub use factory::ContentFactory;
pub use pattern::PatternLoader;
pub use stage::StageLoader;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Opens a CSV table with headers and whitespace trimming.
pub(crate) fn csv_reader(path: &Path) -> LoadResult<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open CSV table {}", path.display()))
}

/// Collects every row of a CSV table into typed records.
pub(crate) fn read_rows<T>(path: &Path) -> LoadResult<Vec<T>>
where
    T: serde::de::DeserializeOwned,
{
    let mut reader = csv_reader(path)?;
    let mut rows = Vec::new();
    for (index, row) in reader.deserialize().enumerate() {
        // Header is line 1; data rows start at line 2.
        let row: T = row.with_context(|| {
            format!("malformed row {} in {}", index + 2, path.display())
        })?;
        rows.push(row);
    }
    Ok(rows)
}
