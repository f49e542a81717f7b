//! Character table loader (`characters.csv`).

use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use reverie_core::env::CharacterDef;
use reverie_core::types::Attribute;
use serde::Deserialize;

use crate::loaders::{LoadResult, read_rows};

/// Raw character row as it appears in the CSV source.
#[derive(Debug, Deserialize)]
struct CharacterRow {
    id: String,
    name: String,
    attitude: String,
}

/// Loader for the character table.
pub struct CharacterLoader;

impl CharacterLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<CharacterDef>> {
        let rows: Vec<CharacterRow> = read_rows(path)?;
        rows.into_iter()
            .map(|row| {
                let attitude = Attribute::from_str(&row.attitude).with_context(|| {
                    format!("character {}: unknown attitude `{}`", row.id, row.attitude)
                })?;
                Ok(CharacterDef {
                    id: row.id.into(),
                    name: row.name,
                    attitude,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_attitudes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"id,name,attitude\nadel,Adel,erosion\nestel,Estel,anchor\n")
            .unwrap();
        let characters = CharacterLoader::load(file.path()).unwrap();
        assert_eq!(characters[0].attitude, Attribute::Erosion);
        assert_eq!(characters[1].attitude, Attribute::Anchor);
    }

    #[test]
    fn unknown_attitude_fails_the_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"id,name,attitude\nadel,Adel,stubborn\n")
            .unwrap();
        assert!(CharacterLoader::load(file.path()).is_err());
    }
}
