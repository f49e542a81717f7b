//! Card table loader (`character_cards.csv`).

use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use reverie_core::env::Card;
use reverie_core::types::Attribute;
use serde::Deserialize;

use crate::loaders::{LoadResult, read_rows};

/// Raw card row as it appears in the CSV source.
#[derive(Debug, Deserialize)]
struct CardRow {
    character_id: String,
    card_name: String,
    desc: String,
    attr1: String,
    /// Absent or empty means a single-attribute card.
    #[serde(default)]
    attr2: Option<String>,
}

/// Loader for the card table.
pub struct CardLoader;

impl CardLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Card>> {
        let rows: Vec<CardRow> = read_rows(path)?;
        rows.into_iter()
            .map(|row| {
                let attr1 = Attribute::from_str(&row.attr1).with_context(|| {
                    format!("card {}: unknown attribute `{}`", row.card_name, row.attr1)
                })?;
                let attr2 = match row.attr2.as_deref() {
                    None | Some("") => None,
                    Some(raw) => Some(Attribute::from_str(raw).with_context(|| {
                        format!("card {}: unknown attribute `{raw}`", row.card_name)
                    })?),
                };
                Ok(Card {
                    character: row.character_id.into(),
                    name: row.card_name,
                    desc: row.desc,
                    attr1,
                    attr2,
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
    fn empty_secondary_attribute_means_single_attribute() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"character_id,card_name,desc,attr1,attr2\n\
              adel,Rainfall Verdict,The rain testifies.,erosion,\n\
              adel,Split Recollection,Two versions argue.,erosion,anchor\n",
        )
        .unwrap();
        let cards = CardLoader::load(file.path()).unwrap();
        assert_eq!(cards[0].attr2, None);
        assert_eq!(cards[1].attr2, Some(Attribute::Anchor));
    }

    #[test]
    fn unknown_attribute_fails_the_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"character_id,card_name,desc,attr1,attr2\nadel,X,desc,fire,\n")
            .unwrap();
        assert!(CardLoader::load(file.path()).is_err());
    }
}
