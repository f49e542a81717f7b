//! Enemy pattern loader (`enemy_patterns.csv`).

use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use reverie_core::env::PatternDef;
use reverie_core::types::{Attribute, PatternKind};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_rows};

/// Raw pattern row as it appears in the CSV source.
#[derive(Debug, Deserialize)]
struct PatternRow {
    pattern_id: String,
    name: String,
    desc: String,
    kind: String,
    value: u32,
    /// Seal target attribute; absent or empty defaults to `anchor`, the
    /// only target observed content ever uses.
    #[serde(default)]
    target: Option<String>,
}

/// Loader for the enemy pattern table.
pub struct PatternLoader;

impl PatternLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<PatternDef>> {
        let rows: Vec<PatternRow> = read_rows(path)?;
        rows.into_iter()
            .map(|row| {
                let kind = PatternKind::from_str(&row.kind).with_context(|| {
                    format!("pattern {}: unknown kind tag `{}`", row.pattern_id, row.kind)
                })?;
                let target = match row.target.as_deref() {
                    None | Some("") => Attribute::Anchor,
                    Some(raw) => Attribute::from_str(raw).with_context(|| {
                        format!("pattern {}: unknown target attribute `{raw}`", row.pattern_id)
                    })?,
                };
                Ok(PatternDef {
                    id: row.pattern_id.into(),
                    name: row.name,
                    desc: row.desc,
                    kind,
                    value: row.value,
                    target,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn seal_target_defaults_to_anchor() {
        let file = write_csv(
            "pattern_id,name,desc,kind,value,target\n\
             p_seal,Seal,The ground refuses to hold.,seal,2,\n\
             p_seal_echo,Echo Seal,The echoes are silenced.,seal,3,echo\n",
        );
        let patterns = PatternLoader::load(file.path()).unwrap();
        assert_eq!(patterns[0].target, Attribute::Anchor);
        assert_eq!(patterns[0].kind, PatternKind::Seal);
        assert_eq!(patterns[1].target, Attribute::Echo);
    }

    #[test]
    fn unknown_kind_fails_the_load() {
        let file = write_csv(
            "pattern_id,name,desc,kind,value,target\n\
             p_x,X,desc,curse,2,\n",
        );
        assert!(PatternLoader::load(file.path()).is_err());
    }

    #[test]
    fn malformed_value_fails_the_load() {
        let file = write_csv(
            "pattern_id,name,desc,kind,value,target\n\
             p_x,X,desc,collapse,much,\n",
        );
        assert!(PatternLoader::load(file.path()).is_err());
    }
}
