//! File-backed state repository using JSON save files.

use std::fs;
use std::path::PathBuf;

use reverie_core::EncounterState;

use super::{RepositoryError, Result, StateRepository};

/// Persists the encounter state as a single JSON file.
///
/// Writes go through a sibling temp file followed by a rename, so a crash
/// mid-write leaves the previous save intact.
#[derive(Debug)]
pub struct FileStateRepository {
    path: PathBuf,
}

impl FileStateRepository {
    /// Creates a repository storing its save at `path`, creating parent
    /// directories as needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl StateRepository for FileStateRepository {
    fn load(&self) -> Result<Option<EncounterState>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let state = serde_json::from_str(&raw)
            .map_err(|err| RepositoryError::CorruptedData(err.to_string()))?;
        Ok(Some(state))
    }

    fn save(&self, state: &EncounterState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|err| RepositoryError::Json(err.to_string()))?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reverie_content::ContentFactory;
    use reverie_core::progression::new_run;
    use std::path::Path;

    fn sample_state() -> EncounterState {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("../game/content/data");
        let tables = ContentFactory::new(data).load_all().unwrap();
        new_run(&tables.env()).unwrap()
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStateRepository::new(dir.path().join("save.json")).unwrap();

        assert!(repo.load().unwrap().is_none());

        let mut state = sample_state();
        state.battle.turn = 3;
        state.enemy.hp = 42;
        repo.save(&state).unwrap();

        let loaded = repo.load().unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn reset_removes_the_save() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStateRepository::new(dir.path().join("save.json")).unwrap();
        repo.save(&sample_state()).unwrap();
        repo.reset().unwrap();
        assert!(repo.load().unwrap().is_none());
        // A second reset on a missing save is not an error.
        repo.reset().unwrap();
    }

    #[test]
    fn corrupted_save_is_reported_as_such() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(&path, "{not json").unwrap();
        let repo = FileStateRepository::new(&path).unwrap();
        assert!(matches!(
            repo.load(),
            Err(RepositoryError::CorruptedData(_))
        ));
    }
}
