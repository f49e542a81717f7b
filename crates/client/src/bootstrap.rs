//! Logging setup and path discovery for the terminal client.

use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initializes stderr logging filtered by `RUST_LOG` (default: warn).
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,reverie_runtime=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Locates the content data directory.
///
/// Tries, in order: the `REVERIE_DATA_DIR` environment variable, the
/// development path relative to the current directory, and the same path
/// relative to the executable for installed builds.
pub fn data_dir() -> PathBuf {
    if let Ok(env_dir) = std::env::var("REVERIE_DATA_DIR") {
        return PathBuf::from(env_dir);
    }

    let dev_path = PathBuf::from("crates/game/content/data");
    if dev_path.is_dir() {
        return dev_path;
    }

    if let Ok(exe_path) = std::env::current_exe()
        && let Some(root) = exe_path.parent().and_then(|p| p.parent()).and_then(|p| p.parent())
    {
        let installed = root.join("crates/game/content/data");
        if installed.is_dir() {
            return installed;
        }
    }

    dev_path
}

/// Save file location under the platform data directory, with a
/// current-directory fallback when no home is available.
pub fn save_path() -> PathBuf {
    if let Some(dirs) = directories::ProjectDirs::from("", "", "reverie") {
        return dirs.data_dir().join("save.json");
    }
    PathBuf::from("reverie-save.json")
}
