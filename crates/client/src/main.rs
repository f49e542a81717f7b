//! Terminal client entry point.
mod app;
mod bootstrap;

use std::sync::Arc;

use anyhow::{Context, Result};
use reverie_content::ContentFactory;
use reverie_runtime::{FileStateRepository, Session};

fn main() -> Result<()> {
    bootstrap::init_logging()?;

    let data_dir = bootstrap::data_dir();
    let tables = ContentFactory::new(&data_dir)
        .load_all()
        .with_context(|| format!("loading content tables from {}", data_dir.display()))?;

    let save_path = bootstrap::save_path();
    tracing::info!(save = %save_path.display(), "opening session");
    let repository = FileStateRepository::new(save_path)?;

    let session = Session::bootstrap(Arc::new(tables), Box::new(repository))?;
    app::run(session)
}
