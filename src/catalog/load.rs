use super::Catalog;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            info!("Loading catalog from {:?}...", path);
            Catalog::from_json_file(path)
                .with_context(|| format!("Could not load catalog from {:?}", path))?
        }
        None => {
            info!("No catalog file given, using the built-in projects.");
            Catalog::seeded()
        }
    };

    let stats = catalog.stats();
    info!(
        "Catalog has:\n{} projects\n{} active\n{} categories",
        stats.total_projects,
        stats.active_projects,
        stats.categories.len()
    );
    Ok(catalog)
}
