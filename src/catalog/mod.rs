#[allow(clippy::module_inception)]
mod catalog;
mod load;
mod project;

pub use catalog::{seed_projects, Catalog, CatalogError};
pub use load::load_catalog;
pub use project::{CatalogStats, Project, STATUS_READY};
