//! HaloAI Studios Hub
//!
//! A read-only project catalog served over HTTP, and the dashboard client
//! that renders it.

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, CatalogStats, Project};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
