use serde::{Deserialize, Serialize};

/// The only status value the catalog currently assigns.
pub const STATUS_READY: &str = "ready";

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,

    /// Advisory path, never routed by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default)]
    pub category: String,
}

impl Project {
    pub fn is_ready(&self) -> bool {
        self.status == STATUS_READY
    }
}

/// Aggregate view over the catalog, derived on demand.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_projects: usize,
    pub active_projects: usize,
    pub categories: Vec<String>,
}
