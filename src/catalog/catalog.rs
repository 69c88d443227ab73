use super::{CatalogStats, Project, STATUS_READY};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Could not read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Project at position {0} has an empty id")]
    EmptyId(usize),

    #[error("Duplicate project id \"{0}\"")]
    DuplicateId(String),
}

/// (id, name, description, category) of the built-in projects.
const SEED: [(&str, &str, &str, &str); 6] = [
    ("eaib", "🤖 EAIB", "AI Assistant & Automation", "ai"),
    (
        "motivabot",
        "💪 MotivaBot",
        "Motivation & Productivity",
        "productivity",
    ),
    (
        "broadcast",
        "📡 Broadcast Hub",
        "Communication Platform",
        "communication",
    ),
    ("analytics", "📊 Analytics", "Data & Insights", "data"),
    ("tools", "🛠️ Dev Tools", "Development Utilities", "development"),
    ("docs", "📚 Documentation", "Project Guides", "documentation"),
];

/// Projects shipped with the server, optionally with their advisory url.
pub fn seed_projects(with_url: bool) -> Vec<Project> {
    SEED.iter()
        .map(|(id, name, description, category)| Project {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            status: STATUS_READY.to_owned(),
            url: with_url.then(|| format!("/{}", id)),
            category: category.to_string(),
        })
        .collect()
}

/// Read-only project table, built once at startup.
#[derive(Debug)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Result<Catalog, CatalogError> {
        let mut seen = HashSet::new();
        for (position, project) in projects.iter().enumerate() {
            if project.id.is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
        }
        Ok(Catalog { projects })
    }

    pub fn seeded() -> Catalog {
        Catalog {
            projects: seed_projects(true),
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Catalog, CatalogError> {
        let file_text = std::fs::read_to_string(path)?;
        let projects: Vec<Project> = serde_json::from_str(&file_text)?;
        Catalog::new(projects)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn get_projects_count(&self) -> usize {
        self.projects.len()
    }

    pub fn stats(&self) -> CatalogStats {
        let mut categories: Vec<String> = Vec::new();
        for project in self.projects.iter() {
            if !categories.contains(&project.category) {
                categories.push(project.category.clone());
            }
        }
        CatalogStats {
            total_projects: self.projects.len(),
            active_projects: self.projects.iter().filter(|p| p.is_ready()).count(),
            categories,
        }
    }
}
