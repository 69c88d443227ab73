use tracing::{info, warn};

use super::{CatalogApi, ContextMenu, Theme};
use crate::catalog::{seed_projects, CatalogStats, Project};

pub const FALLBACK_WARNING: &str = "Failed to load projects. Running in offline mode.";

/// Projects shown when the service cannot be reached.
pub fn fallback_projects() -> Vec<Project> {
    seed_projects(false)
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadPhase {
    Loading,
    Loaded {
        projects: Vec<Project>,
        stats: CatalogStats,
    },
    LoadedWithFallback {
        projects: Vec<Project>,
        warning: String,
    },
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }

    pub fn projects(&self) -> &[Project] {
        match self {
            LoadPhase::Loading => &[],
            LoadPhase::Loaded { projects, .. } => projects,
            LoadPhase::LoadedWithFallback { projects, .. } => projects,
        }
    }

    pub fn stats(&self) -> Option<&CatalogStats> {
        match self {
            LoadPhase::Loaded { stats, .. } => Some(stats),
            _ => None,
        }
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            LoadPhase::LoadedWithFallback { warning, .. } => Some(warning),
            _ => None,
        }
    }
}

/// Client-side view model: server data plus purely local UI state.
#[derive(Debug)]
pub struct Dashboard {
    phase: LoadPhase,
    theme: Theme,
    context_menu: ContextMenu,
}

impl Default for Dashboard {
    fn default() -> Self {
        Dashboard {
            phase: LoadPhase::Loading,
            theme: Theme::default(),
            context_menu: ContextMenu::default(),
        }
    }
}

impl Dashboard {
    pub fn new(theme: Theme) -> Self {
        Dashboard {
            theme,
            ..Default::default()
        }
    }

    /// Fetches projects and stats concurrently and settles the load phase.
    ///
    /// Only the first call fetches; later calls return the settled phase.
    /// Both fetches must succeed, otherwise the static fallback is shown.
    pub async fn load(&mut self, api: &dyn CatalogApi) -> &LoadPhase {
        if !self.phase.is_loading() {
            return &self.phase;
        }

        let (projects, stats) = tokio::join!(api.fetch_projects(), api.fetch_stats());

        self.phase = match (projects, stats) {
            (Ok(projects), Ok(stats)) => {
                info!("Loaded {} projects", projects.len());
                LoadPhase::Loaded { projects, stats }
            }
            (projects, stats) => {
                if let Err(err) = &projects {
                    warn!("Could not fetch projects: {}", err);
                }
                if let Err(err) = &stats {
                    warn!("Could not fetch stats: {}", err);
                }
                LoadPhase::LoadedWithFallback {
                    projects: fallback_projects(),
                    warning: FALLBACK_WARNING.to_owned(),
                }
            }
        };
        &self.phase
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut Theme {
        &mut self.theme
    }

    pub fn context_menu(&self) -> &ContextMenu {
        &self.context_menu
    }

    /// Right-click gesture: suppresses the default menu and shows ours.
    pub fn open_context_menu(&self) {
        self.context_menu.open();
    }

    /// Hides the quick menu. Pending auto-close timers still run.
    pub fn close_context_menu(&self) {
        self.context_menu.close();
    }

    /// Emits a launch event for the project, no navigation happens.
    pub fn select_project(&self, id: &str) -> Option<&Project> {
        let project = self.phase.projects().iter().find(|p| p.id == id)?;
        info!("Launching {}", project.name);
        Some(project)
    }
}
