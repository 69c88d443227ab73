//! Text model of the dashboard screen, independent of how it gets printed.

use super::{Dashboard, LoadPhase, Theme};
use crate::catalog::{CatalogStats, Project};

pub const TITLE: &str = "HaloAI Studios Hub";
pub const SUBTITLE: &str = "Central dashboard for AI, automation & development projects";
pub const LOADING_TITLE: &str = "Loading HaloAI Studios Hub...";
pub const LOADING_DETAIL: &str = "Connecting to backend services...";
pub const WARNING_TITLE: &str = "⚠️ Connection Warning";
pub const THEME_TITLE: &str = "🎨 Customize Theme";
pub const QUICK_START_TITLE: &str = "🎯 Quick Start";
pub const QUICK_START_STEPS: [&str; 3] = [
    "Click any project card to launch",
    "Right-click anywhere to open the quick menu",
    "Adjust the hues to customize the theme",
];
pub const CONTEXT_MENU_TITLE: &str = "📋 Quick Menu";
pub const CONTEXT_MENU_ITEMS: [&str; 3] = ["🚀 Launch project", "🎨 Customize theme", "❌ Close"];
pub const TECH_STACK: [&str; 4] = ["🦀 Rust", "⚡ Tokio", "🌐 Axum", "🔗 API"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        ProjectCard {
            id: project.id.clone(),
            title: project.name.clone(),
            description: project.description.clone(),
            status: project.status.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemePanel {
    pub primary_label: String,
    pub secondary_label: String,
}

impl From<&Theme> for ThemePanel {
    fn from(theme: &Theme) -> Self {
        let accents = theme.accents();
        ThemePanel {
            primary_label: format!("Primary Hue: {} ({})", theme.primary_hue(), accents.primary),
            secondary_label: format!(
                "Secondary Hue: {} ({})",
                theme.secondary_hue(),
                accents.secondary
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardView {
    Loading {
        title: &'static str,
        detail: &'static str,
    },
    Ready {
        warning: Option<String>,
        stats_line: Option<String>,
        cards: Vec<ProjectCard>,
        theme: ThemePanel,
        context_menu_open: bool,
    },
}

pub fn stats_line(stats: &CatalogStats) -> String {
    format!(
        "📊 {} Projects / ✅ {} Active / 🏷️ {} Categories",
        stats.total_projects,
        stats.active_projects,
        stats.categories.len()
    )
}

impl DashboardView {
    pub fn of(dashboard: &Dashboard) -> DashboardView {
        let phase = dashboard.phase();
        if let LoadPhase::Loading = phase {
            return DashboardView::Loading {
                title: LOADING_TITLE,
                detail: LOADING_DETAIL,
            };
        }
        DashboardView::Ready {
            warning: phase.warning().map(str::to_owned),
            stats_line: phase.stats().map(stats_line),
            cards: phase.projects().iter().map(ProjectCard::from).collect(),
            theme: ThemePanel::from(dashboard.theme()),
            context_menu_open: dashboard.context_menu().is_open(),
        }
    }

    pub fn cards(&self) -> &[ProjectCard] {
        match self {
            DashboardView::Loading { .. } => &[],
            DashboardView::Ready { cards, .. } => cards,
        }
    }

    /// Uncolored rendering, one screen line per entry.
    pub fn lines(&self) -> Vec<String> {
        let (warning, stats_line, cards, theme, context_menu_open) = match self {
            DashboardView::Loading { title, detail } => {
                return vec![title.to_string(), detail.to_string()];
            }
            DashboardView::Ready {
                warning,
                stats_line,
                cards,
                theme,
                context_menu_open,
            } => (warning, stats_line, cards, theme, *context_menu_open),
        };

        let mut lines = vec![TITLE.to_owned(), SUBTITLE.to_owned()];
        if let Some(warning) = warning {
            lines.push(WARNING_TITLE.to_owned());
            lines.push(warning.clone());
        }
        if let Some(stats_line) = stats_line {
            lines.push(stats_line.clone());
        }
        lines.push(String::new());
        for card in cards {
            lines.push(format!("[{}] {}", card.id, card.title));
            lines.push(format!("    {}", card.description));
            lines.push(format!("    ● {}", card.status));
        }
        lines.push(String::new());
        lines.push(THEME_TITLE.to_owned());
        lines.push(theme.primary_label.clone());
        lines.push(theme.secondary_label.clone());
        lines.push(String::new());
        lines.push(QUICK_START_TITLE.to_owned());
        lines.extend(QUICK_START_STEPS.iter().map(|s| s.to_string()));
        if context_menu_open {
            lines.push(String::new());
            lines.push(CONTEXT_MENU_TITLE.to_owned());
            lines.extend(CONTEXT_MENU_ITEMS.iter().map(|s| s.to_string()));
        }
        lines.push(String::new());
        lines.push(TECH_STACK.join("  "));
        lines
    }

    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }
}
