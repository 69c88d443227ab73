//! Dashboard client: fetches the catalog once, falls back to static data,
//! and keeps local-only theme and menu state.

mod api;
mod context_menu;
mod render;
mod state;
mod theme;

pub use api::{CatalogApi, FetchError, HttpCatalogApi, DEFAULT_BASE_URL};
pub use context_menu::{ContextMenu, AUTO_CLOSE_DELAY};
pub use render::{stats_line, DashboardView, ProjectCard, ThemePanel};
pub use state::{fallback_projects, Dashboard, LoadPhase, FALLBACK_WARNING};
pub use theme::{hsl_to_rgb, Accents, Hue, Rgb, Theme, DEFAULT_PRIMARY_HUE, DEFAULT_SECONDARY_HUE};

pub mod text {
    pub use super::render::{
        CONTEXT_MENU_ITEMS, CONTEXT_MENU_TITLE, LOADING_DETAIL, LOADING_TITLE, QUICK_START_STEPS,
        QUICK_START_TITLE, SUBTITLE, TECH_STACK, THEME_TITLE, TITLE, WARNING_TITLE,
    };
}
