//! Shared constants for end-to-end tests

// ============================================================================
// Built-in Catalog
// ============================================================================

pub const EAIB_ID: &str = "eaib";
pub const EAIB_NAME: &str = "🤖 EAIB";

pub const DOCS_ID: &str = "docs";

pub const BUILTIN_PROJECTS_COUNT: usize = 6;

pub const BUILTIN_CATEGORIES: [&str; 6] = [
    "ai",
    "productivity",
    "communication",
    "data",
    "development",
    "documentation",
];

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for a spawned server to answer on "/"
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

pub const REQUEST_TIMEOUT_SECS: u64 = 5;
