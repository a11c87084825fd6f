//! Shared constants for end-to-end tests
//!
//! When the fixture catalog changes, update only this file.

// ============================================================================
// Test Catalog
// ============================================================================

/// Id of "Naruto"
pub const ANIME_1_ID: &str = "1";
pub const ANIME_1_TITLE: &str = "Naruto";
pub const ANIME_1_CREATOR: &str = "Masashi Kishimoto";

/// Id of "Cowboy Bebop"
pub const ANIME_2_ID: &str = "2";
pub const ANIME_2_TITLE: &str = "Cowboy Bebop";

/// Id of "Fullmetal Alchemist"
pub const ANIME_3_ID: &str = "3";
pub const ANIME_3_TITLE: &str = "Fullmetal Alchemist";

/// Number of entries in the fixture catalog
pub const CATALOG_SIZE: usize = 3;

/// An id that is never present in the fixture catalog
pub const MISSING_ANIME_ID: &str = "9";

/// Contents of the stylesheet placed in the public directory
pub const STYLESHEET_CONTENT: &str = "body { color: black; }";

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for the server to accept requests
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Delay between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

/// Timeout for individual requests
pub const REQUEST_TIMEOUT_SECS: u64 = 5;
