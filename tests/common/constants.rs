//! Shared constants for end-to-end tests
//!
//! When test data changes (ISRCs, titles, timeouts), update only this file.

// ============================================================================
// Test Singles
// ============================================================================

/// ISRC of the example single ("My Awesome Song")
pub const EXAMPLE_ISRC: &str = "USX9P2400001";

/// Title of the example single
pub const EXAMPLE_TITLE: &str = "My Awesome Song";

/// A second, well-formed ISRC for listing and re-keying tests
pub const OTHER_ISRC: &str = "USX9P2400002";

/// Well-formed ISRC that is never stored
pub const MISSING_ISRC: &str = "US0000000000";

// ============================================================================
// Timeouts
// ============================================================================

pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

pub const REQUEST_TIMEOUT_SECS: u64 = 5;
