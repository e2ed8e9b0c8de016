//! Shared constants used across the draftsync engine.

/// Default debounce delay applied independently to each save channel, in
/// milliseconds.
pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 1_500;

/// Default base URL for the persistence backend.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Title assigned to freshly created posts before the user names them.
pub const DEFAULT_NEW_POST_TITLE: &str = "Untitled";
