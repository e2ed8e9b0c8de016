//! Adapter between the external editor's change notifications and autosave.
//!
//! Rich-text editors fire one change notification synchronously on
//! mount/hydration, reflecting the initial (possibly server-loaded) state.
//! Persisting that emission would rewrite the document with itself on every
//! page load, so the bridge swallows exactly the first notification and
//! forwards every later one verbatim.

use crate::models::Snapshot;
use tracing::debug;

/// Suppresses the editor's mount-time self-notification.
///
/// Suppression is positional, not content-based: the first notification is
/// dropped even if a later real edit happens to reproduce the initial
/// content byte for byte.
#[derive(Debug)]
pub struct EditorChangeBridge {
    is_first_change: bool,
}

impl EditorChangeBridge {
    pub fn new() -> Self {
        Self {
            is_first_change: true,
        }
    }

    /// Filter one editor notification.
    ///
    /// # Returns
    /// `None` for the mount-time emission, `Some(snapshot)` for every
    /// notification after it.
    pub fn filter(&mut self, snapshot: Snapshot) -> Option<Snapshot> {
        if self.is_first_change {
            self.is_first_change = false;
            debug!("suppressed editor mount-time change notification");
            return None;
        }
        Some(snapshot)
    }
}

impl Default for EditorChangeBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_notification_is_always_suppressed() {
        let mut bridge = EditorChangeBridge::new();
        assert!(bridge.filter(json!({"root": {"children": []}})).is_none());
        assert!(bridge.filter(json!({"root": {"children": [1]}})).is_some());
    }

    #[test]
    fn suppression_is_positional_not_content_based() {
        let hydrated = json!({"root": {"children": ["hello"]}});
        let mut bridge = EditorChangeBridge::new();
        assert!(bridge.filter(hydrated.clone()).is_none());
        // A real edit that reproduces the initial content must pass through.
        assert_eq!(bridge.filter(hydrated.clone()), Some(hydrated));
    }

    #[test]
    fn only_the_first_is_dropped() {
        let mut bridge = EditorChangeBridge::new();
        bridge.filter(json!(1));
        for i in 2..=5 {
            assert_eq!(bridge.filter(json!(i)), Some(json!(i)));
        }
    }
}
