//! Shared save-status signal consumed by the UI layer.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

/// Visible persistence state of the active document.
///
/// Both save channels (content and title) write this signal; neither owns it.
/// A fresh edit flips it to `Saving` immediately, even though the actual
/// persistence call is deferred by the debounce window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveStatus {
    /// No edit has been made in this session yet.
    Idle,
    /// An edit is pending or a persistence call is in flight.
    Saving,
    /// The most recently settled persistence call succeeded.
    Saved,
    /// The most recently settled persistence call failed.
    Error,
}

/// Cheaply cloneable handle to the shared save-status value.
///
/// Status assignments are last-write-wins: whichever persistence call settles
/// last determines the visible status. There is no sequencing of overlapping
/// writes; completion order is authoritative.
#[derive(Debug, Clone)]
pub struct StatusSignal {
    tx: Arc<watch::Sender<SaveStatus>>,
}

impl StatusSignal {
    /// New signal starting at [`SaveStatus::Idle`].
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SaveStatus::Idle);
        Self { tx: Arc::new(tx) }
    }

    /// Overwrite the current status.
    pub fn set(&self, status: SaveStatus) {
        self.tx.send_replace(status);
    }

    /// Read the current status.
    pub fn get(&self) -> SaveStatus {
        *self.tx.borrow()
    }

    /// Subscribe to status changes (for UI bindings).
    pub fn subscribe(&self) -> watch::Receiver<SaveStatus> {
        self.tx.subscribe()
    }
}

impl Default for StatusSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_reflects_last_write() {
        let signal = StatusSignal::new();
        assert_eq!(signal.get(), SaveStatus::Idle);

        signal.set(SaveStatus::Saving);
        signal.set(SaveStatus::Saved);
        assert_eq!(signal.get(), SaveStatus::Saved);
    }

    #[tokio::test]
    async fn subscribers_observe_changes() {
        let signal = StatusSignal::new();
        let mut rx = signal.subscribe();

        signal.set(SaveStatus::Saving);
        rx.changed().await.expect("signal alive");
        assert_eq!(*rx.borrow(), SaveStatus::Saving);
    }

    #[test]
    fn clones_share_one_value() {
        let signal = StatusSignal::new();
        let other = signal.clone();
        other.set(SaveStatus::Error);
        assert_eq!(signal.get(), SaveStatus::Error);
    }
}
