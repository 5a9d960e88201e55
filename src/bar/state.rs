// SPDX-License-Identifier: MPL-2.0
//! Message bar state: the current message and its change counter.

use super::message::BarMessage;
use std::error::Error as StdError;
use tokio::sync::watch;

/// Change counter bumped on every posted message.
///
/// Two identical messages posted back to back still get distinct versions,
/// which is what lets the second one restart the hide countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version(u64);

impl Version {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// A consistent view of the state at one version.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub version: Version,
    pub message: BarMessage,
}

impl Snapshot {
    /// Returns true when there is something to show.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.message.is_empty()
    }
}

/// State of one message bar, owned by its hosting surface.
///
/// Writers take `&mut self`; the caller serializes posts. Observers subscribe
/// through a `watch` channel and always see the latest snapshot.
#[derive(Debug)]
pub struct MessageBarState {
    current: BarMessage,
    version: Version,
    publisher: watch::Sender<Snapshot>,
}

impl Default for MessageBarState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBarState {
    /// Creates an empty state at version zero.
    #[must_use]
    pub fn new() -> Self {
        let (publisher, _) = watch::channel(Snapshot::default());
        Self {
            current: BarMessage::Empty,
            version: Version::default(),
            publisher,
        }
    }

    /// Replaces the current message with a success message.
    pub fn add_success(&mut self, text: impl Into<String>) {
        self.post(BarMessage::success(text));
    }

    /// Replaces the current message with the description of `err`.
    pub fn add_error(&mut self, err: &(dyn StdError + '_)) {
        self.post(BarMessage::from_error(err));
    }

    /// Replaces the current message with an error description.
    pub fn add_error_text(&mut self, text: impl Into<String>) {
        self.post(BarMessage::error_text(text));
    }

    fn post(&mut self, message: BarMessage) {
        self.version = self.version.next();
        self.current = message;
        tracing::debug!(
            version = self.version.value(),
            kind = ?self.current.kind(),
            "message bar content replaced"
        );
        self.publisher.send_replace(self.snapshot());
    }

    #[must_use]
    pub fn current_message(&self) -> &BarMessage {
        &self.current
    }

    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.current.is_empty()
    }

    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }

    /// Text available to the copy action; only defined for errors.
    #[must_use]
    pub fn copy_text(&self) -> Option<&str> {
        self.current.copy_text()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: self.version,
            message: self.current.clone(),
        }
    }

    /// Subscribes to state changes.
    ///
    /// The receiver starts at the current snapshot, marked as already seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.publisher.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = MessageBarState::new();
        assert!(!state.has_content());
        assert_eq!(state.current_message(), &BarMessage::Empty);
        assert_eq!(state.version(), Version::default());
    }

    #[test]
    fn success_replaces_error() {
        let mut state = MessageBarState::new();
        state.add_error_text("Fatal Error!");
        state.add_success("Successful.");

        assert_eq!(state.current_message(), &BarMessage::success("Successful."));
        assert_eq!(state.copy_text(), None);
    }

    #[test]
    fn error_replaces_success() {
        let mut state = MessageBarState::new();
        state.add_success("Successful.");
        state.add_error(&std::io::Error::other("Internet Unavailable."));

        assert_eq!(
            state.current_message(),
            &BarMessage::error_text("Internet Unavailable.")
        );
        assert_eq!(state.copy_text(), Some("Internet Unavailable."));
    }

    #[test]
    fn identical_posts_still_change_version() {
        let mut state = MessageBarState::new();
        state.add_success("Successfully Updated.");
        let first = state.version();
        state.add_success("Successfully Updated.");
        let second = state.version();

        assert_ne!(first, second);
        assert_eq!(state.current_message().text(), Some("Successfully Updated."));
    }

    #[test]
    fn every_mixed_post_changes_version() {
        let mut state = MessageBarState::new();
        let mut previous = state.version();
        for i in 0..20 {
            if i % 3 == 0 {
                state.add_error_text("same");
            } else {
                state.add_success("same");
            }
            assert_ne!(state.version(), previous);
            let message = state.current_message();
            assert!(message.is_error() ^ matches!(message, BarMessage::Success { .. }));
            previous = state.version();
        }
    }

    #[test]
    fn subscribers_see_latest_snapshot() {
        let mut state = MessageBarState::new();
        let mut receiver = state.subscribe();
        assert!(!receiver.has_changed().unwrap());

        state.add_error_text("Fatal Error!");
        assert!(receiver.has_changed().unwrap());
        let snapshot = receiver.borrow_and_update().clone();
        assert_eq!(snapshot.version, state.version());
        assert_eq!(snapshot.message.copy_text(), Some("Fatal Error!"));
    }
}
