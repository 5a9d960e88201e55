// SPDX-License-Identifier: MPL-2.0
//! Visibility state machine for the message bar.
//!
//! The controller decides *when* the bar is shown and *which* hide request is
//! still valid; it never sleeps itself. A driver (the tokio driver in
//! [`super::driver`] or the Iced component in `ui::message_bar`) runs the
//! actual delay and reports back with the epoch it was scheduled for.
//!
//! ```text
//!             change + content               hide elapsed (same epoch)
//!   Hidden ─────────────────────▶ Visible(e) ─────────────────────────▶ Hidden
//!                                   │   ▲
//!                change + content   └───┘  (epoch e+1, countdown restarts)
//!
//!   Visible ──dismiss_now──▶ Hidden        any ──teardown──▶ TornDown
//! ```

use super::duration::VisibilityDuration;
use super::state::{Snapshot, Version};
use std::time::Duration;

/// Token identifying one scheduled hide.
///
/// Every show, dismissal and teardown moves the controller to a new epoch, so a
/// timer that fires with an older token is recognised as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Epoch(u64);

impl Epoch {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Current phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    /// Shown, with a hide pending for `epoch`.
    Visible { epoch: Epoch },
    /// Terminal; nothing is shown or scheduled any more.
    TornDown,
}

/// A hide the driver must schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideRequest {
    pub epoch: Epoch,
    pub after: Duration,
}

/// Translates state changes into a visible/hidden signal with timed dismissal.
#[derive(Debug)]
pub struct VisibilityController {
    duration: VisibilityDuration,
    phase: Phase,
    next_epoch: u64,
    last_seen: Option<Version>,
}

impl VisibilityController {
    #[must_use]
    pub fn new(duration: VisibilityDuration) -> Self {
        Self {
            duration,
            phase: Phase::Hidden,
            next_epoch: 0,
            last_seen: None,
        }
    }

    #[must_use]
    pub fn duration(&self) -> VisibilityDuration {
        self.duration
    }

    /// Applies to hides scheduled after this call.
    pub fn set_duration(&mut self, duration: VisibilityDuration) {
        self.duration = duration;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Visible { .. })
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.phase == Phase::TornDown
    }

    /// Epoch of the hide that is currently allowed to fire.
    #[must_use]
    pub fn pending(&self) -> Option<Epoch> {
        match self.phase {
            Phase::Visible { epoch } => Some(epoch),
            Phase::Hidden | Phase::TornDown => None,
        }
    }

    /// Reacts to a state snapshot.
    ///
    /// Returns a hide request when the snapshot carries a version not seen
    /// before and has content. The previous pending hide, if any, is
    /// invalidated before the new one is issued; drivers must cancel their old
    /// timer before scheduling the returned one.
    pub fn on_state_change(&mut self, snapshot: &Snapshot) -> Option<HideRequest> {
        if self.is_torn_down() || self.last_seen == Some(snapshot.version) {
            return None;
        }
        self.last_seen = Some(snapshot.version);
        if !snapshot.has_content() {
            return None;
        }

        let epoch = self.advance_epoch();
        self.phase = Phase::Visible { epoch };
        tracing::debug!(
            version = snapshot.version.value(),
            epoch = epoch.value(),
            "message bar shown"
        );
        Some(HideRequest {
            epoch,
            after: self.duration.as_duration(),
        })
    }

    /// Handles a fired timer. Returns true when the bar was hidden.
    ///
    /// Fires for any epoch other than the pending one are stale and ignored.
    pub fn on_hide_elapsed(&mut self, epoch: Epoch) -> bool {
        if self.pending() == Some(epoch) {
            self.phase = Phase::Hidden;
            tracing::debug!(epoch = epoch.value(), "message bar auto-hidden");
            true
        } else {
            tracing::trace!(epoch = epoch.value(), "ignoring stale hide");
            false
        }
    }

    /// Hides immediately and invalidates the pending hide.
    ///
    /// Returns true when the bar was visible. Calling it while hidden is a
    /// no-op.
    pub fn dismiss_now(&mut self) -> bool {
        if !self.is_visible() {
            return false;
        }
        self.advance_epoch();
        self.phase = Phase::Hidden;
        tracing::debug!("message bar dismissed");
        true
    }

    /// Moves to the terminal phase. Idempotent.
    pub fn teardown(&mut self) {
        if !self.is_torn_down() {
            self.advance_epoch();
            self.phase = Phase::TornDown;
        }
    }

    fn advance_epoch(&mut self) -> Epoch {
        self.next_epoch = self.next_epoch.wrapping_add(1);
        Epoch(self.next_epoch)
    }
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new(VisibilityDuration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::state::MessageBarState;

    fn controller() -> VisibilityController {
        VisibilityController::new(VisibilityDuration::from_millis(3000))
    }

    #[test]
    fn starts_hidden() {
        let controller = controller();
        assert_eq!(controller.phase(), Phase::Hidden);
        assert!(controller.pending().is_none());
    }

    #[test]
    fn empty_state_never_shows() {
        let mut controller = controller();
        let state = MessageBarState::new();
        assert!(controller.on_state_change(&state.snapshot()).is_none());
        assert!(!controller.is_visible());
    }

    #[test]
    fn change_with_content_shows_and_requests_hide() {
        let mut controller = controller();
        let mut state = MessageBarState::new();
        state.add_success("Successful.");

        let request = controller
            .on_state_change(&state.snapshot())
            .expect("hide should be requested");
        assert!(controller.is_visible());
        assert_eq!(request.after, Duration::from_millis(3000));
        assert_eq!(controller.pending(), Some(request.epoch));
    }

    #[test]
    fn same_version_is_not_a_change() {
        let mut controller = controller();
        let mut state = MessageBarState::new();
        state.add_success("Successful.");

        assert!(controller.on_state_change(&state.snapshot()).is_some());
        assert!(controller.on_state_change(&state.snapshot()).is_none());
    }

    #[test]
    fn duplicate_message_issues_new_epoch() {
        let mut controller = controller();
        let mut state = MessageBarState::new();

        state.add_error_text("Fatal Error!");
        let first = controller.on_state_change(&state.snapshot()).unwrap();
        state.add_error_text("Fatal Error!");
        let second = controller.on_state_change(&state.snapshot()).unwrap();

        assert_ne!(first.epoch, second.epoch);
        assert!(!controller.on_hide_elapsed(first.epoch));
        assert!(controller.is_visible());
        assert!(controller.on_hide_elapsed(second.epoch));
        assert!(!controller.is_visible());
    }

    #[test]
    fn hide_fires_once() {
        let mut controller = controller();
        let mut state = MessageBarState::new();
        state.add_success("Successful.");
        let request = controller.on_state_change(&state.snapshot()).unwrap();

        assert!(controller.on_hide_elapsed(request.epoch));
        assert!(!controller.on_hide_elapsed(request.epoch));
    }

    #[test]
    fn dismiss_now_is_idempotent_and_invalidates_timer() {
        let mut controller = controller();
        let mut state = MessageBarState::new();
        state.add_success("Successful.");
        let request = controller.on_state_change(&state.snapshot()).unwrap();

        assert!(controller.dismiss_now());
        assert!(!controller.dismiss_now());
        assert!(!controller.on_hide_elapsed(request.epoch));
        assert_eq!(controller.phase(), Phase::Hidden);
    }

    #[test]
    fn teardown_is_terminal() {
        let mut controller = controller();
        let mut state = MessageBarState::new();
        state.add_success("Successful.");
        let request = controller.on_state_change(&state.snapshot()).unwrap();

        controller.teardown();
        assert!(!controller.on_hide_elapsed(request.epoch));

        state.add_error_text("late");
        assert!(controller.on_state_change(&state.snapshot()).is_none());
        assert_eq!(controller.phase(), Phase::TornDown);
    }

    #[test]
    fn shown_again_after_auto_hide() {
        let mut controller = controller();
        let mut state = MessageBarState::new();
        state.add_success("one");
        let first = controller.on_state_change(&state.snapshot()).unwrap();
        controller.on_hide_elapsed(first.epoch);

        state.add_success("two");
        assert!(controller.on_state_change(&state.snapshot()).is_some());
        assert!(controller.is_visible());
    }
}
