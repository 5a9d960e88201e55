// SPDX-License-Identifier: MPL-2.0
//! Tokio-backed timer driver for [`VisibilityController`].
//!
//! The controller lives behind a mutex shared with the hide task. Every
//! transition that invalidates a pending hide happens under that mutex, and the
//! hide task checks its epoch under the same mutex before hiding. Cancelling is
//! therefore effective as soon as the cancelling call returns, even if the
//! sleeping task has already been woken and is racing for the lock.

use super::duration::VisibilityDuration;
use super::state::Snapshot;
use super::visibility::{Epoch, HideRequest, Phase, VisibilityController};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// State shared between the driver and its hide task.
#[derive(Debug)]
pub(crate) struct Shared {
    controller: Mutex<VisibilityController>,
    visible: watch::Sender<bool>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, VisibilityController> {
        // The controller holds no invariant a panicking reader could break.
        self.controller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn hide_if_current(&self, epoch: Epoch) {
        let mut controller = self.lock();
        if controller.on_hide_elapsed(epoch) {
            self.visible.send_replace(false);
        }
    }

    /// Hides now. Returns false when already hidden.
    pub(crate) fn dismiss(&self) -> bool {
        let mut controller = self.lock();
        let dismissed = controller.dismiss_now();
        if dismissed {
            self.visible.send_replace(false);
        }
        dismissed
    }

    /// Moves the controller to its terminal phase. Idempotent.
    pub(crate) fn teardown(&self) {
        let mut controller = self.lock();
        if !controller.is_torn_down() {
            controller.teardown();
            self.visible.send_replace(false);
            tracing::debug!("message bar visibility torn down");
        }
    }
}

/// A hide task in flight.
#[derive(Debug)]
struct ScheduledHide {
    epoch: Epoch,
    task: JoinHandle<()>,
}

impl ScheduledHide {
    fn cancel(self) {
        self.task.abort();
    }
}

/// Runs a [`VisibilityController`] with real (tokio) timers.
///
/// At most one hide task exists at a time. Dropping the driver tears the
/// controller down and aborts the task, so no hide runs afterwards.
///
/// Methods that schedule a hide spawn onto the ambient tokio runtime and
/// panic outside of one, like [`tokio::spawn`].
#[derive(Debug)]
pub struct VisibilityDriver {
    shared: Arc<Shared>,
    pending: Option<ScheduledHide>,
}

impl VisibilityDriver {
    #[must_use]
    pub fn new(duration: VisibilityDuration) -> Self {
        let (visible, _) = watch::channel(false);
        Self {
            shared: Arc::new(Shared {
                controller: Mutex::new(VisibilityController::new(duration)),
                visible,
            }),
            pending: None,
        }
    }

    /// Receives every visibility flip.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.shared.visible.subscribe()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        *self.shared.visible.borrow()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.shared.lock().phase()
    }

    /// Epoch of the hide that is still allowed to fire.
    #[must_use]
    pub fn pending(&self) -> Option<Epoch> {
        let allowed = self.shared.lock().pending();
        self.pending
            .as_ref()
            .map(|hide| hide.epoch)
            .filter(|epoch| allowed == Some(*epoch))
    }

    pub fn set_duration(&mut self, duration: VisibilityDuration) {
        self.shared.lock().set_duration(duration);
    }

    /// Feeds a state snapshot to the controller.
    ///
    /// When it is a new version with content, the bar becomes visible and the
    /// countdown restarts: the previous hide is cancelled first, then a new
    /// one is scheduled. Returns true when a hide was scheduled.
    pub fn sync(&mut self, snapshot: &Snapshot) -> bool {
        let request = {
            let mut controller = self.shared.lock();
            let Some(request) = controller.on_state_change(snapshot) else {
                return false;
            };
            self.shared.visible.send_replace(true);
            request
        };

        self.cancel_pending();
        self.pending = Some(self.spawn_hide(request));
        true
    }

    /// Hides now and cancels the pending hide. No-op when already hidden.
    ///
    /// A hide task left over from a dismiss made through another handle on
    /// the same controller is cancelled here as well.
    pub fn dismiss_now(&mut self) {
        self.shared.dismiss();
        if self.pending().is_none() {
            self.cancel_pending();
        }
    }

    /// Tears the driver down explicitly. Dropping it has the same effect.
    pub fn teardown(self) {
        drop(self);
    }

    pub(crate) fn shared(&self) -> Arc<Shared> {
        Arc::clone(&self.shared)
    }

    fn cancel_pending(&mut self) {
        if let Some(hide) = self.pending.take() {
            hide.cancel();
        }
    }

    fn spawn_hide(&self, request: HideRequest) -> ScheduledHide {
        let shared: Weak<Shared> = Arc::downgrade(&self.shared);
        let HideRequest { epoch, after } = request;
        let task = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if let Some(shared) = shared.upgrade() {
                shared.hide_if_current(epoch);
            }
        });
        ScheduledHide { epoch, task }
    }
}

impl Drop for VisibilityDriver {
    fn drop(&mut self) {
        self.shared.teardown();
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::state::MessageBarState;
    use std::time::Duration;
    use tokio::time::sleep;

    fn driver() -> VisibilityDriver {
        VisibilityDriver::new(VisibilityDuration::from_millis(3000))
    }

    #[tokio::test(start_paused = true)]
    async fn sync_shows_then_hides_after_duration() {
        let mut state = MessageBarState::new();
        let mut driver = driver();

        state.add_success("Successful.");
        assert!(driver.sync(&state.snapshot()));
        assert!(driver.is_visible());

        sleep(Duration::from_millis(2999)).await;
        assert!(driver.is_visible());

        sleep(Duration::from_millis(2)).await;
        assert!(!driver.is_visible());
        assert_eq!(driver.phase(), Phase::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn resync_without_change_keeps_pending_timer() {
        let mut state = MessageBarState::new();
        let mut driver = driver();

        state.add_success("Successful.");
        driver.sync(&state.snapshot());
        let pending = driver.pending();

        assert!(!driver.sync(&state.snapshot()));
        assert_eq!(driver.pending(), pending);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_now_hides_immediately() {
        let mut state = MessageBarState::new();
        let mut driver = driver();

        state.add_error_text("Fatal Error!");
        driver.sync(&state.snapshot());
        driver.dismiss_now();
        assert!(!driver.is_visible());
        assert!(driver.pending().is_none());

        driver.dismiss_now();
        assert!(!driver.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn receivers_observe_show_and_hide() {
        let mut state = MessageBarState::new();
        let mut driver = driver();
        let mut visible = driver.subscribe();

        state.add_success("Successful.");
        driver.sync(&state.snapshot());
        assert!(visible.has_changed().unwrap());
        assert!(*visible.borrow_and_update());

        visible.changed().await.unwrap();
        assert!(!*visible.borrow_and_update());
    }
}
