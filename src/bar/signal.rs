// SPDX-License-Identifier: MPL-2.0
//! Reactive binding between a [`MessageBarState`] and a visibility signal.
//!
//! [`observe`] spawns a task that follows the state's change channel and feeds
//! each new snapshot to a [`VisibilityDriver`]. Hosts without a synchronous
//! update loop read the resulting [`VisibilitySignal`] instead of calling the
//! driver themselves. Visibility follows a post on the next scheduler turn.

use super::driver::{Shared, VisibilityDriver};
use super::duration::VisibilityDuration;
use super::state::MessageBarState;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

#[derive(Debug)]
enum Command {
    DismissNow,
}

/// Live "is the bar shown" signal bound to one state.
///
/// Dropping the signal tears the binding down: the pending hide is cancelled
/// synchronously and the observer task is aborted.
#[derive(Debug)]
pub struct VisibilitySignal {
    visible: watch::Receiver<bool>,
    commands: mpsc::UnboundedSender<Command>,
    shared: Arc<Shared>,
    task: JoinHandle<()>,
}

/// Binds a visibility signal to `state`.
///
/// Only changes made after this call are observed; a message already present
/// does not make the bar visible.
///
/// # Panics
///
/// Panics when called outside of a tokio runtime.
#[must_use]
pub fn observe(state: &MessageBarState, duration: VisibilityDuration) -> VisibilitySignal {
    let mut driver = VisibilityDriver::new(duration);
    let visible = driver.subscribe();
    let shared = driver.shared();
    let mut changes = state.subscribe();
    let (commands, mut inbox) = mpsc::unbounded_channel();

    let task = tokio::spawn(async move {
        loop {
            tokio::select! {
                changed = changes.changed() => {
                    if changed.is_err() {
                        tracing::debug!("message bar state dropped, stopping observer");
                        break;
                    }
                    let snapshot = changes.borrow_and_update().clone();
                    driver.sync(&snapshot);
                }
                command = inbox.recv() => match command {
                    Some(Command::DismissNow) => {
                        // A post made before the dismiss must not show afterwards.
                        if changes.has_changed().unwrap_or(false) {
                            let snapshot = changes.borrow_and_update().clone();
                            driver.sync(&snapshot);
                        }
                        driver.dismiss_now();
                    }
                    None => break,
                },
            }
        }
    });

    VisibilitySignal {
        visible,
        commands,
        shared,
        task,
    }
}

impl VisibilitySignal {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        *self.visible.borrow()
    }

    /// A fresh receiver for the same signal.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.visible.clone()
    }

    /// Waits until the signal equals `visible` and returns immediately if it
    /// already does.
    pub async fn wait_for(&mut self, visible: bool) {
        // The sender only closes on teardown, which also forces `false`.
        let _ = self.visible.wait_for(|current| *current == visible).await;
    }

    /// Hides the bar now.
    ///
    /// The signal reads `false` as soon as this returns. A post made before
    /// the call that the observer has not picked up yet is dismissed too.
    pub fn dismiss_now(&self) {
        self.shared.dismiss();
        let _ = self.commands.send(Command::DismissNow);
    }

    /// Tears the binding down explicitly. Dropping it has the same effect.
    pub fn teardown(self) {
        drop(self);
    }
}

impl Drop for VisibilitySignal {
    fn drop(&mut self) {
        self.shared.teardown();
        self.task.abort();
    }
}
