// SPDX-License-Identifier: MPL-2.0
//! Message bar core: state, visibility state machine and timer drivers.
//!
//! This module knows nothing about rendering. A host posts messages to a
//! [`MessageBarState`] and learns whether the bar is shown from a
//! [`VisibilityController`], driven either by the Iced component in
//! [`crate::ui::message_bar`], by a [`VisibilityDriver`] the host calls from
//! its own update loop, or by the reactive [`observe`] binding.
//!
//! # Components
//!
//! - [`message`] - `BarMessage` content and error description
//! - [`state`] - `MessageBarState` with its change counter and subscription
//! - [`visibility`] - `VisibilityController` epoch-based state machine
//! - [`driver`] - tokio timer driver with cancel-then-schedule semantics
//! - [`signal`] - `observe` binding that follows state changes on its own task
//!
//! # Usage
//!
//! ```
//! use iced_message_bar::bar::{MessageBarState, VisibilityDriver, VisibilityDuration};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut state = MessageBarState::new();
//! let mut driver = VisibilityDriver::new(VisibilityDuration::default());
//!
//! state.add_success("Successfully Updated.");
//! driver.sync(&state.snapshot());
//! assert!(driver.is_visible());
//! # }
//! ```

pub mod driver;
pub mod duration;
pub mod message;
pub mod signal;
pub mod state;
pub mod visibility;

pub use driver::VisibilityDriver;
pub use duration::VisibilityDuration;
pub use message::{describe, BarMessage, Kind, UNKNOWN_ERROR_TEXT};
pub use signal::{observe, VisibilitySignal};
pub use state::{MessageBarState, Snapshot, Version};
pub use visibility::{Epoch, HideRequest, Phase, VisibilityController};
