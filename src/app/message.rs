// SPDX-License-Identifier: MPL-2.0
//! Demo application messages and startup flags.

use crate::config::Position;
use crate::ui::message_bar;

/// Top-level messages consumed by [`crate::app::App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Posts the "Internet Unavailable." error.
    ShowConnectionError,
    /// Posts an error long enough to exercise line clamping.
    ShowLongError,
    /// Posts the "Successful." message.
    ShowSuccess,
    /// Posts the "Successfully Updated." message.
    ShowUpdated,
    /// Escape was pressed outside of any focused widget.
    EscapePressed,
    MessageBar(message_bar::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
///
/// Each flag, when set, takes precedence over the value from
/// `message_bar.toml`.
#[derive(Debug, Default)]
pub struct Flags {
    /// Edge the bar is anchored to.
    pub position: Option<Position>,
    /// Auto-hide delay in milliseconds.
    pub duration_ms: Option<u64>,
    /// Show "Copied!" after copying an error.
    pub confirm_copy: bool,
    /// Optional config directory override (for message_bar.toml).
    /// Takes precedence over `MESSAGE_BAR_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
