// SPDX-License-Identifier: MPL-2.0
//! Content shown by the message bar.

use std::error::Error as StdError;
use std::fmt;

/// Text used when an error carries no usable description.
pub const UNKNOWN_ERROR_TEXT: &str = "Unknown";

/// The single message a bar can hold.
///
/// Success and error are mutually exclusive: the bar shows one banner at a
/// time, and setting either replaces whatever was there.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BarMessage {
    /// Nothing has been posted yet.
    #[default]
    Empty,
    /// A completed operation.
    Success { text: String },
    /// A failure, already reduced to its human-readable description.
    Error { text: String },
}

/// Which banner variant a message renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

impl BarMessage {
    /// Builds a success message.
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    /// Builds an error message from an error value.
    pub fn from_error(err: &(dyn StdError + '_)) -> Self {
        Self::Error {
            text: describe(err),
        }
    }

    /// Builds an error message from an already formatted description.
    ///
    /// An empty description becomes [`UNKNOWN_ERROR_TEXT`].
    pub fn error_text(text: impl Into<String>) -> Self {
        Self::Error {
            text: or_unknown(text.into()),
        }
    }

    /// Returns the displayed text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            BarMessage::Empty => None,
            BarMessage::Success { text } | BarMessage::Error { text } => Some(text),
        }
    }

    /// Returns the banner variant, or `None` when empty.
    #[must_use]
    pub fn kind(&self) -> Option<Kind> {
        match self {
            BarMessage::Empty => None,
            BarMessage::Success { .. } => Some(Kind::Success),
            BarMessage::Error { .. } => Some(Kind::Error),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, BarMessage::Error { .. })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, BarMessage::Empty)
    }

    /// Text offered by the copy action. Only errors can be copied.
    #[must_use]
    pub fn copy_text(&self) -> Option<&str> {
        match self {
            BarMessage::Error { text } => Some(text),
            BarMessage::Success { .. } | BarMessage::Empty => None,
        }
    }
}

impl fmt::Display for BarMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text().unwrap_or_default())
    }
}

/// Extracts the human-readable description of an error.
///
/// Never fails: an error whose `Display` output is empty is described as
/// [`UNKNOWN_ERROR_TEXT`].
#[must_use]
pub fn describe(err: &(dyn StdError + '_)) -> String {
    or_unknown(err.to_string())
}

fn or_unknown(text: String) -> String {
    if text.is_empty() {
        UNKNOWN_ERROR_TEXT.to_string()
    } else {
        text
    }
}
