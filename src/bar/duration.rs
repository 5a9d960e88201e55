// SPDX-License-Identifier: MPL-2.0
//! Visibility duration domain type.
//!
//! Wraps the time a message stays on screen before auto-hiding, in
//! milliseconds. Any positive value is kept as given.

use crate::config::{DEFAULT_VISIBILITY_DURATION_MS, MIN_VISIBILITY_DURATION_MS};
use std::time::Duration;

/// How long a message stays visible, in milliseconds.
///
/// # Example
///
/// ```
/// use iced_message_bar::bar::VisibilityDuration;
///
/// let duration = VisibilityDuration::from_millis(3000);
/// assert_eq!(duration.millis(), 3000);
///
/// // Zero would hide the bar before it is drawn
/// let zero = VisibilityDuration::from_millis(0);
/// assert_eq!(zero.millis(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VisibilityDuration(u64);

impl VisibilityDuration {
    /// Creates a duration. Zero is raised to the minimum.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.max(MIN_VISIBILITY_DURATION_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for VisibilityDuration {
    fn default() -> Self {
        Self(DEFAULT_VISIBILITY_DURATION_MS)
    }
}

impl From<VisibilityDuration> for Duration {
    fn from(value: VisibilityDuration) -> Self {
        value.as_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_raised_to_minimum() {
        assert_eq!(
            VisibilityDuration::from_millis(0).millis(),
            MIN_VISIBILITY_DURATION_MS
        );
    }

    #[test]
    fn short_and_long_durations_are_kept() {
        assert_eq!(VisibilityDuration::from_millis(100).millis(), 100);
        assert_eq!(VisibilityDuration::from_millis(120_000).millis(), 120_000);
        assert_eq!(
            VisibilityDuration::from_millis(120_000).as_duration(),
            Duration::from_secs(120)
        );
    }

    #[test]
    fn default_is_three_seconds() {
        assert_eq!(
            VisibilityDuration::default().as_duration(),
            Duration::from_secs(3)
        );
    }
}
