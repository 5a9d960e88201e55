// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Auto-hide and copy confirmation durations
//! - **Layout**: Line clamping and padding of the bar

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time a message stays visible before auto-hiding (in milliseconds).
pub const DEFAULT_VISIBILITY_DURATION_MS: u64 = 3000;

/// Smallest visibility duration; a configured zero is raised to this.
pub const MIN_VISIBILITY_DURATION_MS: u64 = 1;

/// Default time the "Copied!" confirmation stays visible (in milliseconds).
pub const DEFAULT_CONFIRMATION_DURATION_MS: u64 = 2000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default number of lines shown for a success message.
pub const DEFAULT_SUCCESS_MAX_LINES: u16 = 1;

/// Default number of lines shown for an error message.
pub const DEFAULT_ERROR_MAX_LINES: u16 = 1;

/// Minimum line clamp.
pub const MIN_MAX_LINES: u16 = 1;

/// Maximum line clamp.
pub const MAX_MAX_LINES: u16 = 10;

/// Default vertical padding inside the bar (in logical pixels).
pub const DEFAULT_VERTICAL_PADDING: f32 = 12.0;

/// Default horizontal padding inside the bar (in logical pixels).
pub const DEFAULT_HORIZONTAL_PADDING: f32 = 12.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Timing validation
    assert!(MIN_VISIBILITY_DURATION_MS > 0);
    assert!(DEFAULT_VISIBILITY_DURATION_MS >= MIN_VISIBILITY_DURATION_MS);
    assert!(DEFAULT_CONFIRMATION_DURATION_MS >= MIN_VISIBILITY_DURATION_MS);

    // Line clamp validation
    assert!(MIN_MAX_LINES > 0);
    assert!(MAX_MAX_LINES >= MIN_MAX_LINES);
    assert!(DEFAULT_SUCCESS_MAX_LINES >= MIN_MAX_LINES);
    assert!(DEFAULT_ERROR_MAX_LINES >= MIN_MAX_LINES);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults_are_valid() {
        assert_eq!(DEFAULT_VISIBILITY_DURATION_MS, 3000);
        assert!(DEFAULT_CONFIRMATION_DURATION_MS < DEFAULT_VISIBILITY_DURATION_MS);
    }

    #[test]
    fn layout_defaults_are_valid() {
        assert_eq!(DEFAULT_SUCCESS_MAX_LINES, 1);
        assert_eq!(DEFAULT_ERROR_MAX_LINES, 1);
        assert!(DEFAULT_VERTICAL_PADDING > 0.0);
        assert!(DEFAULT_HORIZONTAL_PADDING > 0.0);
    }
}
