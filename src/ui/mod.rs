// SPDX-License-Identifier: MPL-2.0
//! User interface for the message bar.
//!
//! # Components
//!
//! - [`message_bar`] - Iced component that renders and drives the bar
//! - [`styles`] - Banner, copy action and confirmation styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Default SVG icons

pub mod design_tokens;
pub mod icons;
pub mod message_bar;
pub mod styles;
