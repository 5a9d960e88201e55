// SPDX-License-Identifier: MPL-2.0
//! `iced_message_bar` is a transient success/error message bar for Iced
//! applications.
//!
//! The bar shows one message at a time, hides itself after a configurable
//! delay, restarts the countdown on every post, and offers a copy action for
//! error text. The core in [`bar`] has no rendering dependency; [`ui`] renders
//! it with Iced and [`app`] is a small demo application.

#![doc(html_root_url = "https://docs.rs/iced_message_bar/0.1.0")]

pub mod app;
pub mod bar;
pub mod config;
pub mod error;
pub mod ui;
