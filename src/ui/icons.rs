// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons for the message bar.
//!
//! Icons are monochrome and tinted at render time through the SVG style, so
//! the same handle serves both the success and error palettes. Handles are
//! created once and cached with `OnceLock`.

use iced::widget::svg::Handle;
use std::sync::OnceLock;

/// Check mark shown next to success messages.
const CHECK_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="currentColor" d="M9 16.17 4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z"/></svg>"#;

/// Warning triangle shown next to error messages.
const WARNING_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="currentColor" d="M1 21h22L12 2 1 21zm12-3h-2v-2h2v2zm0-4h-2v-4h2v4z"/></svg>"#;

macro_rules! define_icon {
    ($name:ident, $source:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            HANDLE
                .get_or_init(|| Handle::from_memory($source.as_bytes()))
                .clone()
        }
    };
}

define_icon!(check, CHECK_SVG, "Default success icon.");
define_icon!(warning, WARNING_SVG, "Default error icon.");
