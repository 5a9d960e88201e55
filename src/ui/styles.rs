// SPDX-License-Identifier: MPL-2.0
//! Message bar styles.
//!
//! Colors left unset in [`BarColors`] are taken from the active Iced theme:
//! the success banner uses the weak primary pair, the error banner the weak
//! danger pair.

use crate::bar::Kind;
use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Optional color overrides for the bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarColors {
    pub content_background: Option<Color>,
    pub success_container: Option<Color>,
    pub success_content: Option<Color>,
    pub error_container: Option<Color>,
    pub error_content: Option<Color>,
}

impl BarColors {
    /// Banner background for `kind`.
    #[must_use]
    pub fn container(&self, theme: &Theme, kind: Kind) -> Color {
        let palette = theme.extended_palette();
        match kind {
            Kind::Success => self
                .success_container
                .unwrap_or(palette.primary.weak.color),
            Kind::Error => self.error_container.unwrap_or(palette.danger.weak.color),
        }
    }

    /// Icon, text and action color for `kind`.
    #[must_use]
    pub fn content(&self, theme: &Theme, kind: Kind) -> Color {
        let palette = theme.extended_palette();
        match kind {
            Kind::Success => self.success_content.unwrap_or(palette.primary.weak.text),
            Kind::Error => self.error_content.unwrap_or(palette.danger.weak.text),
        }
    }

    /// Background painted behind the host content.
    #[must_use]
    pub fn background(&self, theme: &Theme) -> Color {
        self.content_background
            .unwrap_or(theme.extended_palette().background.base.color)
    }
}

/// Banner container style.
pub fn bar(colors: BarColors, kind: Kind) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(colors.container(theme, kind))),
        text_color: Some(colors.content(theme, kind)),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Surface behind the host content.
pub fn content_surface(colors: BarColors) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(colors.background(theme))),
        ..Default::default()
    }
}

/// Flat text button for the copy action, tinted with the error content color.
pub fn copy_button(colors: BarColors) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text_color = colors.content(theme, Kind::Error);
        let background = match status {
            button::Status::Hovered => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..text_color
            })),
            button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text_color
            })),
            button::Status::Active | button::Status::Disabled => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Pill shown after a successful copy.
pub fn confirmation(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::GRAY_900
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
