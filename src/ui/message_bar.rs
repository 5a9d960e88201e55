// SPDX-License-Identifier: MPL-2.0
//! Iced message bar component.
//!
//! Owns a [`MessageBarState`] and a [`VisibilityController`] and drives the
//! controller with Iced tasks: each show schedules an abortable delayed
//! [`Message::HideElapsed`] carrying the controller epoch. The previous hide
//! task is aborted before a new one is scheduled, and the epoch check in
//! [`VisibilityController::on_hide_elapsed`] drops any message that was
//! already in flight.
//!
//! # Usage
//!
//! ```ignore
//! use iced_message_bar::ui::message_bar::{self, MessageBar};
//!
//! // In update
//! Message::SaveFailed(err) => self.bar.add_error(&err).map(Message::MessageBar),
//! Message::MessageBar(msg) => self.bar.update(msg).map(Message::MessageBar),
//!
//! // In view
//! message_bar::with_message_bar(content, &self.bar, Message::MessageBar)
//! ```

use crate::bar::{
    BarMessage, Epoch, Kind, MessageBarState, Phase, VisibilityController, VisibilityDuration,
};
use crate::config::{MaxLines, MessageBarConfig, Position};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles::{self, BarColors};
use iced::alignment::{Horizontal, Vertical};
use iced::task::Handle;
use iced::widget::{button, svg, text, Container, Row, Stack, Text};
use iced::{Element, Length, Padding, Task, Theme};
use std::error::Error as StdError;
use std::time::Duration;

/// Text of the copy action.
const COPY_LABEL: &str = "Copy";

/// Text of the transient confirmation shown after copying.
const COPIED_LABEL: &str = "Copied!";

/// Messages handled by [`MessageBar::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// The auto-hide delay scheduled for `Epoch` has elapsed.
    HideElapsed(Epoch),
    /// Hide the bar now.
    Dismiss,
    /// Copy the current error text to the clipboard.
    CopyErrorText,
    /// The confirmation scheduled with this token has elapsed.
    ConfirmationElapsed(u64),
}

/// Icons and colors of the bar. Everything here is passed through to the
/// renderer untouched.
#[derive(Debug, Clone)]
pub struct Appearance {
    pub success_icon: svg::Handle,
    pub error_icon: svg::Handle,
    pub colors: BarColors,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            success_icon: icons::check(),
            error_icon: icons::warning(),
            colors: BarColors::default(),
        }
    }
}

/// Transient "Copied!" acknowledgment.
#[derive(Debug, Default)]
struct Confirmation {
    visible: bool,
    token: u64,
    task: Option<Handle>,
}

/// A message bar bound to one hosting surface.
///
/// Dropping the bar tears the controller down and aborts every pending task.
#[derive(Debug)]
pub struct MessageBar {
    state: MessageBarState,
    visibility: VisibilityController,
    config: MessageBarConfig,
    appearance: Appearance,
    hide_task: Option<Handle>,
    confirmation: Confirmation,
}

impl Default for MessageBar {
    fn default() -> Self {
        Self::new(MessageBarConfig::default())
    }
}

impl MessageBar {
    #[must_use]
    pub fn new(config: MessageBarConfig) -> Self {
        Self {
            state: MessageBarState::new(),
            visibility: VisibilityController::new(config.visibility_duration),
            config,
            appearance: Appearance::default(),
            hide_task: None,
            confirmation: Confirmation::default(),
        }
    }

    #[must_use]
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    #[must_use]
    pub fn config(&self) -> &MessageBarConfig {
        &self.config
    }

    /// Read access for hosts that render the state themselves.
    #[must_use]
    pub fn state(&self) -> &MessageBarState {
        &self.state
    }

    #[must_use]
    pub fn current_message(&self) -> &BarMessage {
        self.state.current_message()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.visibility.phase()
    }

    /// Epoch of the hide that is still allowed to fire.
    #[must_use]
    pub fn pending_hide(&self) -> Option<Epoch> {
        self.visibility.pending()
    }

    #[must_use]
    pub fn is_confirmation_visible(&self) -> bool {
        self.confirmation.visible
    }

    /// Shows a success message and restarts the countdown.
    pub fn add_success(&mut self, text: impl Into<String>) -> Task<Message> {
        self.state.add_success(text);
        self.sync()
    }

    /// Shows the description of `err` and restarts the countdown.
    pub fn add_error(&mut self, err: &(dyn StdError + '_)) -> Task<Message> {
        self.state.add_error(err);
        self.sync()
    }

    /// Shows an error description and restarts the countdown.
    pub fn add_error_text(&mut self, text: impl Into<String>) -> Task<Message> {
        self.state.add_error_text(text);
        self.sync()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::HideElapsed(epoch) => {
                if self.visibility.on_hide_elapsed(epoch) {
                    self.hide_task = None;
                }
                Task::none()
            }
            Message::Dismiss => {
                self.dismiss_now();
                Task::none()
            }
            Message::CopyErrorText => self.copy_error_text(),
            Message::ConfirmationElapsed(token) => {
                if token == self.confirmation.token {
                    self.confirmation.visible = false;
                    self.confirmation.task = None;
                }
                Task::none()
            }
        }
    }

    /// Hides the bar now. No-op when already hidden.
    pub fn dismiss_now(&mut self) {
        if self.visibility.dismiss_now() {
            self.cancel_hide();
        }
    }

    /// Copies the current error text. Does nothing unless an error is shown.
    pub fn copy_error_text(&mut self) -> Task<Message> {
        let Some(copied) = self.state.copy_text().map(str::to_owned) else {
            return Task::none();
        };
        tracing::debug!(len = copied.len(), "copying message bar error text");

        let copy = iced::clipboard::write(copied);
        if self.config.show_confirmation_on_copy {
            Task::batch([copy, self.show_confirmation()])
        } else {
            copy
        }
    }

    /// Stops all timers and ignores every later post.
    pub fn teardown(&mut self) {
        self.visibility.teardown();
        self.cancel_hide();
        if let Some(task) = self.confirmation.task.take() {
            task.abort();
        }
        self.confirmation.visible = false;
    }

    /// Feeds the latest snapshot to the controller; cancel-then-schedule.
    fn sync(&mut self) -> Task<Message> {
        let Some(request) = self.visibility.on_state_change(&self.state.snapshot()) else {
            return Task::none();
        };
        self.cancel_hide();

        let (task, handle) = delayed(request.after, Message::HideElapsed(request.epoch)).abortable();
        self.hide_task = Some(handle.abort_on_drop());
        task
    }

    fn cancel_hide(&mut self) {
        if let Some(task) = self.hide_task.take() {
            task.abort();
        }
    }

    fn show_confirmation(&mut self) -> Task<Message> {
        if let Some(task) = self.confirmation.task.take() {
            task.abort();
        }
        self.confirmation.token = self.confirmation.token.wrapping_add(1);
        self.confirmation.visible = true;

        let (task, handle) = delayed(
            self.config.confirmation_duration.as_duration(),
            Message::ConfirmationElapsed(self.confirmation.token),
        )
        .abortable();
        self.confirmation.task = Some(handle.abort_on_drop());
        task
    }

    /// Renders the overlay: the banner anchored to the configured edge and
    /// the copy confirmation, over a transparent full-size layer.
    pub fn view(&self) -> Element<'_, Message> {
        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        if let Some(banner) = self.banner() {
            let anchor = match self.config.position {
                Position::Top => Vertical::Top,
                Position::Bottom => Vertical::Bottom,
            };
            layers = layers.push(
                Container::new(banner)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_y(anchor),
            );
        }

        if self.confirmation.visible {
            layers = layers.push(confirmation_toast(self.config.position));
        }

        layers.into()
    }

    /// The banner itself, or `None` while hidden or empty.
    fn banner(&self) -> Option<Element<'_, Message>> {
        if !self.visibility.is_visible() {
            return None;
        }
        let message = self.state.current_message();
        let kind = message.kind()?;
        let content = message.text().unwrap_or_default();
        let colors = self.appearance.colors;

        let (icon, max_lines) = match kind {
            Kind::Success => (
                self.appearance.success_icon.clone(),
                self.config.success_max_lines,
            ),
            Kind::Error => (
                self.appearance.error_icon.clone(),
                self.config.error_max_lines,
            ),
        };

        let icon = svg::Svg::new(icon)
            .width(Length::Fixed(sizing::ICON_MD))
            .height(Length::Fixed(sizing::ICON_MD))
            .style(move |theme: &Theme, _status| svg::Style {
                color: Some(colors.content(theme, kind)),
            });

        let label = Text::new(content)
            .size(typography::LABEL_LG)
            .wrapping(if max_lines.is_single() {
                text::Wrapping::None
            } else {
                text::Wrapping::Word
            })
            .style(move |theme: &Theme| text::Style {
                color: Some(colors.content(theme, kind)),
            });

        let message_row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .width(Length::FillPortion(4))
            .push(icon)
            .push(
                Container::new(label)
                    .width(Length::Fill)
                    .max_height(clamped_height(max_lines))
                    .clip(true),
            );

        let mut row = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(message_row);

        if kind == Kind::Error {
            let copy = button(Text::new(COPY_LABEL).size(typography::LABEL_MD))
                .on_press(Message::CopyErrorText)
                .padding([0.0, spacing::XS])
                .style(styles::copy_button(colors));
            row = row.push(
                Container::new(copy)
                    .width(Length::FillPortion(1))
                    .align_x(Horizontal::Right),
            );
        }

        let padding = Padding::from([
            self.config.vertical_padding,
            self.config.horizontal_padding,
        ]);

        Some(
            Container::new(row)
                .width(Length::Fill)
                .padding(padding)
                .style(styles::bar(colors, kind))
                .into(),
        )
    }
}

impl Drop for MessageBar {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Stacks the bar over `content`, the way a host screen embeds it.
pub fn with_message_bar<'a, M: 'a>(
    content: impl Into<Element<'a, M>>,
    bar: &'a MessageBar,
    on_message: impl Fn(Message) -> M + 'a,
) -> Element<'a, M> {
    let surface = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::content_surface(bar.appearance.colors));

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(surface)
        .push(bar.view().map(on_message))
        .into()
}

/// Confirmation pill, placed on the edge opposite to the banner.
fn confirmation_toast<'a>(position: Position) -> Element<'a, Message> {
    let pill = Container::new(Text::new(COPIED_LABEL).size(typography::LABEL_MD))
        .padding([spacing::XS, spacing::MD])
        .style(styles::confirmation);

    let anchor = match position {
        Position::Top => Vertical::Bottom,
        Position::Bottom => Vertical::Top,
    };

    Container::new(pill)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(anchor)
        .padding(spacing::LG)
        .into()
}

/// Height that fits `lines` lines of message text.
fn clamped_height(lines: MaxLines) -> f32 {
    f32::from(lines.value()) * typography::LABEL_LG * typography::LINE_HEIGHT
}

fn delayed(after: Duration, message: Message) -> Task<Message> {
    Task::perform(async move { tokio::time::sleep(after).await }, move |()| message)
}

/// Builds a bar whose auto-hide uses `duration`, other settings default.
#[must_use]
pub fn with_duration(duration: VisibilityDuration) -> MessageBar {
    MessageBar::new(MessageBarConfig {
        visibility_duration: duration,
        ..MessageBarConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::UNKNOWN_ERROR_TEXT;

    fn elapse(bar: &mut MessageBar) {
        let epoch = bar.pending_hide().expect("a hide should be pending");
        let _ = bar.update(Message::HideElapsed(epoch));
    }

    #[test]
    fn new_bar_is_hidden() {
        let bar = MessageBar::default();
        assert!(!bar.is_visible());
        assert_eq!(bar.current_message(), &BarMessage::Empty);
        assert!(bar.banner().is_none());
    }

    #[test]
    fn success_shows_then_hides_on_elapsed() {
        let mut bar = MessageBar::default();
        let _ = bar.add_success("Successful.");
        assert!(bar.is_visible());
        assert!(bar.banner().is_some());

        elapse(&mut bar);
        assert!(!bar.is_visible());
        assert!(bar.pending_hide().is_none());
    }

    #[test]
    fn duplicate_error_restarts_countdown() {
        let mut bar = MessageBar::default();
        let _ = bar.add_error_text("Fatal Error!");
        let first = bar.pending_hide().unwrap();
        let _ = bar.add_error_text("Fatal Error!");
        let second = bar.pending_hide().unwrap();
        assert_ne!(first, second);

        let _ = bar.update(Message::HideElapsed(first));
        assert!(bar.is_visible());

        let _ = bar.update(Message::HideElapsed(second));
        assert!(!bar.is_visible());
    }

    #[test]
    fn error_after_success_replaces_content() {
        let mut bar = MessageBar::default();
        let _ = bar.add_success("Successfully Updated.");
        let _ = bar.add_error(&std::io::Error::other("Internet Unavailable."));

        assert_eq!(bar.state().copy_text(), Some("Internet Unavailable."));
        assert!(bar.current_message().is_error());
    }

    #[test]
    fn empty_error_is_unknown() {
        let mut bar = MessageBar::default();
        let _ = bar.add_error_text("");
        assert_eq!(bar.current_message().text(), Some(UNKNOWN_ERROR_TEXT));
    }

    #[test]
    fn dismiss_hides_and_is_idempotent() {
        let mut bar = MessageBar::default();
        let _ = bar.add_success("Successful.");
        let epoch = bar.pending_hide().unwrap();

        let _ = bar.update(Message::Dismiss);
        assert!(!bar.is_visible());
        let _ = bar.update(Message::Dismiss);
        assert!(!bar.is_visible());

        let _ = bar.update(Message::HideElapsed(epoch));
        assert_eq!(bar.phase(), Phase::Hidden);
    }

    #[test]
    fn copy_confirmation_only_for_errors() {
        let mut bar = MessageBar::new(MessageBarConfig {
            show_confirmation_on_copy: true,
            ..MessageBarConfig::default()
        });

        let _ = bar.add_success("Successful.");
        let _ = bar.update(Message::CopyErrorText);
        assert!(!bar.is_confirmation_visible());

        let _ = bar.add_error_text("Fatal Error!");
        let _ = bar.update(Message::CopyErrorText);
        assert!(bar.is_confirmation_visible());
    }

    #[test]
    fn stale_confirmation_is_ignored() {
        let mut bar = MessageBar::new(MessageBarConfig {
            show_confirmation_on_copy: true,
            ..MessageBarConfig::default()
        });
        let _ = bar.add_error_text("Fatal Error!");
        let _ = bar.update(Message::CopyErrorText);
        let _ = bar.update(Message::CopyErrorText);

        let _ = bar.update(Message::ConfirmationElapsed(1));
        assert!(bar.is_confirmation_visible());
        let _ = bar.update(Message::ConfirmationElapsed(2));
        assert!(!bar.is_confirmation_visible());
    }

    #[test]
    fn confirmation_disabled_by_default() {
        let mut bar = MessageBar::default();
        let _ = bar.add_error_text("Fatal Error!");
        let _ = bar.update(Message::CopyErrorText);
        assert!(!bar.is_confirmation_visible());
    }

    #[test]
    fn teardown_ignores_late_timers_and_posts() {
        let mut bar = MessageBar::default();
        let _ = bar.add_success("Successful.");
        let epoch = bar.pending_hide().unwrap();

        bar.teardown();
        let _ = bar.update(Message::HideElapsed(epoch));
        assert_eq!(bar.phase(), Phase::TornDown);

        let _ = bar.add_error_text("late");
        assert!(!bar.is_visible());
    }

    #[test]
    fn clamped_height_grows_with_lines() {
        assert!(clamped_height(MaxLines::new(3)) > clamped_height(MaxLines::new(1)));
    }

    #[test]
    fn with_duration_overrides_only_duration() {
        let bar = with_duration(VisibilityDuration::from_millis(5000));
        assert_eq!(bar.config().visibility_duration.millis(), 5000);
        assert_eq!(bar.config().position, Position::Top);
    }
}
