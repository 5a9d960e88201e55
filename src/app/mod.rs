// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single message bar.
//!
//! Four buttons post the canned messages and Escape dismisses the bar. The
//! bar settings come from `message_bar.toml`, overridden by the CLI
//! [`Flags`].

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, MessageBarConfig};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::message_bar::{self, MessageBar};
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::io;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 240;

const APP_TITLE: &str = "Message Bar";

pub const CONNECTION_ERROR_TEXT: &str = "Internet Unavailable.";
pub const LONG_ERROR_TEXT: &str = "This is supposed to be a very long error message. It keeps going so that the bar has to clamp it to the configured number of lines instead of growing without bound.";
pub const SUCCESS_TEXT: &str = "Successful.";
pub const UPDATED_TEXT: &str = "Successfully Updated.";

/// Root Iced application state.
#[derive(Debug, Default)]
pub struct App {
    bar: MessageBar,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Applies the CLI flags on top of the file configuration.
fn resolve_config(config: &config::Config, flags: &Flags) -> MessageBarConfig {
    let mut file = config.clone();
    if let Some(position) = flags.position {
        file.layout.position = Some(position);
    }
    if let Some(duration_ms) = flags.duration_ms {
        file.timing.visibility_duration_ms = Some(duration_ms);
    }
    if flags.confirm_copy {
        file.copy.show_confirmation_on_copy = Some(true);
    }
    file.resolve()
}

impl App {
    /// Loads the configuration and builds the bar. A configuration that
    /// could not be read is reported through the bar itself.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.as_ref().map(PathBuf::from);
        let (file_config, warning) = config::load_with_override(config_dir);
        let resolved = resolve_config(&file_config, &flags);

        tracing::info!(
            position = %resolved.position,
            duration_ms = resolved.visibility_duration.millis(),
            confirm_copy = resolved.show_confirmation_on_copy,
            "starting message bar demo"
        );

        let mut app = Self {
            bar: MessageBar::new(resolved),
        };

        let task = match warning {
            Some(warning) => app.bar.add_error_text(warning).map(Message::MessageBar),
            None => Task::none(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    #[must_use]
    pub fn bar(&self) -> &MessageBar {
        &self.bar
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::ShowConnectionError => {
                let err = io::Error::new(io::ErrorKind::NotConnected, CONNECTION_ERROR_TEXT);
                self.bar.add_error(&err)
            }
            Message::ShowLongError => self.bar.add_error_text(LONG_ERROR_TEXT),
            Message::ShowSuccess => self.bar.add_success(SUCCESS_TEXT),
            Message::ShowUpdated => self.bar.add_success(UPDATED_TEXT),
            Message::EscapePressed => self.bar.update(message_bar::Message::Dismiss),
            Message::MessageBar(msg) => self.bar.update(msg),
        };
        task.map(Message::MessageBar)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let demo_button = |label: &'static str, message: Message| {
            button(Text::new(label).align_x(Horizontal::Center))
                .width(Length::Fixed(sizing::DEMO_BUTTON_WIDTH))
                .padding(spacing::XS)
                .on_press(message)
        };

        let buttons = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(demo_button("Error", Message::ShowConnectionError))
            .push(demo_button("Long Error", Message::ShowLongError))
            .push(demo_button("Success", Message::ShowSuccess))
            .push(demo_button("Update", Message::ShowUpdated));

        let content = Container::new(buttons)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill);

        message_bar::with_message_bar(content, &self.bar, Message::MessageBar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Position;
    use tempfile::tempdir;

    fn boot(flags: Flags) -> (App, tempfile::TempDir) {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..flags
        };
        let (app, _task) = App::new(flags);
        (app, dir)
    }

    #[test]
    fn starts_hidden_without_config_file() {
        let (app, _dir) = boot(Flags::default());
        assert!(!app.bar().is_visible());
    }

    #[test]
    fn flags_override_file_config() {
        let (app, _dir) = boot(Flags {
            position: Some(Position::Bottom),
            duration_ms: Some(5000),
            confirm_copy: true,
            ..Flags::default()
        });

        let config = app.bar().config();
        assert_eq!(config.position, Position::Bottom);
        assert_eq!(config.visibility_duration.millis(), 5000);
        assert!(config.show_confirmation_on_copy);
    }

    #[test]
    fn invalid_config_file_is_reported_in_the_bar() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("message_bar.toml"), "timing = 3").expect("write");

        let (app, _task) = App::new(Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        });
        assert!(app.bar().is_visible());
        assert!(app.bar().current_message().is_error());
    }

    #[test]
    fn demo_buttons_post_canned_messages() {
        let (mut app, _dir) = boot(Flags::default());

        let _ = app.update(Message::ShowConnectionError);
        assert_eq!(
            app.bar().current_message().text(),
            Some(CONNECTION_ERROR_TEXT)
        );

        let _ = app.update(Message::ShowSuccess);
        assert_eq!(app.bar().current_message().text(), Some(SUCCESS_TEXT));

        let _ = app.update(Message::ShowUpdated);
        assert_eq!(app.bar().current_message().text(), Some(UPDATED_TEXT));

        let _ = app.update(Message::ShowLongError);
        assert_eq!(app.bar().current_message().text(), Some(LONG_ERROR_TEXT));
    }

    #[test]
    fn escape_dismisses_the_bar() {
        let (mut app, _dir) = boot(Flags::default());
        let _ = app.update(Message::ShowSuccess);
        assert!(app.bar().is_visible());

        let _ = app.update(Message::EscapePressed);
        assert!(!app.bar().is_visible());
    }
}
