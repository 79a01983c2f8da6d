//! # Error Notification Demo
//!
//! A persistent error notification that starts open. The trigger button is
//! disabled while the notification is on screen and re-enabled when it
//! closes. Demonstrates:
//! - A zero-duration notification that stays until dismissed
//! - Keeping a trigger and an overlay in lockstep through messages
//!
//! Run with: `cargo run --example notification_error`

use std::time::Duration;

use vitrine::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vitrine::ratatui::layout::Rect;
use vitrine::ratatui::Frame;
use vitrine::widgets::button::{self, Button, ButtonStyle};
use vitrine::widgets::notification::{self, Notification, Position, Variant};
use vitrine::{
    apply_theme, terminal_events, Command, Component, Fragment, Model, RenderRoot, Role,
    Subscription, TerminalEvent, Theme,
};

struct NotificationDemo {
    theme: Theme,
    button: Button,
    notification: Notification,
}

#[derive(Debug)]
enum Msg {
    Key(KeyEvent),
    Close,
    Button(button::Message),
    Notification(notification::Message),
    Quit,
}

impl Model for NotificationDemo {
    type Message = Msg;
    type Flags = Theme;

    fn init(theme: Theme) -> (Self, Command<Msg>) {
        let mut button =
            Button::new("Show notification").with_style(ButtonStyle::themed(&theme));
        button.focus();
        button.set_disabled(true);

        let content = Fragment::row()
            .spacing(2)
            .child(Fragment::text("Failed to generate report"))
            .child(Fragment::text("press c to close").role(Role::Secondary));
        let notification = Notification::new(content)
            .with_variant(Variant::Error)
            .with_position(Position::Middle)
            .with_duration(Duration::ZERO)
            .with_theme(&theme)
            .opened(true);

        (
            NotificationDemo {
                theme,
                button,
                notification,
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Key(key) => self
                .button
                .update(button::Message::KeyPress(key))
                .map(Msg::Button),
            Msg::Close => Command::message(Msg::Notification(notification::Message::Close)),
            Msg::Button(button::Message::Pressed) => {
                self.button.set_disabled(true);
                Command::message(Msg::Notification(notification::Message::Open))
            }
            Msg::Button(inner) => self.button.update(inner).map(Msg::Button),
            Msg::Notification(inner) => {
                let cmd = self.notification.update(inner).map(Msg::Notification);
                self.button.set_disabled(self.notification.is_opened());
                cmd
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let root = apply_theme(RenderRoot::new(frame.area()), &self.theme);
        let area = root.area();
        self.button
            .view(frame, Rect::new(area.x + 1, area.y + 1, area.width.saturating_sub(2), 1));
        self.notification.view(frame, area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let mut subs = vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Msg::Quit)
                }
                KeyCode::Char('c') => Some(Msg::Close),
                _ => Some(Msg::Key(key)),
            },
            _ => None,
        })];
        subs.extend(
            self.notification
                .subscriptions()
                .into_iter()
                .map(|sub| sub.map(Msg::Notification)),
        );
        subs
    }
}

#[vitrine::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    vitrine::run::<NotificationDemo>(Theme::dark()).await?;
    Ok(())
}
