//! **vitrine** -- a terminal component showcase kit for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything you need to build a
//! vitrine demo from a single dependency:
//!
//! ```toml
//! [dependencies]
//! vitrine = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`vitrine_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Subscription`], [`Theme`],
//!   [`Fragment`], [`run`], [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`vitrine_widgets`]
//!   (badges, buttons, list boxes, notifications, and more).
//! * The [`data`] module provides the shared sample records the demos
//!   render.
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use vitrine::{apply_theme, Command, Model, RenderRoot, Theme};
//! use ratatui::Frame;
//! use ratatui::widgets::Paragraph;
//!
//! struct Hello {
//!     theme: Theme,
//! }
//! enum Msg {}
//!
//! impl Model for Hello {
//!     type Message = Msg;
//!     type Flags = Theme;
//!
//!     fn init(theme: Theme) -> (Self, Command<Msg>) {
//!         (Hello { theme }, Command::none())
//!     }
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {}
//!     }
//!     fn view(&self, frame: &mut Frame) {
//!         let root = apply_theme(RenderRoot::new(frame.area()), &self.theme);
//!         frame.render_widget(Paragraph::new("Hello, vitrine!"), root.area());
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     vitrine::run::<Hello>(Theme::dark()).await.unwrap();
//! }
//! ```

pub use vitrine_core::*;
pub mod widgets {
    pub use vitrine_widgets::*;
}

pub mod data;

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;

#[cfg(test)]
mod tests {
    //! End-to-end scenario: a notification demo where a trigger button is
    //! disabled exactly while the notification it opens is on screen.

    use crate::testing::TestProgram;
    use crate::widgets::button::{self, Button};
    use crate::widgets::notification::{self, Notification, Position, Variant};
    use crate::{apply_theme, Command, Component, Fragment, Model, RenderRoot, Theme};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::layout::Rect;
    use ratatui::Frame;
    use std::time::Duration;

    struct NotificationDemo {
        theme: Theme,
        button: Button,
        notification: Notification,
    }

    enum Msg {
        Key(KeyEvent),
        Button(button::Message),
        Notification(notification::Message),
    }

    impl Model for NotificationDemo {
        type Message = Msg;
        type Flags = Theme;

        fn init(theme: Theme) -> (Self, Command<Msg>) {
            let mut button = Button::new("Show notification");
            button.focus();
            button.set_disabled(true);
            let notification = Notification::new(Fragment::text("Failed to generate report"))
                .with_variant(Variant::Error)
                .with_position(Position::Middle)
                .with_duration(Duration::ZERO)
                .with_theme(&theme)
                .opened(true);
            (
                Self {
                    theme,
                    button,
                    notification,
                },
                Command::none(),
            )
        }

        fn update(&mut self, msg: Msg) -> Command<Msg> {
            match msg {
                Msg::Key(key) if key.code == KeyCode::Char('c') => {
                    Command::message(Msg::Notification(notification::Message::Close))
                }
                Msg::Key(key) => self
                    .button
                    .update(button::Message::KeyPress(key))
                    .map(Msg::Button),
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
            }
        }

        fn view(&self, frame: &mut Frame) {
            let root = apply_theme(RenderRoot::new(frame.area()), &self.theme);
            let area = root.area();
            self.button
                .view(frame, Rect::new(area.x, area.y, area.width, 1));
            self.notification.view(frame, area);
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn notification_starts_open_with_trigger_disabled() {
        let program: TestProgram<NotificationDemo> = TestProgram::new(Theme::dark());
        assert!(program.model().notification.is_opened());
        assert!(program.model().button.is_disabled());
        let out = program.render_string(60, 12);
        assert!(out.contains("Failed to generate report"));
    }

    #[test]
    fn close_key_hides_notification_and_enables_trigger() {
        let mut program: TestProgram<NotificationDemo> = TestProgram::new(Theme::dark());
        program.send(Msg::Key(key(KeyCode::Char('c'))));
        program.drain_messages();
        assert!(!program.model().notification.is_opened());
        assert!(!program.model().button.is_disabled());
        let out = program.render_string(60, 12);
        assert!(!out.contains("Failed to generate report"));
    }

    #[test]
    fn pressing_the_trigger_reopens_and_disables_it_again() {
        let mut program: TestProgram<NotificationDemo> = TestProgram::new(Theme::dark());
        program.send(Msg::Key(key(KeyCode::Char('c'))));
        program.drain_messages();
        program.send(Msg::Key(key(KeyCode::Enter)));
        program.drain_messages();
        assert!(program.model().notification.is_opened());
        assert!(program.model().button.is_disabled());
        let out = program.render_string(60, 12);
        assert!(out.contains("Failed to generate report"));
    }

    #[test]
    fn disabled_trigger_ignores_activation_while_open() {
        let mut program: TestProgram<NotificationDemo> = TestProgram::new(Theme::dark());
        program.send(Msg::Key(key(KeyCode::Enter)));
        program.drain_messages();
        assert!(program.model().notification.is_opened());
        assert!(program.model().button.is_disabled());
    }
}
