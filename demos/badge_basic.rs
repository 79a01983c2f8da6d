//! # Badge Demo
//!
//! Four status badges in a spaced row, one per variant. Demonstrates:
//! - Applying a named theme to the render root at construction
//! - Embedding widget-contributed leaves in a [`Fragment`] row
//!
//! Run with: `cargo run --example badge_basic`

use vitrine::crossterm::event::{KeyCode, KeyModifiers};
use vitrine::ratatui::Frame;
use vitrine::widgets::badge::{Badge, Variant};
use vitrine::{
    apply_theme, terminal_events, Command, Fragment, Model, RenderRoot, Subscription,
    TerminalEvent, Theme,
};

struct BadgeDemo {
    theme: Theme,
}

#[derive(Debug)]
enum Msg {
    Quit,
    Noop,
}

impl Model for BadgeDemo {
    type Message = Msg;
    type Flags = Theme;

    fn init(theme: Theme) -> (Self, Command<Msg>) {
        (BadgeDemo { theme }, Command::none())
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Quit => Command::quit(),
            Msg::Noop => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let root = apply_theme(RenderRoot::new(frame.area()), &self.theme);

        let row = Fragment::row()
            .spacing(1)
            .padding(1)
            .child(Badge::new("Pending").node(&self.theme))
            .child(
                Badge::new("Confirmed")
                    .with_variant(Variant::Success)
                    .node(&self.theme),
            )
            .child(
                Badge::new("Denied")
                    .with_variant(Variant::Error)
                    .node(&self.theme),
            )
            .child(
                Badge::new("On hold")
                    .with_variant(Variant::Contrast)
                    .node(&self.theme),
            );

        row.render(&self.theme, frame, root.area());
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Msg::Quit)
                }
                _ => Some(Msg::Noop),
            },
            _ => None,
        })]
    }
}

#[vitrine::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    vitrine::run::<BadgeDemo>(Theme::dark()).await?;
    Ok(())
}
