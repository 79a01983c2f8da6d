//! # Time Picker Demo
//!
//! A "Message received" time field with a one-second step, so the value
//! displays seconds and Up/Down adjust it second by second, wrapping at
//! midnight.
//!
//! Run with: `cargo run --example time_picker_seconds_step`

use std::time::Duration;

use vitrine::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vitrine::ratatui::layout::Rect;
use vitrine::ratatui::Frame;
use vitrine::widgets::time_picker::{self, TimeOfDay, TimePicker, TimePickerStyle};
use vitrine::{
    apply_theme, terminal_events, Command, Component, Model, RenderRoot, Subscription,
    TerminalEvent, Theme,
};

struct TimePickerDemo {
    theme: Theme,
    picker: TimePicker,
    last_change: Option<TimeOfDay>,
}

#[derive(Debug)]
enum Msg {
    Key(KeyEvent),
    Picker(time_picker::Message),
    Quit,
}

impl Model for TimePickerDemo {
    type Message = Msg;
    type Flags = Theme;

    fn init(theme: Theme) -> (Self, Command<Msg>) {
        let value: TimeOfDay = "15:45:08".parse().unwrap_or(TimeOfDay::from_seconds(0));
        let mut picker = TimePicker::new("Message received")
            .with_value(value)
            .with_step(Duration::from_secs(1))
            .with_style(TimePickerStyle::themed(&theme));
        picker.focus();
        (
            TimePickerDemo {
                theme,
                picker,
                last_change: None,
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Key(key) => self
                .picker
                .update(time_picker::Message::KeyPress(key))
                .map(Msg::Picker),
            Msg::Picker(time_picker::Message::Changed(value)) => {
                self.last_change = Some(value);
                Command::none()
            }
            Msg::Picker(inner) => self.picker.update(inner).map(Msg::Picker),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let root = apply_theme(RenderRoot::new(frame.area()), &self.theme);
        let area = root.area();
        self.picker
            .view(frame, Rect::new(area.x + 1, area.y + 1, area.width.saturating_sub(2), 1));
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Msg::Quit)
                }
                _ => Some(Msg::Key(key)),
            },
            _ => None,
        })]
    }
}

#[vitrine::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model = vitrine::run::<TimePickerDemo>(Theme::dark()).await?;
    if let Some(value) = model.last_change {
        println!("Final value: {}", value.display(true));
    }
    Ok(())
}
