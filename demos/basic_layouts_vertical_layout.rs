//! # Vertical Layout Demo
//!
//! Three buttons stacked in a padded, spaced column. Tab moves focus;
//! Enter or Space presses the focused button. Demonstrates:
//! - Column layout with spacing and padding
//! - Routing one key stream to several child components
//!
//! Run with: `cargo run --example basic_layouts_vertical_layout`

use vitrine::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vitrine::ratatui::layout::Rect;
use vitrine::ratatui::Frame;
use vitrine::widgets::button::{self, Button, ButtonStyle};
use vitrine::{
    apply_theme, terminal_events, Command, Component, Model, RenderRoot, Subscription,
    TerminalEvent, Theme,
};

struct VerticalLayoutDemo {
    theme: Theme,
    buttons: Vec<Button>,
    focused: usize,
    last_pressed: Option<usize>,
}

#[derive(Debug)]
enum Msg {
    Key(KeyEvent),
    FocusNext,
    Button(usize, button::Message),
    Quit,
}

impl Model for VerticalLayoutDemo {
    type Message = Msg;
    type Flags = Theme;

    fn init(theme: Theme) -> (Self, Command<Msg>) {
        let style = ButtonStyle::themed(&theme);
        let mut buttons: Vec<Button> = (1..=3)
            .map(|i| Button::new(format!("Button {i}")).with_style(style.clone()))
            .collect();
        buttons[0].focus();
        (
            VerticalLayoutDemo {
                theme,
                buttons,
                focused: 0,
                last_pressed: None,
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Key(key) => {
                let index = self.focused;
                self.buttons[index]
                    .update(button::Message::KeyPress(key))
                    .map(move |m| Msg::Button(index, m))
            }
            Msg::FocusNext => {
                self.buttons[self.focused].blur();
                self.focused = (self.focused + 1) % self.buttons.len();
                self.buttons[self.focused].focus();
                Command::none()
            }
            Msg::Button(index, button::Message::Pressed) => {
                self.last_pressed = Some(index);
                Command::none()
            }
            Msg::Button(index, inner) => self.buttons[index]
                .update(inner)
                .map(move |m| Msg::Button(index, m)),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let root = apply_theme(RenderRoot::new(frame.area()), &self.theme);
        let area = root.area();

        // Padding 1, spacing 1: button rows at y offsets 1, 3, 5.
        for (i, btn) in self.buttons.iter().enumerate() {
            let y = area.y + 1 + (i as u16) * 2;
            if y < area.bottom() {
                btn.view(frame, Rect::new(area.x + 1, y, area.width.saturating_sub(2), 1));
            }
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Msg::Quit)
                }
                KeyCode::Tab => Some(Msg::FocusNext),
                _ => Some(Msg::Key(key)),
            },
            _ => None,
        })]
    }
}

#[vitrine::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model = vitrine::run::<VerticalLayoutDemo>(Theme::dark()).await?;
    if let Some(i) = model.last_pressed {
        println!("Last pressed: Button {}", i + 1);
    }
    Ok(())
}
