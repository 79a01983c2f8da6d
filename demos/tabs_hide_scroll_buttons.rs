//! # Tabs Demo
//!
//! A tab bar wider than its container, with the overflow indicators hidden.
//! Left/Right scroll through the tabs; the window follows the selection.
//! Press `s` to toggle the indicators back on for comparison.
//!
//! Run with: `cargo run --example tabs_hide_scroll_buttons`

use vitrine::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vitrine::ratatui::layout::Rect;
use vitrine::ratatui::text::Line;
use vitrine::ratatui::widgets::Paragraph;
use vitrine::ratatui::Frame;
use vitrine::widgets::tabs::{self, Tabs, TabsStyle};
use vitrine::{
    apply_theme, terminal_events, Command, Component, Model, RenderRoot, Subscription,
    TerminalEvent, Theme,
};

const BAR_WIDTH: u16 = 40;

struct TabsDemo {
    theme: Theme,
    tabs: Tabs,
    hide_buttons: bool,
}

#[derive(Debug)]
enum Msg {
    Key(KeyEvent),
    Tabs(tabs::Message),
    ToggleButtons,
    Quit,
}

fn build_tabs(theme: &Theme, hide_buttons: bool) -> Tabs {
    let mut tabs = Tabs::new(
        [
            "Analytics",
            "Customers",
            "Dashboards",
            "Documents",
            "Orders",
            "Products",
            "Tasks",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    )
    .with_style(TabsStyle::themed(theme))
    .with_hide_scroll_buttons(hide_buttons);
    tabs.focus();
    tabs
}

impl Model for TabsDemo {
    type Message = Msg;
    type Flags = Theme;

    fn init(theme: Theme) -> (Self, Command<Msg>) {
        let tabs = build_tabs(&theme, true);
        (
            TabsDemo {
                theme,
                tabs,
                hide_buttons: true,
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Key(key) => self
                .tabs
                .update(tabs::Message::KeyPress(key))
                .map(Msg::Tabs),
            Msg::Tabs(inner) => self.tabs.update(inner).map(Msg::Tabs),
            Msg::ToggleButtons => {
                self.hide_buttons = !self.hide_buttons;
                let selected = self.tabs.selected();
                self.tabs = build_tabs(&self.theme, self.hide_buttons);
                self.tabs.select(selected);
                Command::none()
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let root = apply_theme(RenderRoot::new(frame.area()), &self.theme);
        let area = root.area();

        // The bar is deliberately narrower than its titles so it scrolls.
        let bar = Rect::new(area.x + 1, area.y + 1, BAR_WIDTH.min(area.width), 2);
        self.tabs.view(frame, bar);

        let selected = &self.tabs.titles()[self.tabs.selected()];
        let body = Rect::new(area.x + 1, bar.bottom() + 1, area.width.saturating_sub(2), 1);
        frame.render_widget(
            Paragraph::new(Line::raw(format!("Page: {selected}"))),
            body,
        );
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Msg::Quit)
                }
                KeyCode::Char('s') => Some(Msg::ToggleButtons),
                _ => Some(Msg::Key(key)),
            },
            _ => None,
        })]
    }
}

#[vitrine::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    vitrine::run::<TabsDemo>(Theme::dark()).await?;
    Ok(())
}
