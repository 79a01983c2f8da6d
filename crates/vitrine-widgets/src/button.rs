//! Focusable push button with a disabled state.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use vitrine_core::command::Command;
use vitrine_core::component::Component;
use vitrine_core::theme::Theme;

/// Messages for the button component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the button.
    KeyPress(KeyEvent),
    /// Emitted when the button is activated.
    Pressed,
}

/// Visual style configuration for the [`Button`] component.
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Style applied when the button is idle.
    pub normal: Style,
    /// Style applied when the button has keyboard focus.
    pub focused: Style,
    /// Style applied when the button is disabled.
    pub disabled: Style,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            normal: Style::default().fg(Color::Cyan),
            focused: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            disabled: Style::default().fg(Color::DarkGray),
        }
    }
}

impl ButtonStyle {
    /// Derive the button style from a theme.
    pub fn themed(theme: &Theme) -> Self {
        Self {
            normal: Style::default().fg(theme.accent),
            focused: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            disabled: Style::default().fg(theme.secondary_text),
        }
    }
}

/// A push button activated with Enter or Space while focused.
///
/// A disabled button keeps its label on screen but ignores activation --
/// the notification demo disables its trigger while the notification is
/// already open.
pub struct Button {
    label: String,
    disabled: bool,
    focus: bool,
    style: ButtonStyle,
}

impl Button {
    /// Create a button with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            focus: false,
            style: ButtonStyle::default(),
        }
    }

    /// Set the visual style for this button.
    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// The button label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Enable or disable the button.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether the button is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Give this button keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus from this button.
    pub fn blur(&mut self) {
        self.focus = false;
    }
}

impl Component for Button {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus && !self.disabled => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Command::message(Message::Pressed),
                _ => Command::none(),
            },
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = if self.disabled {
            self.style.disabled
        } else if self.focus {
            self.style.focused
        } else {
            self.style.normal
        };
        let text = format!("[ {} ]", self.label);
        frame.render_widget(Paragraph::new(Span::styled(text, style)), area);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn enter_presses_focused_button() {
        let mut button = Button::new("Show notification");
        button.focus();
        let cmd = button.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(matches!(cmd.into_message(), Some(Message::Pressed)));
    }

    #[test]
    fn space_presses_focused_button() {
        let mut button = Button::new("Button 1");
        button.focus();
        let cmd = button.update(Message::KeyPress(key(KeyCode::Char(' '))));
        assert!(matches!(cmd.into_message(), Some(Message::Pressed)));
    }

    #[test]
    fn unfocused_button_ignores_keys() {
        let mut button = Button::new("Button 1");
        let cmd = button.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(cmd.is_none());
    }

    #[test]
    fn disabled_button_ignores_activation() {
        let mut button = Button::new("Show notification");
        button.focus();
        button.set_disabled(true);
        let cmd = button.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(cmd.is_none());
    }

    #[test]
    fn renders_bracketed_label() {
        let button = Button::new("Button 2");
        let out = vitrine_core::testing::render_component(&button, 16, 1);
        assert!(out.contains("[ Button 2 ]"));
    }
}
