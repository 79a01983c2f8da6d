//! Steppable time-of-day field.
//!
//! An inline field showing a labeled `HH:MM` or `HH:MM:SS` value. Up and
//! Down step the value by the configured step; seconds are displayed
//! whenever the step is finer than a minute. Stepping wraps around
//! midnight in both directions.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use vitrine_core::command::Command;
use vitrine_core::component::Component;
use vitrine_core::theme::Theme;

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// A clock time without a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

/// Error parsing a [`TimeOfDay`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeError {
    input: String,
}

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time of day: {:?}", self.input)
    }
}

impl std::error::Error for ParseTimeError {}

impl TimeOfDay {
    /// Construct from components. Returns `None` if any field is out of
    /// range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Self {
                hour,
                minute,
                second,
            })
        } else {
            None
        }
    }

    /// Seconds since midnight.
    pub fn total_seconds(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    /// Construct from seconds since midnight, wrapping past a full day.
    pub fn from_seconds(seconds: u32) -> Self {
        let s = seconds % SECONDS_PER_DAY;
        Self {
            hour: (s / 3600) as u8,
            minute: (s / 60 % 60) as u8,
            second: (s % 60) as u8,
        }
    }

    /// Format as `HH:MM` or `HH:MM:SS`.
    pub fn display(&self, show_seconds: bool) -> String {
        if show_seconds {
            format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
        } else {
            format!("{:02}:{:02}", self.hour, self.minute)
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    /// Accepts `HH:MM` and `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError {
            input: s.to_string(),
        };
        let mut parts = s.split(':');
        let hour: u8 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let minute: u8 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let second: u8 = match parts.next() {
            Some(sec) => sec.parse().map_err(|_| err())?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(err());
        }
        TimeOfDay::new(hour, minute, second).ok_or_else(err)
    }
}

/// Messages for the time picker component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the time picker.
    KeyPress(KeyEvent),
    /// Emitted when the value changes.
    Changed(TimeOfDay),
}

/// Visual style configuration for the [`TimePicker`] component.
#[derive(Debug, Clone)]
pub struct TimePickerStyle {
    /// Style of the field label.
    pub label: Style,
    /// Style of the value when idle.
    pub value: Style,
    /// Style of the value when the picker has focus.
    pub focused: Style,
}

impl Default for TimePickerStyle {
    fn default() -> Self {
        Self {
            label: Style::default().fg(Color::DarkGray),
            value: Style::default().fg(Color::White),
            focused: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl TimePickerStyle {
    /// Derive the time picker style from a theme.
    pub fn themed(theme: &Theme) -> Self {
        Self {
            label: Style::default().fg(theme.secondary_text),
            value: Style::default().fg(theme.text),
            focused: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// A labeled time field stepped with Up and Down.
pub struct TimePicker {
    label: String,
    value: Option<TimeOfDay>,
    step: Duration,
    focus: bool,
    style: TimePickerStyle,
}

impl TimePicker {
    /// Create an empty time picker with the given label and a one-hour step.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            step: Duration::from_secs(3600),
            focus: false,
            style: TimePickerStyle::default(),
        }
    }

    /// Set the current value.
    pub fn with_value(mut self, value: TimeOfDay) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the step applied by Up and Down. A step under one minute makes
    /// the field display seconds.
    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    /// Set the visual style for this time picker.
    pub fn with_style(mut self, style: TimePickerStyle) -> Self {
        self.style = style;
        self
    }

    /// The field label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The current value, if set.
    pub fn value(&self) -> Option<TimeOfDay> {
        self.value
    }

    /// Set the current value.
    pub fn set_value(&mut self, value: Option<TimeOfDay>) {
        self.value = value;
    }

    /// Whether the displayed value includes seconds.
    pub fn shows_seconds(&self) -> bool {
        self.step < Duration::from_secs(60)
    }

    /// Give this time picker keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus from this time picker.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    fn step_by(&mut self, forward: bool) -> TimeOfDay {
        let step = (self.step.as_secs() as u32).max(1) % SECONDS_PER_DAY;
        let current = self.value.map(|v| v.total_seconds()).unwrap_or(0);
        let next = if forward {
            current + step
        } else {
            current + SECONDS_PER_DAY - step
        };
        let value = TimeOfDay::from_seconds(next);
        self.value = Some(value);
        value
    }
}

impl Component for TimePicker {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    Command::message(Message::Changed(self.step_by(true)))
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    Command::message(Message::Changed(self.step_by(false)))
                }
                _ => Command::none(),
            },
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let value_style = if self.focus {
            self.style.focused
        } else {
            self.style.value
        };
        let value = match self.value {
            Some(v) => v.display(self.shows_seconds()),
            None => "--:--".to_string(),
        };
        let line = Line::from(vec![
            Span::styled(self.label.clone(), self.style.label),
            Span::raw(" "),
            Span::styled(value, value_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use vitrine_core::testing::render_component;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn parses_with_and_without_seconds() {
        assert_eq!(
            "15:45:08".parse::<TimeOfDay>(),
            Ok(TimeOfDay::new(15, 45, 8).unwrap())
        );
        assert_eq!(
            "09:30".parse::<TimeOfDay>(),
            Ok(TimeOfDay::new(9, 30, 0).unwrap())
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("25:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
        assert!("12".parse::<TimeOfDay>().is_err());
        assert!("12:00:00:00".parse::<TimeOfDay>().is_err());
        assert!("noon".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn seconds_shown_iff_step_is_subminute() {
        let coarse = TimePicker::new("Alarm").with_step(Duration::from_secs(900));
        let fine = TimePicker::new("Alarm").with_step(Duration::from_secs(1));
        assert!(!coarse.shows_seconds());
        assert!(fine.shows_seconds());
    }

    #[test]
    fn up_steps_forward_and_wraps_at_midnight() {
        let mut picker = TimePicker::new("Message received")
            .with_value("23:59:59".parse().unwrap())
            .with_step(Duration::from_secs(1));
        picker.focus();
        let cmd = picker.update(Message::KeyPress(key(KeyCode::Up)));
        assert!(matches!(
            cmd.into_message(),
            Some(Message::Changed(v)) if v == TimeOfDay::new(0, 0, 0).unwrap()
        ));
    }

    #[test]
    fn down_steps_backward_and_wraps_at_midnight() {
        let mut picker = TimePicker::new("Message received")
            .with_value("00:00:00".parse().unwrap())
            .with_step(Duration::from_secs(1));
        picker.focus();
        picker.update(Message::KeyPress(key(KeyCode::Down)));
        assert_eq!(picker.value(), TimeOfDay::new(23, 59, 59));
    }

    #[test]
    fn renders_label_and_seconds_value() {
        let picker = TimePicker::new("Message received")
            .with_value("15:45:08".parse().unwrap())
            .with_step(Duration::from_secs(1));
        let out = render_component(&picker, 40, 1);
        assert!(out.contains("Message received"));
        assert!(out.contains("15:45:08"));
    }

    #[test]
    fn unset_value_renders_placeholder() {
        let picker = TimePicker::new("Message received");
        let out = render_component(&picker, 40, 1);
        assert!(out.contains("--:--"));
    }
}
