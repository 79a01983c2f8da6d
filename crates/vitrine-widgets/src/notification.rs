//! Overlay notification with positioning, variants, and auto-close.
//!
//! A notification is a popup painted over the demo content. `open` and
//! `close` set the visibility flag unconditionally, so repeated calls are
//! harmless. A non-zero duration arms a one-shot auto-close each time the
//! notification opens; a zero duration means it stays until closed.

use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Frame;
use vitrine_core::command::Command;
use vitrine_core::component::Component;
use vitrine_core::fragment::Fragment;
use vitrine_core::subscription::{subscribe, Subscription};
use vitrine_core::subscriptions::After;
use vitrine_core::theme::Theme;

/// Visual variant of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Neutral surface.
    #[default]
    Default,
    /// Accent-colored, for calls to action.
    Primary,
    /// Positive outcome.
    Success,
    /// Failure report.
    Error,
    /// Muted high-contrast surface.
    Contrast,
}

/// Where the notification is anchored within the host area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    TopStart,
    TopCenter,
    TopEnd,
    /// Centered both ways.
    Middle,
    BottomStart,
    #[default]
    BottomCenter,
    BottomEnd,
}

/// Messages for the notification component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show the notification.
    Open,
    /// Hide the notification.
    Close,
    /// Fired by the auto-close timer.
    AutoClose,
}

/// A popup overlay with caller-supplied fragment content.
///
/// # Example
///
/// ```rust,ignore
/// let notification = Notification::new(Fragment::text("Failed to generate report"))
///     .with_variant(Variant::Error)
///     .with_position(Position::Middle)
///     .with_duration(Duration::ZERO)
///     .opened(true);
/// ```
pub struct Notification {
    content: Fragment,
    variant: Variant,
    position: Position,
    duration: Duration,
    opened: bool,
    open_generation: u64,
    theme: Theme,
}

impl Notification {
    /// Create a closed notification with the given content.
    pub fn new(content: Fragment) -> Self {
        Self {
            content,
            variant: Variant::default(),
            position: Position::default(),
            duration: Duration::from_secs(5),
            opened: false,
            open_generation: 0,
            theme: Theme::default(),
        }
    }

    /// Set the visual variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the anchor position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the auto-close delay. [`Duration::ZERO`] disables auto-close;
    /// the notification then stays open until explicitly closed.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the theme the content and chrome are resolved against.
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.theme = theme.clone();
        self
    }

    /// Set the initial visibility.
    pub fn opened(mut self, opened: bool) -> Self {
        if opened {
            self.open();
        }
        self
    }

    /// Replace the notification content.
    pub fn set_content(&mut self, content: Fragment) {
        self.content = content;
    }

    /// Show the notification. Sets the flag unconditionally; opening an
    /// already-open notification changes nothing visible but re-arms the
    /// auto-close timer.
    pub fn open(&mut self) {
        self.opened = true;
        self.open_generation = self.open_generation.wrapping_add(1);
    }

    /// Hide the notification. Sets the flag unconditionally.
    pub fn close(&mut self) {
        self.opened = false;
    }

    /// Whether the notification is currently shown.
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    /// The visual variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The anchor position.
    pub fn position(&self) -> Position {
        self.position
    }

    fn popup_area(&self, host: Rect) -> Rect {
        // Content plus one cell of border on each side.
        let width = (self.content.width() + 2).min(host.width);
        let height = (self.content.height() + 2).min(host.height);

        let x = match self.position {
            Position::TopStart | Position::BottomStart => host.x,
            Position::TopCenter | Position::Middle | Position::BottomCenter => {
                host.x + (host.width - width) / 2
            }
            Position::TopEnd | Position::BottomEnd => host.x + host.width - width,
        };
        let y = match self.position {
            Position::TopStart | Position::TopCenter | Position::TopEnd => host.y,
            Position::Middle => host.y + (host.height - height) / 2,
            Position::BottomStart | Position::BottomCenter | Position::BottomEnd => {
                host.y + host.height - height
            }
        };
        Rect::new(x, y, width, height)
    }

    fn border_style(&self) -> ratatui::style::Style {
        let color = match self.variant {
            Variant::Default => self.theme.border,
            Variant::Primary => self.theme.accent,
            Variant::Success => self.theme.success,
            Variant::Error => self.theme.error,
            Variant::Contrast => self.theme.contrast,
        };
        ratatui::style::Style::default().fg(color)
    }
}

impl Component for Notification {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Open => {
                self.open();
                Command::none()
            }
            Message::Close | Message::AutoClose => {
                self.close();
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if !self.opened || area.width < 3 || area.height < 3 {
            return;
        }
        let popup = self.popup_area(area);
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);
        self.content.render(&self.theme, frame, inner);
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.opened && !self.duration.is_zero() {
            vec![subscribe(After::new(self.duration, self.open_generation))
                .map(|_| Message::AutoClose)]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::testing::render_component;

    fn error_notification() -> Notification {
        Notification::new(Fragment::text("Failed to generate report"))
            .with_variant(Variant::Error)
            .with_position(Position::Middle)
            .with_duration(Duration::ZERO)
    }

    #[test]
    fn open_and_close_are_unconditional() {
        let mut n = error_notification();
        n.open();
        n.open();
        assert!(n.is_opened());
        n.close();
        n.close();
        assert!(!n.is_opened());
        n.open();
        assert!(n.is_opened());
    }

    #[test]
    fn opened_builder_matches_open() {
        let n = error_notification().opened(true);
        assert!(n.is_opened());
    }

    #[test]
    fn closed_notification_renders_nothing() {
        let n = error_notification();
        let out = render_component(&n, 40, 10);
        assert!(!out.contains("Failed"));
    }

    #[test]
    fn open_notification_shows_content() {
        let n = error_notification().opened(true);
        let out = render_component(&n, 40, 10);
        assert!(out.contains("Failed to generate report"));
    }

    #[test]
    fn zero_duration_arms_no_auto_close() {
        let n = error_notification().opened(true);
        assert!(n.subscriptions().is_empty());
    }

    #[test]
    fn nonzero_duration_arms_auto_close_only_while_open() {
        let mut n = Notification::new(Fragment::text("Saved"))
            .with_duration(Duration::from_secs(5));
        assert!(n.subscriptions().is_empty());
        n.open();
        assert_eq!(n.subscriptions().len(), 1);
        n.close();
        assert!(n.subscriptions().is_empty());
    }

    #[test]
    fn reopening_changes_the_timer_identity() {
        let mut n = Notification::new(Fragment::text("Saved"))
            .with_duration(Duration::from_secs(5));
        n.open();
        let first = n.subscriptions().remove(0).id();
        n.close();
        n.open();
        let second = n.subscriptions().remove(0).id();
        assert_ne!(first, second);
    }

    #[test]
    fn auto_close_message_closes() {
        let mut n = error_notification().opened(true);
        n.update(Message::AutoClose);
        assert!(!n.is_opened());
    }

    #[test]
    fn middle_position_centers_popup() {
        let n = error_notification();
        let popup = n.popup_area(Rect::new(0, 0, 41, 11));
        // content 25 wide + 2 border = 27; centered in 41 leaves x = 7
        assert_eq!(popup.width, 27);
        assert_eq!(popup.x, 7);
        assert_eq!(popup.y, 4);
    }
}
