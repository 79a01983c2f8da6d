use crossterm::event::{Event, KeyEvent, KeyEventKind};

/// The terminal events the showcase consumes.
///
/// Delivered through the
/// [`terminal_events`](crate::subscriptions::terminal_events) subscription.
/// The demos are keyboard-driven, so only key presses and resizes survive
/// the conversion from raw [`crossterm::event::Event`]s; mouse, focus, and
/// paste events are dropped at the source, and key release/repeat events
/// (reported on some terminals) are dropped so a press is handled once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key press.
    Key(KeyEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
}

impl TerminalEvent {
    /// Convert a raw crossterm event, returning `None` for events the
    /// showcase has no use for.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Some(TerminalEvent::Key(key))
            }
            Event::Resize(cols, rows) => Some(TerminalEvent::Resize(cols, rows)),
            _ => None,
        }
    }
}
