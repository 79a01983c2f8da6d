use crate::event::TerminalEvent;
use crate::subscription::{Subscription, SubscriptionId};
use crossterm::event::EventStream;
use futures::future::ready;
use futures::StreamExt;

/// Identity marker for the terminal event subscription. There is one
/// terminal; every demo's declaration reconciles to the same id.
struct TerminalEvents;

/// Declare the terminal as an event source, mapping each event through a
/// demo-provided function.
///
/// The `map` closure decides which events become messages: return
/// `Some(msg)` to forward, `None` to discard. Events the showcase never
/// consumes (mouse, focus, paste) are already filtered out before the
/// closure runs; see [`TerminalEvent`].
///
/// # Example
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| match event {
///         TerminalEvent::Key(key) => Some(Msg::KeyPress(key)),
///         _ => None,
///     })]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    // The EventStream is created on first poll, not at declaration.
    // Declarations happen every update cycle and are usually discarded;
    // eager creation would touch crossterm's global InternalEventReader
    // each time and interfere with the stream that is actually running.
    // EventStream::new() falls back to /dev/tty when stdin is not a TTY,
    // so demos keep receiving keys even with stdin redirected.
    let stream = futures::stream::once(async { EventStream::new() })
        .flatten()
        .filter_map(move |result| {
            ready(match result {
                Ok(event) => TerminalEvent::from_crossterm(event).and_then(&map),
                Err(_) => None,
            })
        })
        .boxed();
    Subscription::from_stream(SubscriptionId::of::<TerminalEvents>(), stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_declaration_shares_one_identity() {
        let a = terminal_events::<u8>(|_| None);
        let b = terminal_events::<u8>(|_| Some(0));
        assert_eq!(a.id(), b.id());
    }
}
