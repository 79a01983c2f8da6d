//! Built-in subscription sources.
//!
//! - **Terminal events** ([`terminal_events`]) -- key presses and resizes
//!   from the terminal, pre-filtered to what the showcase consumes.
//! - **Timers** ([`Every`], [`After`]) -- repeating and one-shot timer
//!   subscriptions.  A notification's auto-close is an [`After`] timer keyed
//!   by the notification's open generation.

mod terminal;
mod timer;

pub use terminal::*;
pub use timer::*;
