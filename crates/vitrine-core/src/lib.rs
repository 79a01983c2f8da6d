//! Core runtime for the **vitrine** component showcase.
//!
//! `vitrine-core` provides the traits, types, and runtime that power every
//! showcase demo.  The design follows the [Elm Architecture]: a demo is
//! expressed as a pure **init -> update -> view** cycle, with side effects
//! pushed to the edges through [`Command`]s and [`Subscription`]s.  On top of
//! that loop sit the two pieces every demo shares: the theming bootstrap
//! ([`theme`]) and the fragment tree builder ([`fragment`]).
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level demo trait (init / update / view) |
//! | [`Component`] | Reusable widget that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Describes a side effect to be executed by the runtime |
//! | [`Subscription`] | Long-lived event source (terminal events, timers) |
//! | [`Theme`] | Named palette applied explicitly to each demo's render root |
//! | [`Fragment`] | Plain-data description of a UI fragment |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] without a terminal |
//!
//! # The cycle
//!
//! 1. **init** -- [`Model::init`] receives explicit flags (a [`Theme`], at
//!    minimum, for themed demos) and may return a [`Command`] to kick off
//!    early work such as a record fetch.
//! 2. **view** -- The runtime calls [`Model::view`] to render the current
//!    state to a [`ratatui::Frame`].
//! 3. **event** -- External events arrive via [`Subscription`]s and are
//!    mapped into the model's `Message` type.
//! 4. **update** -- [`Model::update`] mutates state and optionally returns a
//!    [`Command`].
//! 5. **repeat** -- Steps 2-4 repeat until the program exits.  Every update
//!    is followed by a synchronous re-render; that ordering is the observer
//!    contract the stateful demos rely on.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod fragment;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;
pub mod theme;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use fragment::Fragment;
pub use model::Model;
pub use runtime::{log_to_file, OutputTarget, Program, ProgramError, ProgramHandle, ProgramOptions};
pub use subscription::{subscribe, Subscription, SubscriptionId, SubscriptionSource};
pub use subscriptions::{terminal_events, After, Every};
pub use theme::{apply_theme, RenderRoot, Role, Theme};

/// Run a demo with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
