use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level trait implemented by every showcase demo.
///
/// The runtime drives a continuous **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`] for early side effects (e.g. fetching records on first
///    display).
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. External events arrive as messages through [`Subscription`]s.
/// 4. [`update`](Model::update) processes each message, mutates state, and
///    optionally returns a [`Command`] for further work.
/// 5. Steps 2--4 repeat until the program exits.
///
/// This cycle is the explicit observer contract behind every demo: a state
/// mutation in `update` is always followed by a synchronous re-render, so a
/// visibility flag flipped by `update` is reflected in the very next frame.
///
/// # Example
///
/// ```rust,ignore
/// use vitrine_core::{Model, Command};
/// use ratatui::Frame;
/// use ratatui::widgets::Paragraph;
///
/// struct Toggle {
///     shown: bool,
/// }
///
/// #[derive(Debug)]
/// enum Msg {
///     Open,
///     Close,
/// }
///
/// impl Model for Toggle {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_flags: ()) -> (Self, Command<Msg>) {
///         (Toggle { shown: true }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Open => self.shown = true,
///             Msg::Close => self.shown = false,
///         }
///         Command::none()
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         if self.shown {
///             frame.render_widget(Paragraph::new("shown"), frame.area());
///         }
///     }
/// }
/// ```
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    ///
    /// Every event that can affect the application state is represented as a
    /// variant of this type.  Messages arrive from [`Subscription`]s, from
    /// [`Command::message`], or from async work completed via
    /// [`Command::perform`].
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    ///
    /// Use `()` when no startup data is needed.  Demos that take explicit
    /// configuration -- a [`Theme`](crate::theme::Theme) above all -- define a
    /// flags type carrying it, so that nothing is smuggled in through shared
    /// globals.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    ///
    /// Called once when the program starts.  Return the initial model value
    /// and a [`Command`] for any work that should begin immediately (the
    /// list-box demo kicks off its record fetch here).  Use
    /// [`Command::none()`] if no startup side effects are needed.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    ///
    /// Pattern-match on the incoming message, update `self` accordingly, and
    /// return a [`Command`] describing any side effects the runtime should
    /// perform.  After `update` returns, the runtime calls
    /// [`view`](Model::view) to re-render and
    /// [`subscriptions`](Model::subscriptions) to reconcile active
    /// subscriptions.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    ///
    /// This method should be a pure function of `&self` -- it reads the model
    /// state and draws widgets into the frame.  The runtime calls `view` after
    /// every update and on the initial render.
    fn view(&self, frame: &mut Frame);

    /// Declare active subscriptions.  Called after every update.
    ///
    /// Return a [`Vec`] of [`Subscription`]s that should be active given the
    /// current model state.  The runtime diffs the returned list against the
    /// previously active set: new subscriptions are started and removed ones
    /// are cancelled.
    ///
    /// The default implementation returns an empty list (no subscriptions).
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
