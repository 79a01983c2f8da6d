use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::time::{Duration, Instant};

/// A repeating timer that fires at a fixed interval.
///
/// Each tick emits the current [`Instant`]. The `id` field allows multiple
/// `Every` subscriptions to coexist with distinct identities.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use vitrine_core::subscriptions::Every;
/// use vitrine_core::subscription::subscribe;
///
/// let sub = subscribe(Every::new(Duration::from_secs(1), "clock"))
///     .map(|instant| Msg::Tick(instant));
/// ```
pub struct Every {
    /// The interval between ticks.
    pub interval: Duration,
    /// A string identifier used to distinguish this timer from others.
    pub id: &'static str,
}

impl Every {
    /// Create a new repeating timer with the given interval and identifier.
    pub fn new(interval: Duration, id: &'static str) -> Self {
        Self { interval, id }
    }
}

impl SubscriptionSource for Every {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::with_str::<Self>(self.id)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        // The interval is created on first poll; stream() runs at declaration
        // time, possibly outside a runtime, and the result may be discarded.
        let interval = self.interval;
        let stream = futures::stream::once(async move {
            tokio_stream::wrappers::IntervalStream::new(tokio::time::interval(interval))
                .map(|tick| tick.into_std())
        })
        .flatten();
        Box::pin(stream)
    }
}

/// A one-shot delay that fires once after the specified duration.
///
/// Emits a single [`Instant`] when the delay elapses, then the subscription
/// stream completes.
///
/// The identity combines the duration with a caller-supplied generation.
/// A one-shot whose stream has completed stays in the runtime's active set
/// as long as it keeps being declared, so a repeated one-shot (the
/// auto-close of a notification that was closed and reopened) must bump the
/// generation to be started afresh.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use vitrine_core::subscriptions::After;
/// use vitrine_core::subscription::subscribe;
///
/// let sub = subscribe(After::new(Duration::from_millis(500), self.open_generation))
///     .map(|_| Msg::AutoClose);
/// ```
pub struct After {
    /// How long to wait before firing.
    pub duration: Duration,
    /// Distinguishes successive armings of the same delay.
    pub generation: u64,
}

impl After {
    /// Create a new one-shot delay for the given duration and generation.
    pub fn new(duration: Duration, generation: u64) -> Self {
        Self {
            duration,
            generation,
        }
    }
}

impl SubscriptionSource for After {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        let nanos = self.duration.as_nanos() as u64;
        SubscriptionId::new::<Self>(nanos ^ self.generation.rotate_left(32))
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        let stream = futures::stream::once(async move {
            tokio::time::sleep(self.duration).await;
            Instant::now()
        });
        Box::pin(stream)
    }
}
