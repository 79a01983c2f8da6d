//! Long-lived event sources, declared anew on every update cycle.
//!
//! A demo does not install listeners; it *declares* the subscriptions its
//! current state wants in [`Model::subscriptions`](crate::Model::subscriptions),
//! and the runtime reconciles that declaration against what is already
//! running. An open notification with an auto-close delay declares its
//! timer; the moment it reports itself closed, the declaration no longer
//! contains the timer and the runtime cancels it. The showcase needs
//! exactly three kinds of source: terminal events, repeating timers, and
//! one-shot delays (see [`subscriptions`](crate::subscriptions)).

use futures::stream::BoxStream;
use futures::StreamExt;
use std::any::TypeId;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// A declared event source: an identity plus the stream of messages it
/// yields once started.
///
/// The stream is not polled at declaration time. Declaring is cheap and
/// happens every cycle; only a subscription whose id was absent from the
/// previous cycle gets its stream driven.
pub struct Subscription<Msg: Send + 'static> {
    id: SubscriptionId,
    stream: BoxStream<'static, Msg>,
}

/// Identity a subscription is reconciled under.
///
/// Two declarations with equal ids are the same subscription: the running
/// one is kept and the new stream is discarded unpolled. Sources that must
/// restart on re-declaration (the one-shot auto-close of a reopened
/// notification) bake a changing discriminant into their id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    type_id: TypeId,
    discriminant: u64,
}

impl SubscriptionId {
    /// Id from a source type and a numeric discriminant.
    pub fn new<T: 'static>(discriminant: u64) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            discriminant,
        }
    }

    /// Id from a source type alone, for singleton sources like the
    /// terminal event stream.
    pub fn of<T: 'static>() -> Self {
        Self::new::<T>(0)
    }

    /// Id from a source type and a string label, for several timers of the
    /// same type living side by side.
    pub fn with_str<T: 'static>(label: &str) -> Self {
        let mut hasher = std::hash::DefaultHasher::new();
        label.hash(&mut hasher);
        Self::new::<T>(hasher.finish())
    }
}

/// A type that can be declared as a subscription.
///
/// [`stream`](SubscriptionSource::stream) runs at declaration time, every
/// cycle, and the result is discarded unpolled whenever the id is already
/// running. Building the stream must therefore be cheap and free of side
/// effects; defer timers, readers, and other resources to the first poll.
pub trait SubscriptionSource: Send + 'static {
    /// The message type this source emits.
    type Output: Send + 'static;

    /// The identity this source is reconciled under.
    fn id(&self) -> SubscriptionId;

    /// The messages.
    fn stream(self) -> BoxStream<'static, Self::Output>;
}

/// Declare a [`SubscriptionSource`] as a [`Subscription`].
pub fn subscribe<S: SubscriptionSource>(source: S) -> Subscription<S::Output> {
    Subscription {
        id: source.id(),
        stream: source.stream(),
    }
}

impl<Msg: Send + 'static> Subscription<Msg> {
    /// The identity used for reconciliation.
    pub fn id(&self) -> SubscriptionId {
        self.id.clone()
    }

    /// A subscription from a raw stream and an explicit id.
    pub fn from_stream(id: SubscriptionId, stream: BoxStream<'static, Msg>) -> Self {
        Subscription { id, stream }
    }

    /// Transform the message type, for routing a widget's subscription
    /// through a parent's message enum. The identity is unchanged.
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl FnMut(Msg) -> NewMsg + Send + 'static,
    ) -> Subscription<NewMsg> {
        Subscription {
            id: self.id,
            stream: self.stream.map(f).boxed(),
        }
    }
}

/// Reconciles declared subscriptions against running ones.
pub(crate) struct SubscriptionManager<Msg: Send + 'static> {
    running: HashMap<SubscriptionId, AbortHandle>,
    msg_tx: mpsc::UnboundedSender<Msg>,
}

impl<Msg: Send + 'static> SubscriptionManager<Msg> {
    pub fn new(msg_tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            running: HashMap::new(),
            msg_tx,
        }
    }

    /// Apply a new declaration: start ids not yet running, abort running
    /// ids no longer declared, leave the intersection untouched.
    pub fn reconcile(&mut self, declared: Vec<Subscription<Msg>>) {
        let declared: HashMap<SubscriptionId, Subscription<Msg>> = declared
            .into_iter()
            .map(|sub| (sub.id.clone(), sub))
            .collect();

        self.running.retain(|id, handle| {
            if declared.contains_key(id) {
                true
            } else {
                handle.abort();
                false
            }
        });

        for (id, sub) in declared {
            if !self.running.contains_key(&id) {
                self.running.insert(id, self.start(sub.stream));
            }
        }
    }

    fn start(&self, mut stream: BoxStream<'static, Msg>) -> AbortHandle {
        let tx = self.msg_tx.clone();
        let task = tokio::spawn(async move {
            while let Some(msg) = stream.next().await {
                if tx.send(msg).is_err() {
                    break;
                }
            }
        });
        task.abort_handle()
    }

    /// Abort everything running.
    pub fn shutdown(&mut self) {
        for (_, handle) in self.running.drain() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.running.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_sub(id: SubscriptionId) -> Subscription<i32> {
        Subscription::from_stream(id, futures::stream::pending().boxed())
    }

    #[test]
    fn ids_compare_by_type_and_discriminant() {
        assert_eq!(SubscriptionId::of::<String>(), SubscriptionId::of::<String>());
        assert_ne!(SubscriptionId::of::<String>(), SubscriptionId::of::<i32>());
        assert_ne!(
            SubscriptionId::new::<String>(1),
            SubscriptionId::new::<String>(2)
        );
    }

    #[test]
    fn string_labels_hash_into_ids() {
        let a = SubscriptionId::with_str::<String>("clock");
        let b = SubscriptionId::with_str::<String>("blink");
        assert_ne!(a, b);
        assert_eq!(a, SubscriptionId::with_str::<String>("clock"));
    }

    #[tokio::test]
    async fn reconcile_starts_newly_declared() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut manager = SubscriptionManager::new(tx);
        manager.reconcile(vec![pending_sub(SubscriptionId::of::<String>())]);
        assert_eq!(manager.active_count(), 1);
    }

    #[tokio::test]
    async fn reconcile_aborts_undeclared() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut manager = SubscriptionManager::new(tx);
        manager.reconcile(vec![pending_sub(SubscriptionId::of::<String>())]);
        manager.reconcile(vec![]);
        assert_eq!(manager.active_count(), 0);
    }

    #[tokio::test]
    async fn reconcile_keeps_redeclared_ids() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut manager = SubscriptionManager::new(tx);
        let id = SubscriptionId::of::<String>();
        manager.reconcile(vec![pending_sub(id.clone())]);
        manager.reconcile(vec![pending_sub(id)]);
        assert_eq!(manager.active_count(), 1);
    }

    #[tokio::test]
    async fn started_streams_forward_into_the_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut manager = SubscriptionManager::new(tx);
        let sub = Subscription::from_stream(
            SubscriptionId::of::<String>(),
            futures::stream::iter(vec![1, 2, 3]).boxed(),
        );
        manager.reconcile(vec![sub]);
        assert_eq!(rx.recv().await, Some(1));
        assert_eq!(rx.recv().await, Some(2));
        assert_eq!(rx.recv().await, Some(3));
    }

    #[tokio::test]
    async fn map_transforms_messages_and_keeps_identity() {
        let sub = Subscription::from_stream(
            SubscriptionId::of::<String>(),
            futures::stream::iter(vec![1, 2]).boxed(),
        );
        let mapped = sub.map(|n| n * 10);
        assert_eq!(mapped.id(), SubscriptionId::of::<String>());

        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut manager = SubscriptionManager::new(tx);
        manager.reconcile(vec![mapped]);
        assert_eq!(rx.recv().await, Some(10));
        assert_eq!(rx.recv().await, Some(20));
    }

    #[tokio::test]
    async fn shutdown_aborts_everything() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut manager = SubscriptionManager::new(tx);
        manager.reconcile(vec![
            pending_sub(SubscriptionId::new::<String>(1)),
            pending_sub(SubscriptionId::new::<String>(2)),
        ]);
        assert_eq!(manager.active_count(), 2);
        manager.shutdown();
        assert_eq!(manager.active_count(), 0);
    }
}
