//! # Live Subscriptions
//!
//! A subscription is a cancellable handle on a filtered view of a collection. Every delivery is a
//! [`Snapshot`]: the full set of matching documents after the change, plus the changes that
//! produced it. The first snapshot lists every matching document as `Added`.
//!
//! Views are written against `Snapshot` values, not against the actor, so they can be driven by
//! a [`SnapshotFeed`] in tests.

use tokio::sync::mpsc;

/// Kind of a single document change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
    Removed,
}

/// One document change, carrying the document state after the change
/// (or the last state, for `Removed`).
#[derive(Debug, Clone)]
pub struct Change<T> {
    pub kind: ChangeKind,
    pub document: T,
}

impl<T> Change<T> {
    pub fn new(kind: ChangeKind, document: T) -> Self {
        Self { kind, document }
    }
}

/// Current matching documents plus the changes since the previous delivery.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub documents: Vec<T>,
    pub changes: Vec<Change<T>>,
}

impl<T> Snapshot<T> {
    /// Documents reported as `Modified` in this delivery.
    pub fn modified(&self) -> impl Iterator<Item = &T> {
        self.changes
            .iter()
            .filter(|change| change.kind == ChangeKind::Modified)
            .map(|change| &change.document)
    }
}

/// Receiving half of a live subscription.
///
/// Dropping the handle (or calling [`Subscription::unsubscribe`]) releases it; the collection
/// prunes closed subscribers before its next delivery.
#[derive(Debug)]
pub struct Subscription<T> {
    receiver: mpsc::UnboundedReceiver<Snapshot<T>>,
}

impl<T> Subscription<T> {
    /// Create a detached subscription and the feed that drives it.
    pub fn channel() -> (SnapshotFeed<T>, Self) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (SnapshotFeed { sender }, Self { receiver })
    }

    /// Wait for the next snapshot. `None` once the collection has shut down.
    pub async fn next(&mut self) -> Option<Snapshot<T>> {
        self.receiver.recv().await
    }

    /// Snapshot already delivered, if any, without waiting.
    pub fn try_next(&mut self) -> Option<Snapshot<T>> {
        self.receiver.try_recv().ok()
    }

    /// Release the subscription.
    pub fn unsubscribe(mut self) {
        self.receiver.close();
    }
}

/// Sending half of a subscription, held by the collection actor (or a test).
#[derive(Debug, Clone)]
pub struct SnapshotFeed<T> {
    sender: mpsc::UnboundedSender<Snapshot<T>>,
}

impl<T> SnapshotFeed<T> {
    /// Deliver a snapshot. Returns `false` once the subscriber is gone.
    pub fn push(&self, snapshot: Snapshot<T>) -> bool {
        self.sender.send(snapshot).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
