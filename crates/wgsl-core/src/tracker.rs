//! Provider-side view of a shared document.
//!
//! A [`SnapshotTracker`] subscribes to a [`SharedDocument`], keeps the latest snapshot and
//! re-publishes every change as an [`InvalidationEvent`] covering the whole new document.
//! Dropping the tracker removes its subscription from the document.

use crate::document::{Document, DocumentId, DocumentSnapshot, SharedDocument, SubscriptionId};
use crate::error::WgslError;
use crate::lock_recover;
use crate::provider::{InvalidationCallback, InvalidationEvent};
use std::sync::{Arc, Mutex, Weak};

struct TrackerState {
    current: DocumentSnapshot,
    listeners: Vec<InvalidationCallback>,
}

/// Latest snapshot of one document plus invalidation listeners.
///
/// Listeners run synchronously on the editing thread, after the tracker has switched to the new
/// snapshot. They may read the tracker but must not edit the same document, and a tracker must
/// not be dropped while its document is locked.
pub struct SnapshotTracker {
    document: DocumentId,
    source: Weak<Mutex<Document>>,
    subscription: SubscriptionId,
    state: Arc<Mutex<TrackerState>>,
}

impl SnapshotTracker {
    /// Start tracking `document`.
    ///
    /// Fails with [`WgslError::InvalidArgument`] when no document is given. The document
    /// subscription holds only a weak reference, so dropping the tracker stops notifications.
    pub fn attach(document: Option<&SharedDocument>) -> Result<Self, WgslError> {
        let document = document.ok_or(WgslError::InvalidArgument("document"))?;
        let mut guard = lock_recover(document);

        let state = Arc::new(Mutex::new(TrackerState {
            current: guard.snapshot(),
            listeners: Vec::new(),
        }));
        let weak: Weak<Mutex<TrackerState>> = Arc::downgrade(&state);
        let subscription = guard.subscribe(move |change| {
            if let Some(state) = weak.upgrade() {
                publish(&state, change.after.clone());
            }
        });

        Ok(Self {
            document: guard.id(),
            source: Arc::downgrade(document),
            subscription,
            state,
        })
    }

    /// Identifier of the tracked document.
    pub fn document_id(&self) -> DocumentId {
        self.document
    }

    /// The most recent snapshot seen.
    pub fn current(&self) -> DocumentSnapshot {
        lock_recover(&self.state).current.clone()
    }

    /// Register a listener fired after each document change.
    pub fn on_changed<F>(&self, callback: F)
    where
        F: FnMut(&InvalidationEvent) + Send + 'static,
    {
        lock_recover(&self.state).listeners.push(Box::new(callback));
    }
}

fn publish(state: &Mutex<TrackerState>, snapshot: DocumentSnapshot) {
    let mut listeners = {
        let mut guard = lock_recover(state);
        guard.current = snapshot.clone();
        std::mem::take(&mut guard.listeners)
    };

    let event = InvalidationEvent::whole_document(snapshot);
    tracing::trace!(
        version = event.snapshot.version(),
        listeners = listeners.len(),
        "publishing invalidation"
    );
    for listener in &mut listeners {
        listener(&event);
    }

    // Keep listeners registered while the old ones were running.
    let mut guard = lock_recover(state);
    listeners.append(&mut guard.listeners);
    guard.listeners = listeners;
}

impl Drop for SnapshotTracker {
    fn drop(&mut self) {
        if let Some(document) = self.source.upgrade() {
            lock_recover(&document).unsubscribe(self.subscription);
        }
    }
}

impl std::fmt::Debug for SnapshotTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = lock_recover(&self.state);
        f.debug_struct("SnapshotTracker")
            .field("document", &self.document)
            .field("version", &state.current.version())
            .field("listeners", &state.listeners.len())
            .finish()
    }
}
