//! Thread-safe history wrapper.

use crate::config::HistoryConfig;
use crate::error::Result;
use crate::snapshot::Snapshot;
use crate::subscriptions::{
    HistoryEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId, SubscriptionManager,
};
use crate::types::Position;
use parking_lot::Mutex;
use std::fmt;

use super::dump::HistoryDump;
use super::manager::{History, RecordOutcome};

/// A `History` behind a mutex, with change notifications.
///
/// Every operation holds the lock for its whole duration, so entries and
/// cursor are always observed and updated together. Snapshots are returned
/// as owned handles sharing the stored payload.
///
/// Events are published while the lock is held, so subscribers see them in
/// the order the operations were applied.
pub struct SharedHistory<T> {
    inner: Mutex<History<T>>,
    subscriptions: SubscriptionManager,
}

impl<T> SharedHistory<T> {
    pub fn new() -> Self {
        Self::from_history(History::new())
    }

    pub fn with_config(config: HistoryConfig) -> Result<Self> {
        Ok(Self::from_history(History::with_config(config)?))
    }

    pub fn from_history(history: History<T>) -> Self {
        Self {
            inner: Mutex::new(history),
            subscriptions: SubscriptionManager::new(),
        }
    }

    pub fn into_inner(self) -> History<T> {
        self.inner.into_inner()
    }

    // --- Mutations ---

    pub fn record(&self, snapshot: Snapshot<T>) -> RecordOutcome {
        let mut history = self.inner.lock();
        let outcome = history.record(snapshot);
        self.subscriptions.broadcast(&HistoryEvent::Recorded {
            id: outcome.id,
            index: outcome.index,
            discarded: outcome.discarded,
            evicted: outcome.evicted,
        });
        outcome
    }

    pub fn record_payload(&self, payload: T) -> RecordOutcome {
        self.record(Snapshot::new(payload))
    }

    pub fn undo(&self) -> Option<Snapshot<T>> {
        let mut history = self.inner.lock();
        let snapshot = history.undo()?.clone();
        if let Some(index) = history.cursor() {
            self.subscriptions.broadcast(&HistoryEvent::Undone {
                id: snapshot.id(),
                index,
            });
        }
        Some(snapshot)
    }

    pub fn redo(&self) -> Option<Snapshot<T>> {
        let mut history = self.inner.lock();
        let snapshot = history.redo()?.clone();
        if let Some(index) = history.cursor() {
            self.subscriptions.broadcast(&HistoryEvent::Redone {
                id: snapshot.id(),
                index,
            });
        }
        Some(snapshot)
    }

    pub fn seek(&self, index: usize) -> Option<Snapshot<T>> {
        let mut history = self.inner.lock();
        let snapshot = history.seek(index)?.clone();
        self.subscriptions.broadcast(&HistoryEvent::Moved {
            id: snapshot.id(),
            index,
        });
        Some(snapshot)
    }

    pub fn clear(&self) -> usize {
        let mut history = self.inner.lock();
        let removed = history.clear();
        self.subscriptions
            .broadcast(&HistoryEvent::Cleared { removed });
        removed
    }

    pub fn set_capacity(&self, capacity: Option<usize>) -> Result<usize> {
        let mut history = self.inner.lock();
        let evicted = history.set_capacity(capacity)?;
        if evicted > 0 {
            self.subscriptions.broadcast(&HistoryEvent::Evicted {
                count: evicted,
                cursor: history.cursor(),
            });
        }
        Ok(evicted)
    }

    // --- Queries ---

    pub fn can_undo(&self) -> bool {
        self.inner.lock().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.inner.lock().can_redo()
    }

    pub fn current(&self) -> Option<Snapshot<T>> {
        self.inner.lock().current().cloned()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.inner.lock().cursor()
    }

    pub fn position(&self) -> Position {
        self.inner.lock().position()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Consistent listing of `(index, snapshot, is_current)` taken under one lock.
    pub fn entries(&self) -> Vec<(usize, Snapshot<T>, bool)> {
        self.inner
            .lock()
            .enumerate()
            .map(|e| (e.index, e.snapshot.clone(), e.is_current))
            .collect()
    }

    pub fn dump(&self) -> HistoryDump
    where
        T: fmt::Display,
    {
        self.inner.lock().dump()
    }

    /// Run `f` against the history with the lock held.
    pub fn with<R>(&self, f: impl FnOnce(&History<T>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Run `f` against the history mutably with the lock held.
    ///
    /// Changes made here are not published to subscribers.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut History<T>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    // --- Subscriptions ---

    pub fn subscribe(&self, config: SubscriptionConfig) -> SubscriptionHandle {
        self.subscriptions.subscribe(config)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscriptions.unsubscribe(id)
    }
}

impl<T> Default for SharedHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedHistory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedHistory")
            .field("inner", &*self.inner.lock())
            .field("subscribers", &self.subscriptions.subscriber_count())
            .finish()
    }
}
