//! History manager implementation.

use crate::config::{validate_capacity, HistoryConfig};
use crate::error::{HistoryError, Result};
use crate::snapshot::Snapshot;
use crate::types::{Position, SnapshotId};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, trace};

use super::dump::{DumpEntry, HistoryDump};
use super::entries::Entries;

/// What a `record` call did to the history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordOutcome {
    /// Id of the recorded snapshot.
    pub id: SnapshotId,
    /// Index the snapshot landed at (the new cursor).
    pub index: usize,
    /// Redo-branch entries dropped by truncate-on-write.
    pub discarded: usize,
    /// Oldest entries dropped to stay within capacity.
    pub evicted: usize,
}

/// Ordered snapshots plus a cursor.
///
/// Invariants:
/// - `cursor` is `None` iff `entries` is empty, otherwise a valid index.
/// - Entries are never reordered; they are only appended, truncated from the
///   tail by `record`, or evicted from the head by the capacity policy.
pub struct History<T> {
    entries: VecDeque<Snapshot<T>>,
    cursor: Option<usize>,
    config: HistoryConfig,
}

impl<T> History<T> {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            config: HistoryConfig::default(),
        }
    }

    /// Create an empty history with the given config.
    pub fn with_config(config: HistoryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            entries: VecDeque::new(),
            cursor: None,
            config,
        })
    }

    /// Rebuild a history from entries and a cursor.
    ///
    /// The cursor must be `None` for no entries and a valid index otherwise.
    /// Entries beyond the configured capacity are evicted from the head.
    pub fn from_parts(
        entries: Vec<Snapshot<T>>,
        cursor: Option<usize>,
        config: HistoryConfig,
    ) -> Result<Self> {
        config.validate()?;

        let len = entries.len();
        let valid = match cursor {
            None => len == 0,
            Some(c) => c < len,
        };
        if !valid {
            return Err(HistoryError::CursorOutOfRange { cursor, len });
        }

        let mut history = Self {
            entries: entries.into(),
            cursor,
            config,
        };
        history.enforce_capacity();
        Ok(history)
    }

    /// Split into entries (oldest first) and cursor.
    pub fn into_parts(self) -> (Vec<Snapshot<T>>, Option<usize>) {
        (self.entries.into(), self.cursor)
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry, `None` when empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn position(&self) -> Position {
        Position::of(self.cursor, self.entries.len())
    }

    pub fn capacity(&self) -> Option<usize> {
        self.config.capacity
    }

    // --- Recording ---

    /// Record a snapshot as the new current entry.
    ///
    /// Everything after the cursor is discarded first, then the snapshot is
    /// appended and becomes current. Never fails.
    pub fn record(&mut self, snapshot: Snapshot<T>) -> RecordOutcome {
        let id = snapshot.id();
        let keep = self.cursor.map_or(0, |c| c + 1);
        let discarded = self.entries.len() - keep;

        self.entries.truncate(keep);
        self.entries.push_back(snapshot);
        self.cursor = Some(self.entries.len() - 1);

        let evicted = self.enforce_capacity();
        let index = self.entries.len() - 1;

        debug!(
            snapshot = %id,
            index,
            discarded,
            evicted,
            "Recorded snapshot"
        );

        RecordOutcome {
            id,
            index,
            discarded,
            evicted,
        }
    }

    /// Wrap `payload` in a new snapshot and record it.
    pub fn record_payload(&mut self, payload: T) -> RecordOutcome {
        self.record(Snapshot::new(payload))
    }

    // --- Navigation ---

    /// True iff there is an entry before the cursor.
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    /// True iff there is an entry after the cursor.
    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
    }

    /// Step back one entry and return it.
    ///
    /// Returns `None` without touching the cursor when already at the oldest
    /// entry or empty.
    pub fn undo(&mut self) -> Option<&Snapshot<T>> {
        let target = match self.cursor {
            Some(c) if c > 0 => c - 1,
            _ => {
                trace!(cursor = ?self.cursor, "Nothing to undo");
                return None;
            }
        };

        self.cursor = Some(target);
        trace!(cursor = target, "Undo");
        self.entries.get(target)
    }

    /// Step forward one entry and return it.
    ///
    /// Returns `None` without touching the cursor when already at the newest
    /// entry or empty.
    pub fn redo(&mut self) -> Option<&Snapshot<T>> {
        let target = match self.cursor {
            Some(c) if c + 1 < self.entries.len() => c + 1,
            _ => {
                trace!(cursor = ?self.cursor, "Nothing to redo");
                return None;
            }
        };

        self.cursor = Some(target);
        trace!(cursor = target, "Redo");
        self.entries.get(target)
    }

    /// Move the cursor straight to `index` without truncating anything.
    ///
    /// Out-of-range indexes leave the history untouched and return `None`.
    pub fn seek(&mut self, index: usize) -> Option<&Snapshot<T>> {
        if index >= self.entries.len() {
            trace!(index, len = self.entries.len(), "Seek out of range");
            return None;
        }

        self.cursor = Some(index);
        trace!(cursor = index, "Seek");
        self.entries.get(index)
    }

    /// The entry under the cursor.
    pub fn current(&self) -> Option<&Snapshot<T>> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot<T>> {
        self.entries.get(index)
    }

    /// Iterate all entries oldest first, flagging the current one.
    pub fn enumerate(&self) -> Entries<'_, T> {
        Entries::new(self.entries.iter(), self.cursor)
    }

    // --- Maintenance ---

    /// Drop every entry. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.cursor = None;
        debug!(removed, "Cleared history");
        removed
    }

    /// Change the capacity bound. Returns how many entries were evicted.
    ///
    /// Only entries before the cursor are evicted here. If the redo branch
    /// alone keeps the history over capacity, the excess stays until the
    /// next `record` truncates it.
    pub fn set_capacity(&mut self, capacity: Option<usize>) -> Result<usize> {
        validate_capacity(capacity)?;
        self.config.capacity = capacity;
        let evicted = self.enforce_capacity();
        debug!(?capacity, evicted, "Capacity changed");
        Ok(evicted)
    }

    /// Evict from the head while over capacity, never at or past the cursor.
    fn enforce_capacity(&mut self) -> usize {
        let (Some(capacity), Some(cursor)) = (self.config.capacity, self.cursor) else {
            return 0;
        };

        let excess = self.entries.len().saturating_sub(capacity);
        let evict = excess.min(cursor);
        if evict == 0 {
            return 0;
        }

        self.entries.drain(..evict);
        self.cursor = Some(cursor - evict);
        evict
    }

    // --- Diagnostics ---

    /// Listing of every entry with labels, for logs and debugging.
    pub fn dump(&self) -> HistoryDump
    where
        T: fmt::Display,
    {
        let width = self.config.label_width;
        HistoryDump {
            cursor: self.cursor,
            len: self.entries.len(),
            capacity: self.config.capacity,
            entries: self
                .enumerate()
                .map(|e| DumpEntry {
                    index: e.index,
                    id: e.snapshot.id(),
                    created_at: e.snapshot.created_at(),
                    label: e.snapshot.label(width),
                    is_current: e.is_current,
                })
                .collect(),
        }
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a History<T> {
    type Item = super::entries::HistoryEntry<'a, T>;
    type IntoIter = Entries<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.enumerate()
    }
}

impl<T: fmt::Debug> fmt::Debug for History<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("entries", &self.entries)
            .field("cursor", &self.cursor)
            .field("config", &self.config)
            .finish()
    }
}
