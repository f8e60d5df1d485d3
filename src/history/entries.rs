//! Read-only iteration over recorded snapshots.

use crate::snapshot::Snapshot;
use std::collections::vec_deque;
use std::fmt;
use std::iter::{Enumerate, FusedIterator};

/// One item of a history listing.
pub struct HistoryEntry<'a, T> {
    pub index: usize,
    pub snapshot: &'a Snapshot<T>,
    /// True for the entry under the cursor.
    pub is_current: bool,
}

impl<T> Clone for HistoryEntry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for HistoryEntry<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for HistoryEntry<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryEntry")
            .field("index", &self.index)
            .field("snapshot", self.snapshot)
            .field("is_current", &self.is_current)
            .finish()
    }
}

/// Iterator over a history's entries, oldest first.
///
/// Borrowing the history keeps it frozen while iterating. Clone the iterator
/// (or call `History::enumerate` again) to restart.
pub struct Entries<'a, T> {
    inner: Enumerate<vec_deque::Iter<'a, Snapshot<T>>>,
    cursor: Option<usize>,
}

impl<'a, T> Entries<'a, T> {
    pub(crate) fn new(iter: vec_deque::Iter<'a, Snapshot<T>>, cursor: Option<usize>) -> Self {
        Self {
            inner: iter.enumerate(),
            cursor,
        }
    }

    fn entry(&self, (index, snapshot): (usize, &'a Snapshot<T>)) -> HistoryEntry<'a, T> {
        HistoryEntry {
            index,
            snapshot,
            is_current: self.cursor == Some(index),
        }
    }
}

impl<T> Clone for Entries<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            cursor: self.cursor,
        }
    }
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = HistoryEntry<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        Some(self.entry(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Entries<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        Some(self.entry(item))
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<T> FusedIterator for Entries<'_, T> {}
