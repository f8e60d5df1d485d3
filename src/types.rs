//! Core types for the history manager.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter backing `SnapshotId::next`. Starts at 1 so 0 never names a snapshot.
static NEXT_SNAPSHOT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a snapshot.
///
/// Ids are assigned at construction and increase monotonically within a
/// process, so they also order snapshots by creation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SnapshotId(pub u64);

impl SnapshotId {
    /// Allocate the next id.
    pub fn next() -> Self {
        SnapshotId(NEXT_SNAPSHOT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Note an id that came from outside this process (e.g. deserialized),
    /// so `next` never hands it out again.
    pub(crate) fn observe(id: SnapshotId) {
        NEXT_SNAPSHOT_ID.fetch_max(id.0.saturating_add(1), Ordering::Relaxed);
    }
}

impl fmt::Debug for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SnapshotId({})", self.0)
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Microseconds since Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Current time. A clock set before the epoch reads as zero.
    pub fn now() -> Self {
        let micros = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as i64)
            .unwrap_or(0);
        Timestamp(micros)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-05-01T12:00:00.250Z`.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::<Utc>::from_timestamp_micros(self.0) {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}us", self.0),
        }
    }
}

/// Where the cursor sits relative to the recorded entries.
///
/// A history with a single entry reports `AtNewest`: that is where `record`
/// leaves the cursor, and neither undo nor redo is possible from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Empty,
    AtOldest,
    Middle,
    AtNewest,
}

impl Position {
    /// Classify a cursor over `len` entries.
    pub fn of(cursor: Option<usize>, len: usize) -> Self {
        match cursor {
            None => Position::Empty,
            Some(c) if c + 1 >= len => Position::AtNewest,
            Some(0) => Position::AtOldest,
            Some(_) => Position::Middle,
        }
    }
}
