//! Immutable, timestamped captures of owner state.
//!
//! A snapshot owns its payload outright. Once constructed nothing can reach
//! the payload mutably, so later changes to the owner's live state never
//! leak into recorded history.

mod label;

pub use label::SnapshotLabel;

use crate::types::{SnapshotId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::Arc;

/// A point-in-time capture of state.
///
/// Cloning a snapshot is cheap and yields the same snapshot (same id, shared
/// payload). Equality is identity: two snapshots with equal payloads taken
/// separately are different snapshots.
#[derive(Serialize)]
pub struct Snapshot<T> {
    id: SnapshotId,
    created_at: Timestamp,
    payload: Arc<T>,
}

impl<T> Snapshot<T> {
    /// Wrap an owned payload. The caller gives up the value, so it is
    /// already isolated from any live state.
    pub fn new(payload: T) -> Self {
        Self {
            id: SnapshotId::next(),
            created_at: Timestamp::now(),
            payload: Arc::new(payload),
        }
    }

    /// Deep-copy a borrowed live value into a new snapshot.
    pub fn capture(live: &T) -> Self
    where
        T: Clone,
    {
        Self::new(live.clone())
    }

    pub fn id(&self) -> SnapshotId {
        self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Read-only view of the captured state.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Take the payload out, cloning only if other handles still share it.
    pub fn into_payload(self) -> T
    where
        T: Clone,
    {
        Arc::try_unwrap(self.payload).unwrap_or_else(|shared| (*shared).clone())
    }

    /// Diagnostic label previewing at most `max_chars` characters of the payload.
    pub fn label(&self, max_chars: usize) -> SnapshotLabel
    where
        T: fmt::Display,
    {
        SnapshotLabel::new(self.id, self.created_at, &self.payload.to_string(), max_chars)
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            created_at: self.created_at,
            payload: Arc::clone(&self.payload),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Snapshot<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Stored<P> {
            id: SnapshotId,
            created_at: Timestamp,
            payload: P,
        }

        let stored = Stored::<T>::deserialize(deserializer)?;
        // Fresh snapshots must not reuse an imported id.
        SnapshotId::observe(stored.id);

        Ok(Self {
            id: stored.id,
            created_at: stored.created_at,
            payload: Arc::new(stored.payload),
        })
    }
}

impl<T> PartialEq for Snapshot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Snapshot<T> {}

impl<T: fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("payload", &self.payload)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_is_isolated_from_live_state() {
        let mut live = String::from("draft");
        let snapshot = Snapshot::capture(&live);

        live.push_str(" edited");

        assert_eq!(snapshot.payload(), "draft");
        assert_eq!(live, "draft edited");
    }

    #[test]
    fn test_equal_payloads_are_distinct_snapshots() {
        let a = Snapshot::new("same".to_string());
        let b = Snapshot::new("same".to_string());
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.payload(), b.payload());
    }

    #[test]
    fn test_clone_keeps_identity() {
        let a = Snapshot::new(vec![1, 2, 3]);
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a.created_at(), b.created_at());
    }

    #[test]
    fn test_into_payload_with_shared_handle() {
        let a = Snapshot::new(vec![1, 2, 3]);
        let b = a.clone();
        assert_eq!(a.into_payload(), vec![1, 2, 3]);
        assert_eq!(b.into_payload(), vec![1, 2, 3]);
    }

    #[test]
    fn test_serde_roundtrip_keeps_id() {
        let snapshot = Snapshot::new("Hello".to_string());
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: Snapshot<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
        assert_eq!(parsed.payload(), "Hello");
    }

    #[test]
    fn test_deserialized_id_is_never_reissued() {
        let ahead = SnapshotId::next().0 + 1000;
        let json = format!(r#"{{"id":{},"created_at":0,"payload":"imported"}}"#, ahead);

        let imported: Snapshot<String> = serde_json::from_str(&json).unwrap();
        let fresh = Snapshot::new("fresh".to_string());

        assert_eq!(imported.id(), SnapshotId(ahead));
        assert_ne!(imported, fresh);
        assert!(fresh.id() > imported.id());
    }
}
