//! Subscription types for history change notifications.

use crate::types::SnapshotId;
use serde::{Deserialize, Serialize};

/// Configuration for a subscription.
#[derive(Clone, Debug)]
pub struct SubscriptionConfig {
    /// Max buffered events before dropping subscriber.
    /// Default: 256
    pub buffer_size: usize,

    /// Filter criteria.
    pub filter: SubscriptionFilter,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            buffer_size: 256,
            filter: SubscriptionFilter::all(),
        }
    }
}

/// Filter criteria for subscriptions.
#[derive(Clone, Debug, Default)]
pub struct SubscriptionFilter {
    /// Include `Recorded`, `Evicted` and `Cleared` events.
    pub include_records: bool,

    /// Include cursor moves (`Undone`, `Redone`, `Moved`).
    pub include_navigation: bool,
}

impl SubscriptionFilter {
    /// Only events that change the recorded entries.
    pub fn records() -> Self {
        Self {
            include_records: true,
            ..Default::default()
        }
    }

    /// Only cursor moves.
    pub fn navigation() -> Self {
        Self {
            include_navigation: true,
            ..Default::default()
        }
    }

    /// Subscribe to everything.
    pub fn all() -> Self {
        Self {
            include_records: true,
            include_navigation: true,
        }
    }

    pub(crate) fn matches(&self, event: &HistoryEvent) -> bool {
        match event {
            HistoryEvent::Recorded { .. }
            | HistoryEvent::Evicted { .. }
            | HistoryEvent::Cleared { .. } => self.include_records,
            HistoryEvent::Undone { .. }
            | HistoryEvent::Redone { .. }
            | HistoryEvent::Moved { .. } => self.include_navigation,
            HistoryEvent::Dropped { .. } => true,
        }
    }
}

/// Events emitted by subscriptions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HistoryEvent {
    /// A snapshot was recorded and is now current.
    Recorded {
        id: SnapshotId,
        index: usize,
        /// Redo entries discarded by the record.
        discarded: usize,
        /// Oldest entries evicted by the capacity bound.
        evicted: usize,
    },

    /// The cursor stepped back.
    Undone { id: SnapshotId, index: usize },

    /// The cursor stepped forward.
    Redone { id: SnapshotId, index: usize },

    /// The cursor jumped to an arbitrary entry.
    Moved { id: SnapshotId, index: usize },

    /// Oldest entries were dropped by a capacity change. Every remaining
    /// index shifted down by `count`.
    Evicted {
        count: usize,
        cursor: Option<usize>,
    },

    /// All entries were removed.
    Cleared { removed: usize },

    /// Subscription was dropped.
    Dropped { reason: DropReason },
}

/// Why a subscription was dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Send buffer overflowed (slow consumer).
    BufferOverflow,
    /// Explicitly unsubscribed.
    Unsubscribed,
}

/// Unique identifier for a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Handle to receive events from a subscription.
pub struct SubscriptionHandle {
    pub id: SubscriptionId,
    /// Channel to receive events.
    pub receiver: crossbeam_channel::Receiver<HistoryEvent>,
}

impl SubscriptionHandle {
    /// Receive the next event (blocking).
    pub fn recv(&self) -> Result<HistoryEvent, crossbeam_channel::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive an event (non-blocking).
    pub fn try_recv(&self) -> Result<HistoryEvent, crossbeam_channel::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Receive with timeout.
    pub fn recv_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> Result<HistoryEvent, crossbeam_channel::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}
