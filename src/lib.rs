//! # Rewind
//!
//! Undo/redo history built from immutable snapshots.
//!
//! ## Core Concepts
//!
//! - **Snapshots**: Immutable, timestamped captures of an owner's state
//! - **History**: Ordered snapshots plus a cursor naming the current one
//! - **Truncate-on-write**: Recording after an undo discards the redo branch
//! - **Owners**: Hold the live state and drive record/undo/redo
//!
//! ## Example
//!
//! ```ignore
//! use rewind::{Document, History, Originator};
//!
//! let mut doc = Document::new();
//! let mut history = History::new();
//!
//! doc.checkpoint(&mut history);
//! doc.write("Hello");
//! doc.checkpoint(&mut history);
//!
//! doc.undo_from(&mut history);
//! assert_eq!(doc.content(), "");
//!
//! // Recording now drops "Hello" from the redo branch.
//! doc.write("Bye");
//! doc.checkpoint(&mut history);
//! assert!(!history.can_redo());
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod originator;
pub mod snapshot;
pub mod subscriptions;
pub mod types;

// Re-exports
pub use config::{HistoryConfig, DEFAULT_LABEL_WIDTH};
pub use error::{HistoryError, Result};
pub use history::{
    DumpEntry, Entries, History, HistoryDump, HistoryEntry, RecordOutcome, SharedHistory,
};
pub use originator::{Document, Originator};
pub use snapshot::{Snapshot, SnapshotLabel};
pub use subscriptions::{
    DropReason, HistoryEvent, SubscriptionConfig, SubscriptionFilter, SubscriptionHandle,
    SubscriptionId, SubscriptionManager,
};
pub use types::*;
