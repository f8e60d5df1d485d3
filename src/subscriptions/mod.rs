//! Subscription system for history changes.
//!
//! Owners that show undo/redo controls or a history list subscribe here
//! instead of polling. Events are published after:
//! - Snapshot records (with truncation and eviction counts)
//! - Cursor moves (undo, redo, seek)
//! - Clears
//!
//! Subscriptions use bounded buffers; a subscriber that falls behind is
//! dropped rather than blocking the history.
//!
//! # Example
//!
//! ```ignore
//! let history = SharedHistory::new();
//! let handle = history.subscribe(SubscriptionConfig::default());
//!
//! history.record_payload("Hello".to_string());
//!
//! match handle.recv() {
//!     Ok(HistoryEvent::Recorded { index, .. }) => println!("now at {index}"),
//!     Ok(other) => println!("{other:?}"),
//!     Err(_) => {}
//! }
//! ```

mod manager;
mod types;

pub use manager::SubscriptionManager;
pub use types::{
    DropReason, HistoryEvent, SubscriptionConfig, SubscriptionFilter, SubscriptionHandle,
    SubscriptionId,
};
