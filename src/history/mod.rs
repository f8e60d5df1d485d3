//! Snapshot history with a cursor.
//!
//! The history is an ordered run of snapshots plus a cursor naming the
//! current one. Undo and redo move the cursor; recording truncates every
//! entry after the cursor before appending, so a rewound future is dropped
//! the moment new state is written.
//!
//! ```text
//!   record a, b, c        [a  b  c*]
//!   undo                  [a  b* c ]
//!   record d              [a  b  d*]     c is gone for good
//! ```

mod dump;
mod entries;
mod manager;
mod shared;

pub use dump::{DumpEntry, HistoryDump};
pub use entries::{Entries, HistoryEntry};
pub use manager::{History, RecordOutcome};
pub use shared::SharedHistory;
