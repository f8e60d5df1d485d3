//! The owner side of the history.
//!
//! An owner holds live mutable state. It captures that state into snapshots
//! and applies snapshots handed back by undo and redo. The history never
//! touches the owner; the owner drives every call.

use crate::history::{History, RecordOutcome};
use crate::snapshot::Snapshot;

/// Something whose state can be captured and restored.
pub trait Originator {
    /// Isolated copy of the live state.
    type State;

    /// Copy the live state out.
    fn capture(&self) -> Self::State;

    /// Replace the live state with `state`.
    fn restore(&mut self, state: &Self::State);

    /// Record the current live state in `history`.
    fn checkpoint(&self, history: &mut History<Self::State>) -> RecordOutcome {
        history.record(Snapshot::new(self.capture()))
    }

    /// Step `history` back and apply the result. False if there was nothing to undo.
    fn undo_from(&mut self, history: &mut History<Self::State>) -> bool {
        match history.undo() {
            Some(snapshot) => {
                self.restore(snapshot.payload());
                true
            }
            None => false,
        }
    }

    /// Step `history` forward and apply the result. False if there was nothing to redo.
    fn redo_from(&mut self, history: &mut History<Self::State>) -> bool {
        match history.redo() {
            Some(snapshot) => {
                self.restore(snapshot.payload());
                true
            }
            None => false,
        }
    }
}

/// A text buffer: the simplest useful owner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    content: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` to the content.
    pub fn write(&mut self, text: &str) {
        self.content.push_str(text);
    }

    /// Replace the whole content.
    pub fn overwrite(&mut self, text: &str) {
        self.content.clear();
        self.content.push_str(text);
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Originator for Document {
    type State = String;

    fn capture(&self) -> String {
        self.content.clone()
    }

    fn restore(&mut self, state: &String) {
        self.content.clone_from(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_overwrite() {
        let mut doc = Document::new();
        doc.write("Hello");
        doc.write(", world");
        assert_eq!(doc.content(), "Hello, world");

        doc.overwrite("Bye");
        assert_eq!(doc.content(), "Bye");
    }

    #[test]
    fn test_checkpoint_undo_redo() {
        let mut doc = Document::new();
        let mut history = History::new();

        doc.checkpoint(&mut history);
        doc.write("one");
        doc.checkpoint(&mut history);
        doc.write(" two");
        doc.checkpoint(&mut history);

        assert!(doc.undo_from(&mut history));
        assert_eq!(doc.content(), "one");
        assert!(doc.undo_from(&mut history));
        assert_eq!(doc.content(), "");
        assert!(!doc.undo_from(&mut history));
        assert_eq!(doc.content(), "");

        assert!(doc.redo_from(&mut history));
        assert_eq!(doc.content(), "one");
    }

    #[test]
    fn test_live_edits_do_not_touch_recorded_state() {
        let mut doc = Document::new();
        let mut history = History::new();

        doc.write("kept");
        doc.checkpoint(&mut history);
        doc.overwrite("scratch");

        assert_eq!(history.current().unwrap().payload(), "kept");
    }

    #[test]
    fn test_state_without_clone() {
        // Move-only state: capture builds a fresh value, restore borrows.
        struct Frame(Vec<u8>);

        struct Screen {
            pixels: Vec<u8>,
        }

        impl Originator for Screen {
            type State = Frame;

            fn capture(&self) -> Frame {
                Frame(self.pixels.clone())
            }

            fn restore(&mut self, state: &Frame) {
                self.pixels.clone_from(&state.0);
            }
        }

        let mut screen = Screen { pixels: vec![0; 4] };
        let mut history = History::new();

        screen.checkpoint(&mut history);
        screen.pixels[0] = 255;
        screen.checkpoint(&mut history);

        assert!(screen.undo_from(&mut history));
        assert_eq!(screen.pixels, vec![0; 4]);
        assert!(screen.redo_from(&mut history));
        assert_eq!(screen.pixels[0], 255);
    }
}
