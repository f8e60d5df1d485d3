//! Human-readable snapshot labels for history listings.

use crate::types::{SnapshotId, Timestamp};
use serde::Serialize;
use std::fmt;

/// Marker appended to a preview that was cut short.
const ELLIPSIS: &str = "...";

/// Short description of a snapshot: id, creation time and payload preview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SnapshotLabel {
    pub id: SnapshotId,
    pub created_at: Timestamp,
    pub preview: String,
    pub truncated: bool,
}

impl SnapshotLabel {
    pub(crate) fn new(
        id: SnapshotId,
        created_at: Timestamp,
        text: &str,
        max_chars: usize,
    ) -> Self {
        // Cut on a char boundary, never mid code point.
        let (preview, truncated) = match text.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => (text[..byte_idx].to_string(), true),
            None => (text.to_string(), false),
        };

        Self {
            id,
            created_at,
            preview,
            truncated,
        }
    }
}

impl fmt::Display for SnapshotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} @{} ({}", self.id, self.created_at, self.preview)?;
        if self.truncated {
            f.write_str(ELLIPSIS)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(text: &str, max_chars: usize) -> SnapshotLabel {
        SnapshotLabel::new(SnapshotId(7), Timestamp(2_000_001), text, max_chars)
    }

    #[test]
    fn test_short_payload_is_not_truncated() {
        let l = label("Hello", 20);
        assert!(!l.truncated);
        assert_eq!(l.to_string(), "#7 @1970-01-01T00:00:02.000Z (Hello)");
    }

    #[test]
    fn test_long_payload_is_truncated() {
        let l = label("Hello, world, and then some", 12);
        assert!(l.truncated);
        assert_eq!(l.preview, "Hello, world");
        assert_eq!(l.to_string(), "#7 @1970-01-01T00:00:02.000Z (Hello, world...)");
    }

    #[test]
    fn test_exact_width_is_not_truncated() {
        let l = label("12345", 5);
        assert!(!l.truncated);
        assert_eq!(l.preview, "12345");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let l = label("안녕하세요 세계", 3);
        assert_eq!(l.preview, "안녕하");
        assert!(l.truncated);
    }

    #[test]
    fn test_zero_width_preview() {
        let l = label("abc", 0);
        assert_eq!(l.preview, "");
        assert!(l.truncated);

        let empty = label("", 0);
        assert!(!empty.truncated);
    }
}
