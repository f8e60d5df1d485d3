//! Diagnostic listings of a history.

use crate::error::Result;
use crate::snapshot::SnapshotLabel;
use crate::types::{SnapshotId, Timestamp};
use serde::Serialize;
use std::fmt;

/// One line of a history listing.
#[derive(Clone, Debug, Serialize)]
pub struct DumpEntry {
    pub index: usize,
    pub id: SnapshotId,
    pub created_at: Timestamp,
    pub label: SnapshotLabel,
    pub is_current: bool,
}

/// Point-in-time listing of a history, detached from it.
#[derive(Clone, Debug, Serialize)]
pub struct HistoryDump {
    pub cursor: Option<usize>,
    pub len: usize,
    pub capacity: Option<usize>,
    pub entries: Vec<DumpEntry>,
}

impl HistoryDump {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for HistoryDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "History:")?;
        for entry in &self.entries {
            let marker = if entry.is_current { "->" } else { "  " };
            writeln!(f, "{} [{}] {}", marker, entry.index, entry.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::HistoryConfig;
    use crate::history::History;

    #[test]
    fn test_listing_marks_cursor() {
        let mut history = History::new();
        history.record_payload("Hello".to_string());
        history.record_payload("Hello, world".to_string());
        history.undo();

        let dump = history.dump();
        assert_eq!(dump.cursor, Some(0));
        assert_eq!(dump.len, 2);

        let text = dump.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "History:");
        assert!(lines[1].starts_with("-> [0] #"));
        assert!(lines[1].ends_with("(Hello)"));
        assert!(lines[2].starts_with("   [1] #"));
    }

    #[test]
    fn test_label_width_from_config() {
        let config = HistoryConfig {
            label_width: 5,
            ..Default::default()
        };
        let mut history = History::with_config(config).unwrap();
        history.record_payload("Hello, world".to_string());

        let dump = history.dump();
        assert_eq!(dump.entries[0].label.preview, "Hello");
        assert!(dump.entries[0].label.truncated);
    }

    #[test]
    fn test_json_output() {
        let mut history = History::with_config(HistoryConfig::with_capacity(10)).unwrap();
        history.record_payload(42);

        let json: serde_json::Value =
            serde_json::from_str(&history.dump().to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["cursor"], 0);
        assert_eq!(json["capacity"], 10);
        let snapshot = history.current().unwrap();
        assert_eq!(json["entries"][0]["id"], snapshot.id().0);
        assert_eq!(json["entries"][0]["created_at"], snapshot.created_at().0);
        assert_eq!(json["entries"][0]["label"]["preview"], "42");
        assert_eq!(json["entries"][0]["is_current"], true);
    }
}
