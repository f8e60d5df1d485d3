//! History configuration.

use crate::error::{HistoryError, Result};
use serde::{Deserialize, Serialize};

/// Default number of payload characters shown in snapshot labels.
pub const DEFAULT_LABEL_WIDTH: usize = 20;

/// History configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of retained snapshots (None = unbounded).
    ///
    /// When exceeded, the oldest entries are evicted. Entries at or after
    /// the cursor are never evicted.
    pub capacity: Option<usize>,

    /// Payload characters shown in diagnostic labels.
    pub label_width: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

impl HistoryConfig {
    /// Unbounded history with default labels.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// History retaining at most `capacity` snapshots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Default::default()
        }
    }

    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| HistoryError::Deserialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config describes a usable history.
    pub fn validate(&self) -> Result<()> {
        validate_capacity(self.capacity)
    }
}

pub(crate) fn validate_capacity(capacity: Option<usize>) -> Result<()> {
    if capacity == Some(0) {
        return Err(HistoryError::InvalidConfig(
            "capacity must be at least 1".to_string(),
        ));
    }
    Ok(())
}
