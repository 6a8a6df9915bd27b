//! Calculator configuration
//!
//! Loaded from an optional JSON file; every field has a default so an empty
//! object is a valid config.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::evaluator::ClearMode;
use crate::core::history::History;
use crate::core::{CalcError, CalcResult};

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// What the clear button resets
    pub clear_mode: ClearMode,
    /// Maximum number of tape entries kept in memory
    pub history_capacity: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            clear_mode: ClearMode::default(),
            history_capacity: History::DEFAULT_MAX_ENTRIES,
        }
    }
}

impl CalculatorConfig {
    /// Upper bound on `history_capacity`
    pub const MAX_HISTORY_CAPACITY: usize = 10_000;

    /// Create a new config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clear behaviour
    #[must_use]
    pub const fn with_clear_mode(mut self, clear_mode: ClearMode) -> Self {
        self.clear_mode = clear_mode;
        self
    }

    /// Set the tape capacity
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Parses and validates a JSON config
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            clear_mode = ?config.clear_mode,
            history_capacity = config.history_capacity,
            "loaded calculator config"
        );
        Ok(config)
    }

    /// Checks value ranges
    pub fn validate(&self) -> CalcResult<()> {
        if self.history_capacity > Self::MAX_HISTORY_CAPACITY {
            return Err(CalcError::config(format!(
                "history_capacity {} exceeds maximum {}",
                self.history_capacity,
                Self::MAX_HISTORY_CAPACITY
            )));
        }
        Ok(())
    }
}
