//! # Checker Configuration
//!
//! Controls how diagnostics are labelled and how a "rest of line" range is
//! reported. Detection itself is not configurable.

use crate::error::{Result, SpecError};
use serde::{Deserialize, Serialize};

/// Source tag attached to every diagnostic by default
pub const DEFAULT_SOURCE: &str = "legv8";

/// How the range of an "Expected end of line." diagnostic ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndOfLineRange {
    /// End column is [`crate::MAX_OFFSET`]
    #[default]
    Unbounded,
    /// End column is the length of the physical line
    LineLength,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Tag identifying the checker in published diagnostics
    pub source: String,
    pub end_of_line: EndOfLineRange,
}

impl CheckerConfig {
    /// Create a new configuration with validation
    pub fn new(source: impl Into<String>, end_of_line: EndOfLineRange) -> Result<Self> {
        let config = Self {
            source: source.into(),
            end_of_line,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            return Err(SpecError::EmptySource);
        }
        Ok(())
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            end_of_line: EndOfLineRange::Unbounded,
        }
    }
}
