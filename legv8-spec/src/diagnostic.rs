//! Diagnostics reported for malformed lines
//!
//! The shape follows the Language Server Protocol so a transport layer can
//! publish these records without translation: zero-based line/character
//! positions, a half-open range, a severity and a source tag.

use crate::{SpecError, DEFAULT_SOURCE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// End column meaning "through the end of the line"
pub const MAX_OFFSET: u32 = u32::MAX;

/// Zero-based position within a document
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Half-open range `[start, end)`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Range on a single line
    pub const fn on_line(line: u32, start: u32, end: u32) -> Self {
        Self {
            start: Position::new(line, start),
            end: Position::new(line, end),
        }
    }

    /// True if the range runs to the end of its line
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.end.character == MAX_OFFSET
    }
}

/// Diagnostic severity, serialized as its LSP numeric code
///
/// Every syntax problem the checker finds is an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    Error,
}

impl Severity {
    /// Numeric severity as used on the wire by LSP clients
    pub fn lsp_code(self) -> u8 {
        match self {
            Self::Error => 1,
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.lsp_code()
    }
}

impl TryFrom<u8> for Severity {
    type Error = SpecError;

    fn try_from(code: u8) -> Result<Self, SpecError> {
        match code {
            1 => Ok(Severity::Error),
            other => Err(SpecError::InvalidSeverity(other)),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: Severity,
    pub message: String,
    pub source: String,
}

impl Diagnostic {
    /// Error diagnostic tagged with [`DEFAULT_SOURCE`]
    pub fn error(range: Range, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: Severity::Error,
            message: message.into(),
            source: DEFAULT_SOURCE.to_string(),
        }
    }

    /// Replace the source tag
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    #[inline]
    pub fn start_line(&self) -> u32 {
        self.range.start.line
    }

    #[inline]
    pub fn start_char(&self) -> u32 {
        self.range.start.character
    }

    #[inline]
    pub fn end_line(&self) -> u32 {
        self.range.end.line
    }

    #[inline]
    pub fn end_char(&self) -> u32 {
        self.range.end.character
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.range.start;
        // 1-based for humans
        write!(
            f,
            "{}:{}: {}: {} [{}]",
            start.line + 1,
            start.character + 1,
            self.severity,
            self.message,
            self.source
        )
    }
}
