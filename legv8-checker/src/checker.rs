//! Document-level checking
//!
//! Every physical line is lexed and validated on its own; no state carries
//! from one line to the next. Diagnostics come back in line order.

use std::borrow::Cow;

use legv8_spec::{CheckerConfig, Diagnostic, EndOfLineRange, KeywordTable, Token, MAX_OFFSET};
use tracing::{debug, trace};

use crate::error::Result;
use crate::lexer::Lexer;
use crate::parser::validate_line;

/// Syntax checker for whole documents
///
/// Holds only immutable state, so one checker can serve many documents
/// from many threads.
#[derive(Debug, Clone)]
pub struct Checker {
    config: CheckerConfig,
    keywords: Cow<'static, KeywordTable>,
}

impl Checker {
    /// Checker over the built-in mnemonics
    pub fn new(config: CheckerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            keywords: Cow::Borrowed(KeywordTable::standard()),
        })
    }

    /// Checker over a custom keyword table
    pub fn with_keywords(config: CheckerConfig, keywords: KeywordTable) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            keywords: Cow::Owned(keywords),
        })
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    pub fn tokenize_line(&self, line: &str) -> Vec<Token> {
        Lexer::with_keywords(line, &self.keywords).collect()
    }

    /// Check one physical line; blank and comment-only lines never fail
    pub fn check_line(&self, line: &str, line_number: u32) -> Option<Diagnostic> {
        let tokens = self.tokenize_line(line);
        if tokens.is_empty() {
            return None;
        }
        trace!(line = line_number, tokens = tokens.len(), "tokenized line");

        let mut diagnostic = validate_line(&tokens, line_number)?;
        diagnostic = diagnostic.with_source(self.config.source.as_str());
        if self.config.end_of_line == EndOfLineRange::LineLength && diagnostic.range.is_unbounded() {
            diagnostic.range.end.character = u32::try_from(line.len()).unwrap_or(MAX_OFFSET);
        }

        debug!(
            line = line_number,
            start = diagnostic.start_char(),
            end = diagnostic.end_char(),
            error = %diagnostic.message,
            "syntax error"
        );
        Some(diagnostic)
    }

    /// Check an ordered sequence of lines
    pub fn check_lines<I, S>(&self, lines: I) -> Vec<Diagnostic>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut diagnostics = Vec::new();
        let mut line_count = 0usize;

        for (index, line) in lines.into_iter().enumerate() {
            line_count += 1;
            let line_number = u32::try_from(index).unwrap_or(u32::MAX);
            if let Some(diagnostic) = self.check_line(line.as_ref(), line_number) {
                diagnostics.push(diagnostic);
            }
        }

        debug!(lines = line_count, diagnostics = diagnostics.len(), "checked document");
        diagnostics
    }

    /// Check source text, splitting it on `\n` or `\r\n`
    pub fn check_source(&self, source: &str) -> Vec<Diagnostic> {
        self.check_lines(source.lines())
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self {
            config: CheckerConfig::default(),
            keywords: Cow::Borrowed(KeywordTable::standard()),
        }
    }
}

/// Check lines with the default checker
pub fn check_lines<I, S>(lines: I) -> Vec<Diagnostic>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Checker::default().check_lines(lines)
}

/// Check source text with the default checker
pub fn check_source(source: &str) -> Vec<Diagnostic> {
    Checker::default().check_source(source)
}
