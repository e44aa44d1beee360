//! Grammar validation of a single tokenized line
//!
//! The line's leading instruction selects a grammar, and the tokens are
//! compared against it slot by slot. Only the first mismatch is reported.

use legv8_spec::{grammar, Diagnostic, Range, Token, TokenKind, MAX_OFFSET};
use thiserror::Error;

/// The closed set of syntax problems a line can have
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Expected an instruction keyword.")]
    MissingInstruction,

    #[error("Expected end of line.")]
    TrailingTokens,

    /// Wrong or missing token; message uses the kind's lowercase name
    #[error("Expected a {0}.")]
    Expected(TokenKind),
}

/// A syntax error and the byte span it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineError {
    pub error: SyntaxError,
    pub start: usize,
    /// `None` runs to the end of the line
    pub end: Option<usize>,
}

impl LineError {
    fn at(error: SyntaxError, start: usize, end: usize) -> Self {
        Self {
            error,
            start,
            end: Some(end),
        }
    }

    fn rest_of_line(error: SyntaxError, start: usize) -> Self {
        Self {
            error,
            start,
            end: None,
        }
    }

    /// Diagnostic on `line`; open-ended spans end at [`MAX_OFFSET`]
    pub fn to_diagnostic(self, line: u32) -> Diagnostic {
        let end = self.end.map_or(MAX_OFFSET, column);
        Diagnostic::error(Range::on_line(line, column(self.start), end), self.error.to_string())
    }
}

fn column(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(MAX_OFFSET)
}

/// True for a `label:` definition line
pub fn is_label_definition(tokens: &[Token]) -> bool {
    matches!(
        tokens,
        [label, colon] if label.kind == TokenKind::Label && colon.kind == TokenKind::Colon
    )
}

/// Check a line's tokens against the grammar of its instruction
pub fn check_tokens(tokens: &[Token]) -> Result<(), LineError> {
    let Some(first) = tokens.first() else {
        return Ok(());
    };

    if is_label_definition(tokens) {
        return Ok(());
    }

    let kind = match (first.kind, first.instruction) {
        (TokenKind::Instruction, Some(kind)) => kind,
        _ => {
            return Err(LineError::at(SyntaxError::MissingInstruction, first.start, first.end));
        }
    };

    let expected = grammar(kind);
    for (index, token) in tokens.iter().enumerate() {
        let Some(&slot) = expected.get(index) else {
            return Err(LineError::rest_of_line(SyntaxError::TrailingTokens, token.start));
        };
        if token.kind != slot {
            return Err(LineError::at(SyntaxError::Expected(slot), token.start, token.end));
        }
    }

    if let (Some(&missing), Some(last)) = (expected.get(tokens.len()), tokens.last()) {
        return Err(LineError::at(SyntaxError::Expected(missing), last.end, last.end + 1));
    }

    Ok(())
}

/// Validate one line, producing at most one diagnostic
pub fn validate_line(tokens: &[Token], line: u32) -> Option<Diagnostic> {
    check_tokens(tokens).err().map(|err| err.to_diagnostic(line))
}
