//! Token definitions for LEGv8 assembly lines

use crate::InstructionKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token kind
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// `X0`-`X30`, `SP`, `FP`, `LR`, `XZR`
    Register,
    Comma,
    /// Instruction mnemonic (see [`Token::instruction`])
    Instruction,
    /// Identifier used as a branch target or label definition
    Label,
    LeftBracket,
    RightBracket,
    /// Any single character the lexer does not recognize
    Unknown,
    /// Synthetic end-of-line marker, never part of a token sequence
    EndOfLine,
    /// `#` followed by decimal digits
    Immediate,
    Colon,
}

impl TokenKind {
    /// Lowercase name used in diagnostic messages
    pub fn name(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Comma => "comma",
            Self::Instruction => "instruction",
            Self::Label => "label",
            Self::LeftBracket => "left bracket",
            Self::RightBracket => "right bracket",
            Self::Unknown => "unknown",
            Self::EndOfLine => "eol",
            Self::Immediate => "immediate",
            Self::Colon => "colon",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A lexed token
///
/// `start` and `end` are byte offsets into the source line, half-open, so
/// `&line[start..end] == value` for every token except the end-of-line marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Set exactly when `kind == TokenKind::Instruction`
    pub instruction: Option<InstructionKind>,
    pub value: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Create a non-instruction token covering `line[start..end]`
    pub fn new(kind: TokenKind, line: &str, start: usize, end: usize) -> Self {
        Self {
            kind,
            instruction: None,
            value: line[start..end].to_string(),
            start,
            end,
        }
    }

    /// Create an instruction token tagged with `instruction`
    pub fn instruction(instruction: InstructionKind, line: &str, start: usize, end: usize) -> Self {
        Self {
            kind: TokenKind::Instruction,
            instruction: Some(instruction),
            value: line[start..end].to_string(),
            start,
            end,
        }
    }

    /// End-of-line marker positioned at `offset`
    pub fn end_of_line(offset: usize) -> Self {
        Self {
            kind: TokenKind::EndOfLine,
            instruction: None,
            value: String::new(),
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub fn is_end_of_line(&self) -> bool {
        self.kind == TokenKind::EndOfLine
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.instruction {
            Some(kind) => write!(f, "{}({}) '{}' @{}..{}", self.kind, kind, self.value, self.start, self.end),
            None => write!(f, "{} '{}' @{}..{}", self.kind, self.value, self.start, self.end),
        }
    }
}
