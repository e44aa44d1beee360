//! # LEGv8 Syntax Definitions
//!
//! Static description of the LEGv8 assembly line syntax used by the checker.
//!
//! ## Contents
//! - Token kinds and the [`Token`] record produced by the lexer
//! - Instruction kinds and their mnemonic lists
//! - The keyword table (mnemonic -> instruction kind)
//! - The grammar table (instruction kind -> expected token kinds)
//! - Diagnostics in an LSP-compatible shape
//! - Checker configuration

pub mod token;
pub mod instruction;
pub mod keyword;
pub mod grammar;
pub mod diagnostic;
pub mod config;
pub mod error;

pub use token::{Token, TokenKind};
pub use instruction::InstructionKind;
pub use keyword::{KeywordTable, KeywordTableBuilder};
pub use grammar::grammar;
pub use diagnostic::{Diagnostic, Position, Range, Severity, MAX_OFFSET};
pub use config::{CheckerConfig, EndOfLineRange, DEFAULT_SOURCE};
pub use error::{Result, SpecError};

/// Marker that starts a line comment
pub const COMMENT_PREFIX: &str = "//";
