//! LEGv8 Syntax Checker
//!
//! Lex LEGv8 assembly line by line and report malformed lines as
//! diagnostics.
//!
//! ## Example
//!
//! ```rust
//! use legv8_checker::check_source;
//!
//! let source = r#"
//! loop:
//!     ADDI X0, X1, #12
//!     SUBI X0 X2, #1
//!     CBZ X0, loop
//! "#;
//!
//! let diagnostics = check_source(source);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].message, "Expected a comma.");
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod checker;

pub use error::{CheckerError, Result};
pub use lexer::{tokenize_line, tokenize_source, Lexer};
pub use parser::{check_tokens, validate_line, LineError, SyntaxError};
pub use checker::{check_lines, check_source, Checker};
