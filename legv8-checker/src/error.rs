//! Checker errors
//!
//! Syntax problems in checked source are reported as diagnostics, never as
//! errors. These cover setting a checker up.

use legv8_spec::SpecError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckerError {
    #[error("Invalid checker configuration: {0}")]
    InvalidConfig(#[from] SpecError),
}

pub type Result<T> = std::result::Result<T, CheckerError>;
