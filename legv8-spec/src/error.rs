//! # Error Types for the LEGv8 syntax tables

use crate::InstructionKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("Duplicate mnemonic {mnemonic}: already assigned to {existing}, cannot assign to {requested}")]
    DuplicateMnemonic {
        mnemonic: String,
        existing: InstructionKind,
        requested: InstructionKind,
    },

    #[error("Invalid mnemonic {0:?}: expected uppercase letters with an optional dotted suffix")]
    InvalidMnemonic(String),

    #[error("Diagnostic source tag must not be empty")]
    EmptySource,

    #[error("Unsupported diagnostic severity code {0}")]
    InvalidSeverity(u8),
}

pub type Result<T> = std::result::Result<T, SpecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpecError::DuplicateMnemonic {
            mnemonic: "ADD".to_string(),
            existing: InstructionKind::R,
            requested: InstructionKind::I,
        };
        assert_eq!(
            err.to_string(),
            "Duplicate mnemonic ADD: already assigned to R, cannot assign to I"
        );

        assert_eq!(
            SpecError::EmptySource.to_string(),
            "Diagnostic source tag must not be empty"
        );
        assert_eq!(
            SpecError::InvalidSeverity(4).to_string(),
            "Unsupported diagnostic severity code 4"
        );
    }
}
