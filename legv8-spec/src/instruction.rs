//! Instruction kinds and their mnemonics
//!
//! Every mnemonic belongs to exactly one instruction kind, and every kind owns
//! exactly one grammar (see [`crate::grammar`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammar family of an instruction mnemonic
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InstructionKind {
    /// Register-immediate: `ADDI X0, X1, #12`
    I,
    /// Register-register: `ADD X0, X1, X2`
    R,
    /// Data transfer: `LDUR X0, [X1, #8]`
    D,
    /// Branch: `B label`, `B.EQ label`
    B,
    /// Branch to register: `BR LR`
    BR,
    /// Conditional branch: `CBZ X0, label`
    CB,
    /// Single register operand: `PRNT X0`
    IM,
    /// No operands: `HALT`
    Ignore,
}

impl InstructionKind {
    /// All instruction kinds
    pub const ALL: [Self; 8] = [
        Self::I,
        Self::R,
        Self::D,
        Self::B,
        Self::BR,
        Self::CB,
        Self::IM,
        Self::Ignore,
    ];

    /// Kinds tried, in order, when matching a plain uppercase keyword.
    ///
    /// `B` is absent: branch mnemonics may carry a dotted condition suffix and
    /// are matched separately.
    pub const KEYWORD_ORDER: [Self; 7] = [
        Self::I,
        Self::R,
        Self::D,
        Self::CB,
        Self::IM,
        Self::BR,
        Self::Ignore,
    ];

    /// Built-in mnemonics of this kind
    pub fn mnemonics(self) -> &'static [&'static str] {
        match self {
            Self::I => I_MNEMONICS,
            Self::R => R_MNEMONICS,
            Self::D => D_MNEMONICS,
            Self::B => B_MNEMONICS,
            Self::BR => BR_MNEMONICS,
            Self::CB => CB_MNEMONICS,
            Self::IM => IM_MNEMONICS,
            Self::Ignore => IGNORE_MNEMONICS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::R => "R",
            Self::D => "D",
            Self::B => "B",
            Self::BR => "BR",
            Self::CB => "CB",
            Self::IM => "IM",
            Self::Ignore => "IGNORE",
        }
    }
}

impl fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub const I_MNEMONICS: &[&str] = &[
    "ADDI", "SUBI", "ANDI", "ADDIS", "ORRI", "EORI", "SUBIS", "ANDIS", "LSL", "LSR",
];

pub const IM_MNEMONICS: &[&str] = &["PRNT"];

pub const D_MNEMONICS: &[&str] = &[
    "STURB", "LDURB", "STURH", "LDURH", "STURW", "LDURSW", "STXR", "LDXR", "STUR", "LDUR",
];

pub const R_MNEMONICS: &[&str] = &[
    // Floating point
    "FDIVS", "FMULS", "FCMPS", "FADDS", "FSUBS", "FMULD", "FDIVD", "FCMPD", "FADDD", "FSUBD",
    // Integer
    "AND", "ADD", "SDIV", "UDIV", "MUL", "SMULH", "UMULH", "ORR", "ADDS", "STURS", "LDURS",
    "EOR", "SUB", "ANDS", "SUBS", "STURD", "LDURD",
];

pub const B_MNEMONICS: &[&str] = &[
    "B.EQ", "B.GT", "B.NE", "B.HS", "B.LO", "B.MI", "B.PL", "B.VS", "B.VC", "B.HI", "B.LS",
    "B.GE", "B.LT", "B.LE", "B", "BL",
];

pub const CB_MNEMONICS: &[&str] = &["CBZ", "CBNZ"];

pub const BR_MNEMONICS: &[&str] = &["BR"];

pub const IGNORE_MNEMONICS: &[&str] = &["PRNL", "DUMP", "HALT"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_order_excludes_branch() {
        assert!(!InstructionKind::KEYWORD_ORDER.contains(&InstructionKind::B));
        assert_eq!(InstructionKind::KEYWORD_ORDER.len(), InstructionKind::ALL.len() - 1);
    }

    #[test]
    fn test_names() {
        assert_eq!(InstructionKind::Ignore.to_string(), "IGNORE");
        assert_eq!(InstructionKind::CB.to_string(), "CB");
    }

    #[test]
    fn test_every_kind_has_mnemonics() {
        for kind in InstructionKind::ALL {
            assert!(!kind.mnemonics().is_empty(), "{kind} has no mnemonics");
        }
    }

    #[test]
    fn test_mnemonics_are_uppercase() {
        for kind in InstructionKind::ALL {
            for mnemonic in kind.mnemonics() {
                assert!(
                    mnemonic.bytes().all(|b| b.is_ascii_uppercase() || b == b'.'),
                    "{mnemonic} is not an uppercase mnemonic"
                );
            }
        }
    }
}
