//! Grammar table: instruction kind -> expected token kinds
//!
//! Index 0 of every grammar is the instruction keyword itself.

use crate::{InstructionKind, TokenKind};

use crate::token::TokenKind::{Comma, Immediate, Instruction, Label, LeftBracket, Register, RightBracket};

const R_GRAMMAR: &[TokenKind] = &[Instruction, Register, Comma, Register, Comma, Register];
const I_GRAMMAR: &[TokenKind] = &[Instruction, Register, Comma, Register, Comma, Immediate];
const IM_GRAMMAR: &[TokenKind] = &[Instruction, Register];
const D_GRAMMAR: &[TokenKind] = &[
    Instruction,
    Register,
    Comma,
    LeftBracket,
    Register,
    Comma,
    Immediate,
    RightBracket,
];
const B_GRAMMAR: &[TokenKind] = &[Instruction, Label];
const BR_GRAMMAR: &[TokenKind] = &[Instruction, Register];
const CB_GRAMMAR: &[TokenKind] = &[Instruction, Register, Comma, Label];
const IGNORE_GRAMMAR: &[TokenKind] = &[Instruction];

/// Token kinds a well-formed line of `kind` must contain, in order
pub fn grammar(kind: InstructionKind) -> &'static [TokenKind] {
    match kind {
        InstructionKind::R => R_GRAMMAR,
        InstructionKind::I => I_GRAMMAR,
        InstructionKind::IM => IM_GRAMMAR,
        InstructionKind::D => D_GRAMMAR,
        InstructionKind::B => B_GRAMMAR,
        InstructionKind::BR => BR_GRAMMAR,
        InstructionKind::CB => CB_GRAMMAR,
        InstructionKind::Ignore => IGNORE_GRAMMAR,
    }
}
