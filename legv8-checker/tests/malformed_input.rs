//! Tests for malformed input handling in the checker
//!
//! Every malformed line yields exactly one diagnostic at the first mismatch.

use legv8_checker::{check_source, Checker};
use legv8_spec::{CheckerConfig, Diagnostic, EndOfLineRange, Severity, MAX_OFFSET};

fn single(line: &str) -> Diagnostic {
    let mut diagnostics = check_source(line);
    assert_eq!(diagnostics.len(), 1, "expected one diagnostic for {line:?}");
    diagnostics.remove(0)
}

fn span(diagnostic: &Diagnostic) -> (u32, u32) {
    (diagnostic.start_char(), diagnostic.end_char())
}

// ============================================================================
// Missing Instruction Tests
// ============================================================================

#[test]
fn test_unknown_mnemonic() {
    let diag = single("ZZZ");
    assert_eq!(diag.message, "Expected an instruction keyword.");
    assert_eq!(span(&diag), (0, 3));
    assert_eq!(diag.severity, Severity::Error);
}

#[test]
fn test_mnemonic_typo() {
    let diag = single("ADDD X1, X2, X3");
    assert_eq!(diag.message, "Expected an instruction keyword.");
    assert_eq!(span(&diag), (0, 4));
}

#[test]
fn test_lowercase_mnemonic() {
    let diag = single("add X1, X2, X3");
    assert_eq!(diag.message, "Expected an instruction keyword.");
}

#[test]
fn test_line_starting_with_punctuation() {
    let diag = single(", X1");
    assert_eq!(diag.message, "Expected an instruction keyword.");
    assert_eq!(span(&diag), (0, 1));
}

// ============================================================================
// Too Few Tokens Tests
// ============================================================================

#[test]
fn test_r_type_missing_operands() {
    let diag = single("ADD X1, X2");
    assert_eq!(diag.message, "Expected a comma.");
    assert_eq!(span(&diag), (10, 11));
}

#[test]
fn test_i_type_trailing_comma() {
    let diag = single("SUBI X0, X2, ");
    assert_eq!(diag.message, "Expected a immediate.");
    assert_eq!(span(&diag), (12, 13));
}

#[test]
fn test_conditional_branch_missing_label() {
    let diag = single("CBNZ X3,");
    assert_eq!(diag.message, "Expected a label.");
    assert_eq!(span(&diag), (8, 9));
}

#[test]
fn test_single_register_missing() {
    let diag = single("PRNT // nothing to print");
    assert_eq!(diag.message, "Expected a register.");
    assert_eq!(span(&diag), (4, 5));
}

// ============================================================================
// Wrong Token Tests
// ============================================================================

#[test]
fn test_missing_comma() {
    let diag = single("ADDI X0 X1, #12");
    assert_eq!(diag.message, "Expected a comma.");
    assert_eq!(span(&diag), (8, 10));
}

#[test]
fn test_bare_number_is_not_immediate() {
    let diag = single("ADDI X0, X1, 12");
    assert_eq!(diag.message, "Expected a immediate.");
    assert_eq!(span(&diag), (13, 14));
}

#[test]
fn test_bare_hash_is_not_immediate() {
    let diag = single("ADDI X0, X1, #");
    assert_eq!(diag.message, "Expected a immediate.");
    assert_eq!(span(&diag), (13, 14));
}

#[test]
fn test_branch_to_register() {
    let diag = single("B X1");
    assert_eq!(diag.message, "Expected a label.");
    assert_eq!(span(&diag), (2, 4));
}

#[test]
fn test_branch_register_to_label() {
    let diag = single("BR somewhere");
    assert_eq!(diag.message, "Expected a register.");
    assert_eq!(span(&diag), (3, 12));
}

#[test]
fn test_three_digit_register() {
    // X123 lexes as X12 followed by an unknown "3"
    let diag = single("ADD X1, X2, X123");
    assert_eq!(diag.message, "Expected end of line.");
    assert_eq!(span(&diag), (15, MAX_OFFSET));
}

#[test]
fn test_missing_brackets() {
    let diag = single("LDUR SP, X2, #0]");
    assert_eq!(diag.message, "Expected a left bracket.");
    assert_eq!(span(&diag), (9, 11));

    let diag = single("LDUR SP, [X2, #0");
    assert_eq!(diag.message, "Expected a right bracket.");
    assert_eq!(span(&diag), (16, 17));
}

// ============================================================================
// Too Many Tokens Tests
// ============================================================================

#[test]
fn test_trailing_words() {
    let diag = single("SUBI X1, XZR, #9 uh oh");
    assert_eq!(diag.message, "Expected end of line.");
    assert_eq!(span(&diag), (17, MAX_OFFSET));
}

#[test]
fn test_operandless_with_operands() {
    let diag = single("HALT X0, X1");
    assert_eq!(diag.message, "Expected end of line.");
    assert_eq!(span(&diag), (5, MAX_OFFSET));
}

#[test]
fn test_trailing_tokens_clamped_to_line_length() {
    let config = CheckerConfig::new("legv8", EndOfLineRange::LineLength).unwrap();
    let checker = Checker::new(config).unwrap();
    let diagnostics = checker.check_source("HALT X0, X1");
    assert_eq!(span(&diagnostics[0]), (5, 11));
}

#[test]
fn test_only_first_error_reported() {
    // both the missing comma and the trailing garbage are wrong
    let diag = single("ADD X1 X2, X3, X4 junk");
    assert_eq!(diag.message, "Expected a comma.");
    assert_eq!(span(&diag), (7, 9));
}
