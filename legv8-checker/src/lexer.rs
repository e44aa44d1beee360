//! # Lexer for LEGv8 Assembly Lines
//!
//! Scans one line left to right. At each position the first rule that
//! matches wins:
//!
//! 1. spaces are skipped (tabs are not whitespace)
//! 2. end of line or `//` stops the scan
//! 3. `]` `[` `,` `:`
//! 4. immediates, `#` followed by decimal digits
//! 5. registers, `X0`-`X99` (one or two digits), `SP`, `FP`, `LR`, `XZR`
//! 6. instruction keywords, the maximal uppercase run
//! 7. branch keywords with a condition suffix (`B.EQ`)
//! 8. labels, a letter followed by letters, digits or underscores
//! 9. anything else is a one-character unknown token
//!
//! The lexer never fails and every step consumes at least one character.

use legv8_spec::{InstructionKind, KeywordTable, Token, TokenKind, COMMENT_PREFIX};

/// Single-line scanner
///
/// Iterating a `Lexer` yields the line's tokens and stops at the end-of-line
/// marker, which is not yielded.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    line: &'a str,
    bytes: &'a [u8],
    pos: usize,
    keywords: &'a KeywordTable,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Lexer using the built-in keyword table
    pub fn new(line: &'a str) -> Self {
        Self::with_keywords(line, KeywordTable::standard())
    }

    pub fn with_keywords(line: &'a str, keywords: &'a KeywordTable) -> Self {
        Self {
            line,
            bytes: line.as_bytes(),
            pos: 0,
            keywords,
            finished: false,
        }
    }

    /// Scan the next token, returning the end-of-line marker once the line
    /// (or a trailing comment) is reached
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.pos >= self.bytes.len() || self.line[self.pos..].starts_with(COMMENT_PREFIX) {
            self.pos = self.bytes.len();
            return Token::end_of_line(self.pos);
        }

        let token = self.scan_token(self.pos);
        debug_assert!(token.end > self.pos, "lexer made no progress");
        self.pos = token.end;
        token
    }

    fn skip_whitespace(&mut self) {
        while self.bytes.get(self.pos) == Some(&b' ') {
            self.pos += 1;
        }
    }

    fn scan_token(&self, start: usize) -> Token {
        if let Some(kind) = punctuation(self.bytes[start]) {
            return Token::new(kind, self.line, start, start + 1);
        }

        if let Some(end) = self.immediate(start) {
            return Token::new(TokenKind::Immediate, self.line, start, end);
        }

        if let Some(end) = self.register(start) {
            return Token::new(TokenKind::Register, self.line, start, end);
        }

        if let Some((kind, end)) = self.keyword(start) {
            return Token::instruction(kind, self.line, start, end);
        }

        if let Some(end) = self.branch(start) {
            return Token::instruction(InstructionKind::B, self.line, start, end);
        }

        if let Some(end) = self.label(start) {
            return Token::new(TokenKind::Label, self.line, start, end);
        }

        let width = self.line[start..].chars().next().map_or(1, char::len_utf8);
        Token::new(TokenKind::Unknown, self.line, start, start + width)
    }

    /// `#` followed by at least one digit; a bare `#` is not an immediate
    fn immediate(&self, start: usize) -> Option<usize> {
        if self.bytes[start] != b'#' {
            return None;
        }
        let end = self.run_end(start + 1, |b| b.is_ascii_digit());
        (end > start + 1).then_some(end)
    }

    fn register(&self, start: usize) -> Option<usize> {
        match &self.bytes[start..] {
            [b'X', d1, d2, ..] if d1.is_ascii_digit() && d2.is_ascii_digit() => Some(start + 3),
            [b'X', d1, ..] if d1.is_ascii_digit() => Some(start + 2),
            [b'S', b'P', ..] | [b'F', b'P', ..] | [b'L', b'R', ..] => Some(start + 2),
            [b'X', b'Z', b'R', ..] => Some(start + 3),
            _ => None,
        }
    }

    /// Maximal uppercase run tested against each non-branch kind in turn
    fn keyword(&self, start: usize) -> Option<(InstructionKind, usize)> {
        let end = self.run_end(start, |b| b.is_ascii_uppercase());
        let word = &self.line[start..end];
        InstructionKind::KEYWORD_ORDER
            .iter()
            .copied()
            .find(|&kind| self.keywords.is_kind(word, kind))
            .map(|kind| (kind, end))
    }

    /// Uppercase run that may contain a `.` in second position
    fn branch(&self, start: usize) -> Option<usize> {
        let mut end = start;
        while let Some(&b) = self.bytes.get(end) {
            if b.is_ascii_uppercase() || (end - start == 1 && b == b'.') {
                end += 1;
            } else {
                break;
            }
        }
        self.keywords
            .is_kind(&self.line[start..end], InstructionKind::B)
            .then_some(end)
    }

    fn label(&self, start: usize) -> Option<usize> {
        if !self.bytes[start].is_ascii_alphabetic() {
            return None;
        }
        Some(self.run_end(start + 1, |b| b.is_ascii_alphanumeric() || b == b'_'))
    }

    fn run_end(&self, from: usize, accept: impl Fn(u8) -> bool) -> usize {
        let mut end = from;
        while self.bytes.get(end).is_some_and(|&b| accept(b)) {
            end += 1;
        }
        end
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_end_of_line() {
            self.finished = true;
            return None;
        }
        Some(token)
    }
}

fn punctuation(byte: u8) -> Option<TokenKind> {
    match byte {
        b']' => Some(TokenKind::RightBracket),
        b'[' => Some(TokenKind::LeftBracket),
        b',' => Some(TokenKind::Comma),
        b':' => Some(TokenKind::Colon),
        _ => None,
    }
}

/// Tokenize one line with the built-in keyword table
pub fn tokenize_line(line: &str) -> Vec<Token> {
    Lexer::new(line).collect()
}

/// Tokenize every line of `source`
pub fn tokenize_source(source: &str) -> Vec<Vec<Token>> {
    source.lines().map(tokenize_line).collect()
}
