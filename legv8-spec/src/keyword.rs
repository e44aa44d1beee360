//! Keyword table: mnemonic -> instruction kind
//!
//! The table is assembled once through [`KeywordTableBuilder`], which rejects
//! a mnemonic assigned to two kinds, and is read-only afterwards.

use crate::error::{Result, SpecError};
use crate::InstructionKind;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Frozen mnemonic lookup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    entries: HashMap<String, InstructionKind>,
}

impl KeywordTable {
    /// Start an empty table
    pub fn builder() -> KeywordTableBuilder {
        KeywordTableBuilder::default()
    }

    /// Build a table from the built-in mnemonic lists
    pub fn from_builtin() -> Result<Self> {
        let mut builder = Self::builder();
        for kind in InstructionKind::ALL {
            builder.insert(kind, kind.mnemonics().iter().copied())?;
        }
        Ok(builder.build())
    }

    /// Process-wide table of the built-in mnemonics
    pub fn standard() -> &'static KeywordTable {
        static STANDARD: OnceLock<KeywordTable> = OnceLock::new();
        STANDARD.get_or_init(|| match Self::from_builtin() {
            Ok(table) => table,
            Err(err) => panic!("built-in keyword table is inconsistent: {err}"),
        })
    }

    /// Kind of `mnemonic`, or `None` if it is not a keyword
    #[inline]
    pub fn lookup(&self, mnemonic: &str) -> Option<InstructionKind> {
        self.entries.get(mnemonic).copied()
    }

    /// True if `mnemonic` is a keyword of exactly `kind`
    #[inline]
    pub fn is_kind(&self, mnemonic: &str, kind: InstructionKind) -> bool {
        self.lookup(mnemonic) == Some(kind)
    }

    /// Sorted mnemonics assigned to `kind`
    pub fn mnemonics(&self, kind: InstructionKind) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(m, _)| m.as_str())
            .collect();
        out.sort_unstable();
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}

/// Accumulates mnemonic lists, enforcing disjointness
#[derive(Debug, Default)]
pub struct KeywordTableBuilder {
    entries: HashMap<String, InstructionKind>,
}

impl KeywordTableBuilder {
    /// Start from an existing table, e.g. to extend the built-in mnemonics
    pub fn from_table(table: &KeywordTable) -> Self {
        Self {
            entries: table.entries.clone(),
        }
    }

    /// Assign every mnemonic in `mnemonics` to `kind`
    pub fn insert<I, S>(&mut self, kind: InstructionKind, mnemonics: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for mnemonic in mnemonics {
            let mnemonic = mnemonic.into();
            check_mnemonic(&mnemonic, kind)?;
            if let Some(&existing) = self.entries.get(&mnemonic) {
                return Err(SpecError::DuplicateMnemonic {
                    mnemonic,
                    existing,
                    requested: kind,
                });
            }
            self.entries.insert(mnemonic, kind);
        }
        Ok(self)
    }

    pub fn build(self) -> KeywordTable {
        KeywordTable {
            entries: self.entries,
        }
    }
}

/// A mnemonic is a run of uppercase letters. Branches may add a condition
/// suffix after a dot in second position (`B.EQ`).
fn check_mnemonic(mnemonic: &str, kind: InstructionKind) -> Result<()> {
    let bytes = mnemonic.as_bytes();
    let valid = match bytes {
        [] => false,
        [first, b'.', rest @ ..] if kind == InstructionKind::B => {
            first.is_ascii_uppercase()
                && !rest.is_empty()
                && rest.iter().all(u8::is_ascii_uppercase)
        }
        _ => bytes.iter().all(u8::is_ascii_uppercase),
    };

    if valid {
        Ok(())
    } else {
        Err(SpecError::InvalidMnemonic(mnemonic.to_string()))
    }
}
