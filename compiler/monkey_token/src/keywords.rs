//! Reserved-word lookup.
//!
//! A [`KeywordTable`] maps exact, case-sensitive identifier text to a
//! keyword [`TokenKind`]. Any identifier not in the table scans as
//! [`TokenKind::Ident`].
//!
//! Two built-in tables exist:
//! - [`KeywordTable::standard()`]: `fn let true false if else return`
//! - [`KeywordTable::minimal()`]: `fn let`
//!
//! Custom tables start from [`KeywordTable::empty()`] and grow through
//! [`KeywordTable::insert()`], which only accepts words the scanner could
//! actually produce as an identifier run.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::TokenKind;

/// Standard Monkey keywords.
const STANDARD: [(&str, TokenKind); 7] = [
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

/// The two keywords every Monkey dialect has.
const MINIMAL: [(&str, TokenKind); 2] = [("fn", TokenKind::Function), ("let", TokenKind::Let)];

static STANDARD_TABLE: LazyLock<KeywordTable> =
    LazyLock::new(|| KeywordTable::from_entries(&STANDARD));

/// Error when adding an entry to a [`KeywordTable`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeywordError {
    /// The kind is not a keyword kind (e.g. `Plus`, `Ident`).
    #[error("`{kind:?}` is not a keyword kind (while registering `{word}`)")]
    NotAKeyword { word: String, kind: TokenKind },
    /// The word could never be scanned as one identifier run.
    #[error("`{word}` is not identifier-shaped: keywords use only ASCII letters and `_`")]
    NotIdentifierShaped { word: String },
}

/// Immutable-after-construction map from reserved word to keyword kind.
#[derive(Clone, Debug, Default)]
pub struct KeywordTable {
    words: FxHashMap<Box<str>, TokenKind>,
    /// Longest registered word, used to reject long identifiers early.
    max_len: usize,
}

impl KeywordTable {
    /// Table with no keywords: every identifier run scans as `Ident`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The process-wide standard table, built on first use.
    pub fn standard() -> &'static KeywordTable {
        &STANDARD_TABLE
    }

    /// Table with only `fn` and `let`.
    pub fn minimal() -> Self {
        Self::from_entries(&MINIMAL)
    }

    fn from_entries(entries: &[(&str, TokenKind)]) -> Self {
        let mut table = Self::empty();
        for &(word, kind) in entries {
            debug_assert!(kind.is_keyword() && is_identifier_shaped(word));
            table.words.insert(word.into(), kind);
            table.max_len = table.max_len.max(word.len());
        }
        table
    }

    /// Register `word` as a keyword of the given kind.
    ///
    /// Returns the kind previously registered for `word`, if any.
    pub fn insert(
        &mut self,
        word: &str,
        kind: TokenKind,
    ) -> Result<Option<TokenKind>, KeywordError> {
        if !kind.is_keyword() {
            return Err(KeywordError::NotAKeyword {
                word: word.to_owned(),
                kind,
            });
        }
        if !is_identifier_shaped(word) {
            return Err(KeywordError::NotIdentifierShaped {
                word: word.to_owned(),
            });
        }
        self.max_len = self.max_len.max(word.len());
        Ok(self.words.insert(word.into(), kind))
    }

    /// Look up a reserved word by exact text.
    ///
    /// Returns `None` for regular identifiers.
    #[inline]
    pub fn lookup(&self, text: &str) -> Option<TokenKind> {
        if text.len() > self.max_len {
            return None;
        }
        self.words.get(text).copied()
    }

    /// Number of registered keywords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Registered words with their kinds, sorted by word.
    pub fn entries(&self) -> Vec<(&str, TokenKind)> {
        let mut entries: Vec<_> = self.words.iter().map(|(w, &k)| (&**w, k)).collect();
        entries.sort_unstable_by_key(|&(w, _)| w);
        entries
    }
}

/// Non-empty and made only of ASCII letters and `_`, the bytes that
/// extend an identifier run.
fn is_identifier_shaped(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic() || b == b'_')
}
