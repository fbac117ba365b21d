//! Hand-written scanner producing [`Token`] values on demand.
//!
//! The scanner is pull-based: each call to [`Scanner::next_token()`] skips
//! whitespace, classifies the current byte, consumes one token and returns
//! it. It never fails. Bytes no rule accepts come back as
//! [`TokenKind::Illegal`] tokens, and once the source is exhausted every
//! call returns [`TokenKind::Eof`].
//!
//! # Design
//!
//! Dispatch is split in two: [`classify()`] maps a byte to a [`ByteClass`],
//! and the scanner handles each class in a focused method that advances the
//! cursor and builds the token. Every method leaves the cursor just past the
//! token it produced.

use monkey_token::{KeywordTable, Span, Token, TokenKind};
use tracing::{debug, trace};

use crate::cursor::Cursor;

/// What the scanner should do with a byte in leading position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteClass {
    /// Always a one-byte token of this kind.
    Single(TokenKind),
    /// `=`: `Assign`, or `Eq` when followed by `=`.
    EqualLead,
    /// `!`: `Bang`, or `NotEq` when followed by `=`.
    BangLead,
    /// ASCII letter or `_`: starts an identifier or keyword.
    Letter,
    /// ASCII digit: starts an integer literal.
    Digit,
    /// `0x00`: end of input, or an interior NUL byte.
    Null,
    /// Anything else.
    Other,
}

/// Classify the byte that starts a token.
#[inline]
pub fn classify(byte: u8) -> ByteClass {
    match byte {
        b'+' => ByteClass::Single(TokenKind::Plus),
        b'-' => ByteClass::Single(TokenKind::Minus),
        b'*' => ByteClass::Single(TokenKind::Asterisk),
        b'/' => ByteClass::Single(TokenKind::Slash),
        b'<' => ByteClass::Single(TokenKind::Lt),
        b'>' => ByteClass::Single(TokenKind::Gt),
        b'(' => ByteClass::Single(TokenKind::LParen),
        b')' => ByteClass::Single(TokenKind::RParen),
        b'{' => ByteClass::Single(TokenKind::LBrace),
        b'}' => ByteClass::Single(TokenKind::RBrace),
        b',' => ByteClass::Single(TokenKind::Comma),
        b';' => ByteClass::Single(TokenKind::Semicolon),
        b'=' => ByteClass::EqualLead,
        b'!' => ByteClass::BangLead,
        b'a'..=b'z' | b'A'..=b'Z' | b'_' => ByteClass::Letter,
        b'0'..=b'9' => ByteClass::Digit,
        0 => ByteClass::Null,
        _ => ByteClass::Other,
    }
}

/// Bytes that start and extend an identifier. Digits do not.
#[inline]
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Pull-based scanner over one source text.
///
/// Requires exclusive access (`&mut self`) to produce tokens. Independent
/// scanners share nothing but the read-only keyword table and may run on
/// separate threads.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    keywords: &'a KeywordTable,
    /// Set once the first `Eof` has been produced.
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner using the standard keyword table.
    pub fn new(source: &'a str) -> Self {
        Self::with_keywords(source, KeywordTable::standard())
    }

    /// Create a scanner resolving identifiers against `keywords`.
    pub fn with_keywords(source: &'a str, keywords: &'a KeywordTable) -> Self {
        Self {
            cursor: Cursor::new(source),
            keywords,
            finished: false,
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` with an empty literal when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> Token<'a> {
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();
        let token = match classify(self.cursor.current()) {
            ByteClass::Single(kind) => self.single(start, kind),
            ByteClass::EqualLead => self.equal(start),
            ByteClass::BangLead => self.bang(start),
            ByteClass::Letter => self.identifier(start),
            ByteClass::Digit => self.integer(start),
            ByteClass::Null if self.cursor.is_eof() => self.eof(),
            ByteClass::Null | ByteClass::Other => self.illegal(start),
        };
        trace!(kind = ?token.kind, literal = token.literal, span = %token.span, "token");
        token
    }

    /// Current byte offset; the start of the next token or of the
    /// whitespace before it.
    #[inline]
    pub fn offset(&self) -> usize {
        self.cursor.pos()
    }

    /// Returns `true` once `Eof` has been produced.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Token spanning `start` to the current position.
    #[inline]
    fn token(&self, kind: TokenKind, start: usize) -> Token<'a> {
        let end = self.cursor.pos();
        Token::new(kind, self.cursor.slice(start, end), Span::new(start, end))
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self) -> Token<'a> {
        if !self.finished {
            self.finished = true;
            debug!(len = self.cursor.source_len(), "end of input");
        }
        Token::eof(self.cursor.pos())
    }

    // ─── Operators & Delimiters ────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given kind.
    fn single(&mut self, start: usize, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        self.token(kind, start)
    }

    fn equal(&mut self, start: usize) -> Token<'a> {
        if self.cursor.peek() == b'=' {
            self.cursor.advance_n(2);
            self.token(TokenKind::Eq, start)
        } else {
            self.cursor.advance();
            self.token(TokenKind::Assign, start)
        }
    }

    fn bang(&mut self, start: usize) -> Token<'a> {
        if self.cursor.peek() == b'=' {
            self.cursor.advance_n(2);
            self.token(TokenKind::NotEq, start)
        } else {
            self.cursor.advance();
            self.token(TokenKind::Bang, start)
        }
    }

    // ─── Identifiers & Literals ────────────────────────────────────

    fn identifier(&mut self, start: usize) -> Token<'a> {
        self.cursor.eat_while(is_letter);
        let text = self.cursor.slice_from(start);
        let kind = self.keywords.lookup(text).unwrap_or(TokenKind::Ident);
        self.token(kind, start)
    }

    fn integer(&mut self, start: usize) -> Token<'a> {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.token(TokenKind::Int, start)
    }

    // ─── Errors ────────────────────────────────────────────────────

    /// Consume one unrecognized character.
    ///
    /// ASCII bytes are one byte long. A non-ASCII lead byte consumes the
    /// whole UTF-8 character so the literal stays a valid `&str`.
    fn illegal(&mut self, start: usize) -> Token<'a> {
        if self.cursor.current().is_ascii() {
            self.cursor.advance();
        } else {
            self.cursor.advance_char();
        }
        self.token(TokenKind::Illegal, start)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Tokenize a source string with the standard keywords.
///
/// Returns every token except the final `Eof`. For pull-based access,
/// construct a [`Scanner`] directly.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).collect()
}

/// Tokenize a source string against a caller-supplied keyword table.
pub fn tokenize_with<'a>(source: &'a str, keywords: &'a KeywordTable) -> Vec<Token<'a>> {
    Scanner::with_keywords(source, keywords).collect()
}
