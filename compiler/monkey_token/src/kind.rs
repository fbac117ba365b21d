//! Token kinds for Monkey.

use std::fmt;

/// Token kind.
///
/// Kinds are grouped into semantic ranges by discriminant:
///
/// | Range   | Category                      |
/// |---------|-------------------------------|
/// | 0-15    | Identifiers & literals        |
/// | 32-47   | Operators                     |
/// | 64-79   | Delimiters                    |
/// | 96-111  | Keywords                      |
/// | 240     | Illegal input                 |
/// | 255     | End of input                  |
///
/// Value-carrying kinds (`Ident`, `Int`, `Illegal`) keep their text in
/// [`Token::literal`](crate::Token::literal); the kind itself is a single byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Identifiers & Literals ===
    /// Identifier: letters and underscore only (`foo_bar`).
    Ident = 0,
    /// Unsigned decimal integer literal (`42`).
    Int = 1,

    // === Operators ===
    /// `=`
    Assign = 32,
    /// `+`
    Plus = 33,
    /// `-`
    Minus = 34,
    /// `!`
    Bang = 35,
    /// `*`
    Asterisk = 36,
    /// `/`
    Slash = 37,
    /// `<`
    Lt = 38,
    /// `>`
    Gt = 39,
    /// `==`
    Eq = 40,
    /// `!=`
    NotEq = 41,

    // === Delimiters ===
    /// `,`
    Comma = 64,
    /// `;`
    Semicolon = 65,
    /// `(`
    LParen = 66,
    /// `)`
    RParen = 67,
    /// `{`
    LBrace = 68,
    /// `}`
    RBrace = 69,

    // === Keywords ===
    /// `fn`
    Function = 96,
    /// `let`
    Let = 97,
    /// `true`
    True = 98,
    /// `false`
    False = 99,
    /// `if`
    If = 100,
    /// `else`
    Else = 101,
    /// `return`
    Return = 102,

    // === Errors ===
    /// A character no scanning rule accepts.
    Illegal = 240,

    // === Control ===
    /// End of input. Always the last token, with an empty literal.
    Eof = 255,
}

impl TokenKind {
    /// Every keyword kind, in declaration order.
    pub const KEYWORDS: [TokenKind; 7] = [
        TokenKind::Function,
        TokenKind::Let,
        TokenKind::True,
        TokenKind::False,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
    ];

    /// Returns the fixed source text for kinds that always spell the same way.
    ///
    /// Returns `None` for kinds whose text varies (`Ident`, `Int`, `Illegal`)
    /// and for `Eof`, which has no text.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Assign => Some("="),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Bang => Some("!"),
            TokenKind::Asterisk => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Lt => Some("<"),
            TokenKind::Gt => Some(">"),
            TokenKind::Eq => Some("=="),
            TokenKind::NotEq => Some("!="),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::LBrace => Some("{"),
            TokenKind::RBrace => Some("}"),
            TokenKind::Function => Some("fn"),
            TokenKind::Let => Some("let"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::Return => Some("return"),
            TokenKind::Ident | TokenKind::Int | TokenKind::Illegal | TokenKind::Eof => None,
        }
    }

    /// Returns `true` for reserved-word kinds.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self as u8, 96..=111)
    }

    /// Returns `true` for operator kinds.
    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(self as u8, 32..=47)
    }

    /// Returns `true` for delimiter kinds.
    #[inline]
    pub const fn is_delimiter(self) -> bool {
        matches!(self as u8, 64..=79)
    }

    /// Human-readable name, used in driver output and diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Illegal => "illegal character",
            TokenKind::Eof => "end of input",
            other => match other.lexeme() {
                Some(text) => text,
                None => "token",
            },
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
