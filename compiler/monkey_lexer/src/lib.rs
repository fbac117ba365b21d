//! Scanner for the Monkey language.
//!
//! Turns source text into a stream of [`Token`]s, one per call to
//! [`Scanner::next_token()`]. The scanner borrows the source and a
//! [`KeywordTable`]; it allocates nothing and never fails.
//!
//! ```
//! use monkey_lexer::Scanner;
//! use monkey_token::TokenKind;
//!
//! let mut scanner = Scanner::new("let five = 5;");
//! assert_eq!(scanner.next_token().kind, TokenKind::Let);
//! assert_eq!(scanner.next_token().literal, "five");
//! ```
//!
//! # Tracing
//!
//! Every produced token is logged at `trace` level under the
//! `monkey_lexer::scanner` target; reaching end of input is logged once at
//! `debug`. Example: `RUST_LOG=monkey_lexer=trace monkey lex file.mk`.

mod cursor;
mod scanner;

pub use cursor::{Cursor, SENTINEL};
pub use monkey_token::{KeywordTable, Span, Token, TokenKind};
pub use scanner::{classify, is_letter, tokenize, tokenize_with, ByteClass, Scanner};
