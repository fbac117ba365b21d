//! Monkey token catalog.
//!
//! This crate is the vocabulary shared by the scanner and anything that
//! consumes its output:
//! - [`TokenKind`]: the closed set of token kinds
//! - [`Token`] and [`Span`]: a scanned token and its source location
//! - [`KeywordTable`]: reserved words mapped to their keyword kind
//!
//! The keyword table is a value, not ambient state. The scanner is handed
//! a table at construction; [`KeywordTable::standard()`] is the shared
//! default built once per process.

mod keywords;
mod kind;
mod token;

pub use keywords::{KeywordError, KeywordTable};
pub use kind::TokenKind;
pub use token::{Span, Token};
