//! Driver commands.

mod lex;
mod repl;

pub use lex::{format_token, lex_file, lex_path, write_tokens};
pub use repl::{run_repl, run_repl_stdio, PROMPT};
