//! `monkey repl`: tokenize interactive input line by line.

use std::io::{self, BufRead, Write};

use crate::commands::lex::write_tokens;
use crate::options::LexOptions;
use crate::CliError;

pub const PROMPT: &str = ">> ";

/// Read lines from `input` until it is exhausted, printing the tokens of
/// each line to `output` after a prompt.
pub fn run_repl(
    mut input: impl BufRead,
    output: &mut impl Write,
    options: &LexOptions,
) -> Result<(), CliError> {
    let keywords = options.keywords.table();
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        let read = input.read_line(&mut line).map_err(|source| CliError::Read {
            path: "-".into(),
            source,
        })?;
        if read == 0 {
            writeln!(output)?;
            tracing::debug!("repl input closed");
            return Ok(());
        }
        write_tokens(output, &line, &keywords, options)?;
    }
}

/// Run the REPL on the process's stdin and stdout.
pub fn run_repl_stdio(options: &LexOptions) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_repl(stdin.lock(), &mut out, options)
}
