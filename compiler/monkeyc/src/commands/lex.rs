//! `monkey lex`: print the token stream of a file or stdin.

use std::io::{self, Read, Write};
use std::path::Path;

use monkey_lexer::{KeywordTable, Scanner, Token};

use crate::options::LexOptions;
use crate::CliError;

/// Render one token as a single output line (without newline).
///
/// `Let "let"` or, with spans, `Let "let" @ 0..3`.
pub fn format_token(tok: &Token<'_>, options: &LexOptions) -> String {
    if options.spans {
        format!("{:?} {:?} @ {}", tok.kind, tok.literal, tok.span)
    } else {
        format!("{:?} {:?}", tok.kind, tok.literal)
    }
}

/// Scan `source` and write one line per token to `out`.
///
/// Returns the number of tokens written.
pub fn write_tokens(
    out: &mut impl Write,
    source: &str,
    keywords: &KeywordTable,
    options: &LexOptions,
) -> io::Result<usize> {
    let mut scanner = Scanner::with_keywords(source, keywords);
    let mut written = 0;
    loop {
        let tok = scanner.next_token();
        if tok.is_eof() && !options.eof {
            break;
        }
        writeln!(out, "{}", format_token(&tok, options))?;
        written += 1;
        if tok.is_eof() {
            break;
        }
    }
    Ok(written)
}

/// Read `path` (or stdin for `-`) and write its tokens to `out`.
#[tracing::instrument(level = "debug", skip(out, options))]
pub fn lex_path(path: &str, options: &LexOptions, out: &mut impl Write) -> Result<(), CliError> {
    let source = read_source(path)?;
    tracing::debug!(bytes = source.len(), "read source");

    let keywords = options.keywords.table();
    let count = write_tokens(out, &source, &keywords, options)?;
    out.flush()?;

    tracing::debug!(count, "tokens written");
    Ok(())
}

/// `monkey lex <file|->`: tokens go to stdout.
pub fn lex_file(path: &str, options: &LexOptions) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    lex_path(path, options, &mut out)
}

fn read_source(path: &str) -> Result<String, CliError> {
    let result = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(path)
    };
    result.map_err(|source| CliError::Read {
        path: Path::new(path).to_path_buf(),
        source,
    })
}
