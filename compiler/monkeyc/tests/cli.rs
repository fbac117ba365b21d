//! Driver command tests.
//!
//! Commands are exercised through their writer-based entry points so the
//! output can be compared without spawning the binary.

use std::io::Write;

use monkey_lexer::{KeywordTable, Span, Token, TokenKind};
use monkeyc::commands::{format_token, lex_path, run_repl, write_tokens, PROMPT};
use monkeyc::options::{KeywordSet, LexOptions};
use monkeyc::CliError;
use pretty_assertions::assert_eq;

fn lex_to_string(source: &str, options: &LexOptions) -> String {
    let table = options.keywords.table();
    let mut out = Vec::new();
    if let Err(err) = write_tokens(&mut out, source, &table, options) {
        panic!("writing to a Vec failed: {err}");
    }
    String::from_utf8_lossy(&out).into_owned()
}

// === Formatting ===

#[test]
fn format_plain_and_with_span() {
    let tok = Token::new(TokenKind::Ident, "five", Span::new(4, 8));
    assert_eq!(format_token(&tok, &LexOptions::default()), "Ident \"five\"");
    let spans = LexOptions {
        spans: true,
        ..LexOptions::default()
    };
    assert_eq!(format_token(&tok, &spans), "Ident \"five\" @ 4..8");
}

// === lex ===

#[test]
fn lex_let_statement() {
    let out = lex_to_string("let five = 5;", &LexOptions::default());
    assert_eq!(
        out,
        "Let \"let\"\nIdent \"five\"\nAssign \"=\"\nInt \"5\"\nSemicolon \";\"\n"
    );
}

#[test]
fn lex_with_eof_and_spans() {
    let options = LexOptions {
        spans: true,
        eof: true,
        ..LexOptions::default()
    };
    let out = lex_to_string("!= <", &options);
    assert_eq!(
        out,
        "NotEq \"!=\" @ 0..2\nLt \"<\" @ 3..4\nEof \"\" @ 4..4\n"
    );
}

#[test]
fn lex_empty_source_prints_nothing_without_eof() {
    assert_eq!(lex_to_string("", &LexOptions::default()), "");
}

#[test]
fn lex_illegal_is_printed_not_fatal() {
    let out = lex_to_string("5 @ 3", &LexOptions::default());
    assert_eq!(out, "Int \"5\"\nIllegal \"@\"\nInt \"3\"\n");
}

#[test]
fn lex_minimal_keywords() {
    let options = LexOptions {
        keywords: KeywordSet::Minimal,
        ..LexOptions::default()
    };
    let out = lex_to_string("if let", &options);
    assert_eq!(out, "Ident \"if\"\nLet \"let\"\n");
}

#[test]
fn write_tokens_counts_lines() {
    let mut out = Vec::new();
    let count = write_tokens(
        &mut out,
        "a b c",
        KeywordTable::standard(),
        &LexOptions::default(),
    );
    assert_eq!(count.ok(), Some(3));
}

#[test]
fn lex_path_reads_file() {
    let mut file = match tempfile::NamedTempFile::new() {
        Ok(file) => file,
        Err(err) => panic!("cannot create temp file: {err}"),
    };
    if let Err(err) = file.write_all(b"fn(x) { x }\n") {
        panic!("cannot write temp file: {err}");
    }
    let path = file.path().to_string_lossy().into_owned();

    let mut out = Vec::new();
    let result = lex_path(&path, &LexOptions::default(), &mut out);
    assert!(result.is_ok(), "{result:?}");
    assert_eq!(
        String::from_utf8_lossy(&out),
        "Function \"fn\"\nLParen \"(\"\nIdent \"x\"\nRParen \")\"\nLBrace \"{\"\nIdent \"x\"\nRBrace \"}\"\n"
    );
}

#[test]
fn lex_path_missing_file_is_read_error() {
    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(err) => panic!("cannot create temp dir: {err}"),
    };
    let path = dir.path().join("missing.mk");
    let path = path.to_string_lossy().into_owned();

    let mut out = Vec::new();
    let err = lex_path(&path, &LexOptions::default(), &mut out);
    match err {
        Err(err @ CliError::Read { .. }) => {
            assert_eq!(err.exit_code(), 1);
            assert!(err.to_string().contains("missing.mk"), "{err}");
        }
        other => panic!("expected read error, got {other:?}"),
    }
    assert!(out.is_empty());
}

// === repl ===

#[test]
fn repl_prints_tokens_per_line() {
    let input = "let x = 1;\n!=\n";
    let mut out = Vec::new();
    let result = run_repl(input.as_bytes(), &mut out, &LexOptions::default());
    assert!(result.is_ok(), "{result:?}");
    let expected = format!(
        "{PROMPT}Let \"let\"\nIdent \"x\"\nAssign \"=\"\nInt \"1\"\nSemicolon \";\"\n\
         {PROMPT}NotEq \"!=\"\n\
         {PROMPT}\n"
    );
    assert_eq!(String::from_utf8_lossy(&out), expected);
}

#[test]
fn repl_on_empty_input_just_prompts() {
    let mut out = Vec::new();
    let result = run_repl(&b""[..], &mut out, &LexOptions::default());
    assert!(result.is_ok(), "{result:?}");
    assert_eq!(String::from_utf8_lossy(&out), format!("{PROMPT}\n"));
}

// === Errors ===

#[test]
fn usage_error_exit_code() {
    assert_eq!(CliError::Usage("bad".to_owned()).exit_code(), 2);
    let write = CliError::from(std::io::Error::other("closed"));
    assert_eq!(write.exit_code(), 1);
    assert_eq!(write.to_string(), "cannot write output: closed");
}
