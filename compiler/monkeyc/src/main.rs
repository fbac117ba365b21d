//! Monkey CLI
//!
//! Front-end for the Monkey scanner.

use monkeyc::commands::{lex_file, run_repl_stdio};
use monkeyc::options::parse_args;
use monkeyc::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        if matches!(err, CliError::Usage(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(err.exit_code());
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };
    tracing::debug!(command = command.as_str(), "dispatch");

    match command.as_str() {
        "lex" => {
            let parsed = parse_args(&args[2..])?;
            match parsed.inputs.as_slice() {
                [path] => lex_file(path, &parsed.options),
                [] => Err(CliError::Usage("missing file path".to_owned())),
                _ => Err(CliError::Usage("expected exactly one input".to_owned())),
            }
        }
        "repl" => {
            let parsed = parse_args(&args[2..])?;
            if !parsed.inputs.is_empty() {
                return Err(CliError::Usage("repl takes no inputs".to_owned()));
            }
            println!("Monkey tokens REPL. Type a line; Ctrl-D to exit.");
            run_repl_stdio(&parsed.options)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(CliError::Usage(format!("unknown command '{other}'"))),
    }
}

fn print_usage() {
    eprintln!("Usage: monkey <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex <file|->      Print the tokens of a file (- reads stdin)");
    eprintln!("  repl              Tokenize lines typed interactively");
    eprintln!("  help              Show this message");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --keywords=<set>  Keyword table: standard (default), minimal");
    eprintln!("  --spans           Show the byte span of each token");
    eprintln!("  --eof             Also print the final Eof token");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=monkey_lexer=trace) for tracing output.");
}
