//! Command-line options shared by `lex` and `repl`.

use std::borrow::Cow;

use monkey_token::KeywordTable;

use crate::CliError;

/// Which built-in keyword table the scanner resolves identifiers against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeywordSet {
    /// `fn let true false if else return`
    #[default]
    Standard,
    /// `fn let`
    Minimal,
}

impl KeywordSet {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(KeywordSet::Standard),
            "minimal" => Some(KeywordSet::Minimal),
            _ => None,
        }
    }

    /// Keyword table for this set. The standard table is shared, not copied.
    pub fn table(self) -> Cow<'static, KeywordTable> {
        match self {
            KeywordSet::Standard => Cow::Borrowed(KeywordTable::standard()),
            KeywordSet::Minimal => Cow::Owned(KeywordTable::minimal()),
        }
    }
}

/// How tokens are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub keywords: KeywordSet,
    /// Append ` @ start..end` to each token line.
    pub spans: bool,
    /// Also print the final `Eof` token.
    pub eof: bool,
}

/// Options plus the positional arguments left after removing them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub options: LexOptions,
    pub inputs: Vec<String>,
}

/// Split `args` into options and positional inputs.
///
/// A lone `-` is positional (stdin). Anything else starting with `-` must be
/// a known option.
pub fn parse_args(args: &[String]) -> Result<ParsedArgs, CliError> {
    let mut parsed = ParsedArgs::default();

    for arg in args {
        if arg == "--spans" {
            parsed.options.spans = true;
        } else if arg == "--eof" {
            parsed.options.eof = true;
        } else if let Some(set) = arg.strip_prefix("--keywords=") {
            parsed.options.keywords = KeywordSet::from_str(set).ok_or_else(|| {
                CliError::Usage(format!(
                    "unknown keyword set '{set}', options: standard, minimal"
                ))
            })?;
        } else if arg == "-" || !arg.starts_with('-') {
            parsed.inputs.push(arg.clone());
        } else {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        }
    }

    Ok(parsed)
}
