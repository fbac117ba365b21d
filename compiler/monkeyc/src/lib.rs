//! Monkey command-line driver.
//!
//! Library half of the `monkey` binary. The commands take their input and
//! output streams as parameters so they can be driven from tests; `main.rs`
//! only parses arguments and wires in stdin/stdout.

pub mod commands;
mod error;
pub mod options;
mod tracing_setup;

pub use error::CliError;
pub use tracing_setup::init_tracing;
