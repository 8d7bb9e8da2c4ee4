//! CLI module for tally
//!
//! This module provides the command-line interface that runs the built-in suites.
//!
//! ## Commands
//!
//! - `run [suite]` - Run a built-in suite and print its report to stderr
//! - `list` - List the built-in suites
//!
//! Running `tally` without a subcommand runs the default suite.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};

use crate::suites;
use crate::version::TALLY_VERSION;
use commands::RunOptions;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Run tally's built-in harness suites
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(version = TALLY_VERSION)]
#[command(about = "Run tally's built-in harness suites", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a built-in suite
    Run {
        /// Suite to run (see `tally list`)
        #[arg(value_name = "SUITE", default_value = "overview")]
        suite: String,
        /// Result buffer capacity (overrides the suite default)
        #[arg(long, value_name = "N")]
        slots: Option<u8>,
        /// Color the verdict of each test function
        #[arg(long)]
        color: bool,
        /// Exit with status 1 if any test function fails
        #[arg(long)]
        strict: bool,
    },

    /// List the built-in suites
    List,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Run {
            suite,
            slots,
            color,
            strict,
        }) => commands::run_suite(&suite, &RunOptions { slots, color, strict }),
        Some(Command::List) => commands::list_suites(),
        None => commands::run_suite(suites::default_suite().name, &RunOptions::default()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_run_defaults() {
        let cli = Cli::try_parse_from(["tally", "run"]).unwrap();
        if let Some(Command::Run {
            suite,
            slots,
            color,
            strict,
        }) = cli.command
        {
            assert_eq!(suite, "overview");
            assert_eq!(slots, None);
            assert!(!color);
            assert!(!strict);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_parse_run_with_flags() {
        let cli = Cli::try_parse_from(["tally", "run", "abort", "--slots", "9", "--color", "--strict"]).unwrap();
        if let Some(Command::Run {
            suite,
            slots,
            color,
            strict,
        }) = cli.command
        {
            assert_eq!(suite, "abort");
            assert_eq!(slots, Some(9));
            assert!(color);
            assert!(strict);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_rejects_slots_above_255() {
        assert!(Cli::try_parse_from(["tally", "run", "--slots", "256"]).is_err());
    }

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::try_parse_from(["tally", "list"]).unwrap();
        assert!(matches!(cli.command, Some(Command::List)));
    }

    #[test]
    fn test_strict_run_of_failing_suite_fails() {
        let cli = Cli::try_parse_from(["tally", "run", "overview", "--strict"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.is_empty());
    }

    #[test]
    fn test_lenient_run_of_failing_suite_succeeds() {
        let cli = Cli::try_parse_from(["tally", "run", "overview"]).unwrap();
        assert_eq!(execute(cli).unwrap(), ExitCode::SUCCESS);
    }
}
