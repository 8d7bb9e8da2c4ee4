//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::{self, Write};

use tally_core::{ConsoleConfig, ConsoleReporter, Harness};

use crate::suites::{self, Suite};

use super::{CliError, CliResult, ExitCode};

/// Options for the `run` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Buffer capacity override; the suite's default when `None`
    pub slots: Option<u8>,
    /// Colored verdicts
    pub color: bool,
    /// Exit with a failure code when any test function fails
    pub strict: bool,
}

/// Run the named suite, reporting to stderr.
pub fn run_suite(name: &str, options: &RunOptions) -> CliResult<ExitCode> {
    let suite = suites::find(name).ok_or_else(|| {
        CliError::failure(format!(
            "Error: unknown suite '{}'\nRun `tally list` to see the available suites",
            name
        ))
    })?;

    let (all_passed, _) = run_suite_to(suite, options, io::stderr())?;

    if options.strict && !all_passed {
        // Report already printed
        Err(CliError::new("", ExitCode::FAILURE))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Run a suite and write its report to `writer`.
///
/// ## Returns
/// - `(bool, W)`: whether every test function passed, and the writer.
pub fn run_suite_to<W: Write>(suite: &Suite, options: &RunOptions, writer: W) -> CliResult<(bool, W)> {
    let slots = options.slots.unwrap_or(suite.slots);
    tracing::debug!(suite = suite.name, slots, "running suite");

    // Large enough for any 8-bit capacity; stays on the stack.
    let mut results = [false; 255];
    let mut reporter = ConsoleReporter::with_config(writer, ConsoleConfig::new().with_color(options.color));

    let all_passed = Harness::with_capacity(&mut results, slots, suite.functions, &mut reporter)
        .map_err(|e| CliError::failure(format!("Error: {}", e)))?
        .run();

    if let Some(err) = reporter.take_error() {
        return Err(CliError::failure(format!("Error writing report: {}", err)));
    }

    Ok((all_passed, reporter.into_inner()))
}

/// Print the built-in suites to stdout.
pub fn list_suites() -> CliResult<ExitCode> {
    let mut stdout = io::stdout().lock();
    write_suite_list(&mut stdout).map_err(|e| CliError::failure(format!("Error writing suite list: {}", e)))?;
    Ok(ExitCode::SUCCESS)
}

fn write_suite_list(out: &mut impl Write) -> io::Result<()> {
    for suite in suites::SUITES {
        writeln!(
            out,
            "{:<10} {:>3} slots  {}",
            suite.name, suite.slots, suite.description
        )?;
    }
    Ok(())
}
