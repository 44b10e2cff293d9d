//! Command-line runtime for the resource rewriter.
//!
//! The runtime parses arguments, installs telemetry, expands directories into
//! Swift sources, and rewrites each file in turn. Processing is fail-fast: the
//! first unreadable, unparsable or unwritable file stops the run with a
//! diagnostic naming it. IO streams are injected so tests can drive the
//! runtime in-process.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use rewriter_syntax::{RewriteResult, transform};
use tracing::{debug, error, info};

mod cli;
mod config;
mod errors;
mod files;
mod telemetry;

use cli::Cli;
pub use config::LogFormat;
use config::{Config, RunMode};
use errors::AppError;
use files::{collect_swift_files, write_atomically};

const CLI_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Printed after every file has been rewritten.
pub const SUCCESS_MESSAGE: &str = "String literals were successfully rewritten as resources.";

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(usage) => return report_usage(usage, stdout, stderr),
    };
    let config = Config::from(cli);

    match execute(&config, stdout) {
        Ok(exit_code) => exit_code,
        Err(failure) => {
            error!(
                target: CLI_TARGET,
                event = "run_failed",
                error = %failure,
                "rewrite run failed"
            );
            let _ = writeln!(stderr, "{failure}");
            ExitCode::FAILURE
        }
    }
}

/// Help and version requests are successful output; everything else clap
/// rejects is a usage error.
fn report_usage<W: Write, E: Write>(usage: clap::Error, stdout: &mut W, stderr: &mut E) -> ExitCode {
    if matches!(usage.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        let _ = write!(stdout, "{usage}");
        return ExitCode::SUCCESS;
    }
    let _ = write!(stderr, "{}", AppError::CliUsage(usage));
    ExitCode::FAILURE
}

#[derive(Debug, Default)]
struct RunSummary {
    files: usize,
    changed: Vec<PathBuf>,
    replacements: usize,
}

fn execute<W: Write>(config: &Config, stdout: &mut W) -> Result<ExitCode, AppError> {
    telemetry::initialise(config)?;

    let mut summary = RunSummary::default();
    for path in collect_swift_files(config.paths())? {
        summary.files = summary.files.saturating_add(1);
        let Some(result) = process_file(&path, config.mode())? else {
            continue;
        };
        summary.replacements = summary
            .replacements
            .saturating_add(result.num_replacements());
        summary.changed.push(path);
    }

    info!(
        target: CLI_TARGET,
        event = "run_completed",
        files = summary.files,
        changed = summary.changed.len(),
        replacements = summary.replacements,
        check = matches!(config.mode(), RunMode::Check),
        "rewrite run completed"
    );

    match config.mode() {
        RunMode::Write => {
            writeln!(stdout, "{SUCCESS_MESSAGE}").map_err(AppError::Output)?;
            Ok(ExitCode::SUCCESS)
        }
        RunMode::Check => {
            for path in &summary.changed {
                writeln!(stdout, "{}", path.display()).map_err(AppError::Output)?;
            }
            Ok(if summary.changed.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

/// Rewrites one file, returning the result when its contents changed.
fn process_file(path: &Path, mode: RunMode) -> Result<Option<RewriteResult>, AppError> {
    let contents = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let result = transform(&contents).map_err(|source| AppError::Rewrite {
        path: path.to_path_buf(),
        source,
    })?;

    if !result.has_changes() {
        debug!(
            target: CLI_TARGET,
            event = "file_unchanged",
            path = %path.display(),
            "no resource lookups to rewrite"
        );
        return Ok(None);
    }

    match mode {
        RunMode::Write => {
            write_atomically(path, result.output()).map_err(|source| AppError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!(
                target: CLI_TARGET,
                event = "file_rewritten",
                path = %path.display(),
                replacements = result.num_replacements(),
                "rewrote resource lookups"
            );
        }
        RunMode::Check => {
            info!(
                target: CLI_TARGET,
                event = "file_pending",
                path = %path.display(),
                replacements = result.num_replacements(),
                "resource lookups need rewriting"
            );
        }
    }
    Ok(Some(result))
}

#[cfg(test)]
mod tests;
