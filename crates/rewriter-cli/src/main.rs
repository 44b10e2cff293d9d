//! CLI entrypoint for the resource rewriter.
//!
//! The binary delegates to [`rewriter_cli::run`], which parses arguments,
//! installs telemetry, and rewrites the requested Swift sources.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    rewriter_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
