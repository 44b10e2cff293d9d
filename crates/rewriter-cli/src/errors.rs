//! Error types for the CLI runtime.

use std::io;
use std::path::PathBuf;

use rewriter_syntax::SyntaxError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to rewrite {}: {source}", path.display())]
    Rewrite { path: PathBuf, source: SyntaxError },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to emit output: {0}")]
    Output(io::Error),
}
