//! CLI argument definitions for the resource rewriter.

use std::path::PathBuf;

use clap::Parser;

use crate::config::LogFormat;

/// Rewrites string-named `UIImage`, `UIColor`, `Image` and `Color` lookups in
/// Swift sources into typed resource accessors.
#[derive(Parser, Debug)]
#[command(name = "resource-rewriter", version)]
pub(crate) struct Cli {
    /// Swift files, or directories searched recursively for `*.swift` files.
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub(crate) paths: Vec<PathBuf>,
    /// Lists files that would change without writing them; exits non-zero
    /// when any would.
    #[arg(long)]
    pub(crate) check: bool,
    /// Tracing filter directives, for example `info` or `rewriter_cli=debug`.
    #[arg(
        long,
        value_name = "FILTER",
        env = "RESOURCE_REWRITER_LOG_FILTER",
        default_value = "warn"
    )]
    pub(crate) log_filter: String,
    /// Log line format written to stderr (`compact` or `json`).
    #[arg(
        long,
        value_name = "FORMAT",
        env = "RESOURCE_REWRITER_LOG_FORMAT",
        default_value_t = LogFormat::Compact
    )]
    pub(crate) log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use rstest::rstest;

    #[test]
    fn parses_paths_and_flags() {
        let cli = Cli::try_parse_from([
            "resource-rewriter",
            "--check",
            "--log-format",
            "JSON",
            "Sources",
            "App.swift",
        ])
        .expect("parse");

        assert!(cli.check);
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(
            cli.paths,
            vec![PathBuf::from("Sources"), PathBuf::from("App.swift")]
        );
    }

    #[rstest]
    #[case(&["resource-rewriter"], ErrorKind::MissingRequiredArgument)]
    #[case(&["resource-rewriter", "--log-format", "xml", "a.swift"], ErrorKind::InvalidValue)]
    #[case(&["resource-rewriter", "--help"], ErrorKind::DisplayHelp)]
    fn rejects_or_short_circuits(#[case] args: &[&str], #[case] kind: ErrorKind) {
        let error = Cli::try_parse_from(args).expect_err("should not parse");
        assert_eq!(error.kind(), kind);
    }
}
