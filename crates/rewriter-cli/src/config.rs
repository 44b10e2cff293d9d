//! Resolved runtime configuration.
//!
//! Arguments and their environment fallbacks are merged by clap; this module
//! turns the parsed [`Cli`] into the settings the runner and telemetry read.

use std::path::PathBuf;

use strum::{Display, EnumString};

use crate::cli::Cli;

/// Supported logging output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// Structured JSON suitable for ingestion by logging stacks.
    Json,
    /// Human-readable single line output.
    #[default]
    Compact,
}

/// Whether rewritten sources are written back or only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunMode {
    Write,
    Check,
}

/// Settings for one invocation.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    paths: Vec<PathBuf>,
    mode: RunMode,
    log_filter: String,
    log_format: LogFormat,
}

impl Config {
    pub(crate) fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub(crate) const fn mode(&self) -> RunMode {
        self.mode
    }

    pub(crate) fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub(crate) const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            paths: cli.paths,
            mode: if cli.check {
                RunMode::Check
            } else {
                RunMode::Write
            },
            log_filter: cli.log_filter,
            log_format: cli.log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("json", LogFormat::Json)]
    #[case("JSON", LogFormat::Json)]
    #[case("compact", LogFormat::Compact)]
    #[case("Compact", LogFormat::Compact)]
    fn log_format_parses_case_insensitively(#[case] input: &str, #[case] expected: LogFormat) {
        assert_eq!(input.parse::<LogFormat>().expect("parse"), expected);
    }

    #[test]
    fn log_format_displays_snake_case() {
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(LogFormat::default().to_string(), "compact");
    }

    #[test]
    fn check_flag_selects_check_mode() {
        let cli = Cli {
            paths: vec![PathBuf::from("App.swift")],
            check: true,
            log_filter: "info".to_owned(),
            log_format: LogFormat::Json,
        };
        let config = Config::from(cli);

        assert_eq!(config.mode(), RunMode::Check);
        assert_eq!(config.paths(), [PathBuf::from("App.swift")]);
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.log_format(), LogFormat::Json);
    }
}
