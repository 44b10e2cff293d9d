//! Log output for the CLI.
//!
//! Events go to stderr so stdout stays reserved for the success message and
//! the `--check` listing. The subscriber is a registry with two layers: the
//! configured [`EnvFilter`] and a formatting layer chosen by [`LogFormat`].

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use crate::config::{Config, LogFormat};

type OutputLayer = Box<dyn Layer<Registry> + Send + Sync>;

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub(crate) enum TelemetryError {
    /// The log filter directive did not parse.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Another global subscriber was already installed.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(#[source] TryInitError),
}

/// Installs the global subscriber on first use.
///
/// The filter is validated on every call so a bad directive is reported even
/// when an earlier run in the same process already installed a subscriber.
pub(crate) fn initialise(config: &Config) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(config.log_filter())
        .map_err(|error| TelemetryError::Filter(error.to_string()))?;
    INSTALLED
        .get_or_try_init(|| {
            tracing_subscriber::registry()
                .with(output_layer(config.log_format()))
                .with(filter)
                .try_init()
                .map_err(TelemetryError::Subscriber)
        })
        .map(|_| ())
}

fn output_layer(format: LogFormat) -> OutputLayer {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_timer(fmt::time::UtcTime::rfc_3339());
    match format {
        LogFormat::Json => layer.json().flatten_event(true).boxed(),
        LogFormat::Compact => layer.compact().boxed(),
    }
}
