//! Log output setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::Error;

/// Install the global tracing subscriber, writing pretty logs to stderr.
///
/// `RUST_LOG` takes precedence over `default_level`, e.g. "debug" or
/// "expense_insights=trace".
///
/// # Errors
///
/// Returns [Error::InvalidConfig] if `default_level` is not a valid filter or
/// a global subscriber has already been installed.
pub fn setup_logging(default_level: &str) -> Result<(), Error> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level).map_err(|error| {
            Error::InvalidConfig(format!("invalid log level \"{default_level}\": {error}"))
        })?,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_log)
        .try_init()
        .map_err(|error| Error::InvalidConfig(format!("could not set up logging: {error}")))
}
