use crate::error::SearchError;

use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a global subscriber: `RUST_LOG` when set, `default_directive` otherwise.
///
/// Hosts pass [`SearchConfig::log_filter`](crate::SearchConfig::log_filter) as
/// `default_directive`. A malformed directive is rejected even when `RUST_LOG`
/// overrides it. Does nothing if the host application already installed its
/// own subscriber.
pub fn init(default_directive: &str) -> Result<(), SearchError> {
	let fallback = directive_filter(default_directive)?;
	let filter = EnvFilter::try_from_default_env().unwrap_or(fallback);

	if tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer())
		.try_init()
		.is_err()
	{
		debug!("Global tracing subscriber already installed, keeping it");
	}

	Ok(())
}

pub(crate) fn directive_filter(directive: &str) -> Result<EnvFilter, SearchError> {
	EnvFilter::try_new(directive).map_err(|e| {
		SearchError::InvalidConfig(format!("invalid log directive '{directive}': {e}"))
	})
}
