//! Tracing setup: env-filtered fmt subscriber, optionally JSON.

use timbre_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber from config. The env var named in
/// `log_env` (default `TIMBRE_LOG`) wins over `log_level`.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(&config.log_env)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json_output)
}

/// Initialize tracing with an explicit filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str, json: bool) -> bool {
    install(EnvFilter::new(filter), json)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
