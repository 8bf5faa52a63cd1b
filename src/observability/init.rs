//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber that receives the spans and events
//! emitted by the event handler and controllers.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with a formatting layer.
///
/// Sets up a pipeline that filters spans by the configured trace level and
/// writes them through `tracing-subscriber`'s fmt layer.
///
/// # Parameters
///
/// * `config` - Configuration containing the `trace_level` option
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call installs a
/// subscriber (`try_init` swallows the already-installed error). Hosts with
/// their own subscriber simply skip this.
///
/// # Example
///
/// ```
/// use shopfront::{observability::init_tracing, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer());

    let _ = subscriber.try_init();
}
