pub mod climate;
pub mod config;
pub mod hass;
pub mod ir;
pub mod mqtt;
pub mod protocol;
pub mod sensor;
pub mod settings;
pub mod transmit;

use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `RUST_LOG` or else `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
