//! Service Settings Binary
//!
//! Resolves the service settings from the process environment and reports
//! them. Exits non-zero when a port variable is malformed, so a deployment
//! fails before any service starts.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin service-settings
//! ```
//!
//! # Environment Variables
//!
//! All optional; see `service_settings::config::VARIABLES` for the full
//! list and defaults.
//! - `API-Version`: API version (default: 1.0.0)
//! - `Service-Name`: Service name (default: empty)
//! - `Production-Broker-Host` / `Production-Broker-Port`: (default: 192.168.99.100:4222)
//! - `Development-HTTPServer-Port`: Development HTTP port (default: 8000)
//! - `RUST_LOG`: Log level (default: info)

use anyhow::Context;
use service_settings::{Profile, Settings};

fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Resolving service settings"
    );

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, key = e.key(), "Invalid configuration, aborting startup");
            return Err(e).context("failed to load settings from environment");
        }
    };

    log_settings(&settings);
    Ok(())
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses a static directive string that is a compile-time constant guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "service_settings=info"
                    .parse()
                    .expect("static directive 'service_settings=info' is valid"),
            ),
        )
        .with_target(true)
        .init();
}

/// Log the resolved settings.
fn log_settings(settings: &Settings) {
    tracing::info!(
        api_version = %settings.api_version,
        service_name = %settings.service_name,
        "Configuration loaded"
    );

    for profile in Profile::ALL {
        let p = settings.profile(profile);
        tracing::info!(
            profile = profile.as_str(),
            broker = %p.broker.address(),
            http_server = %p.http_server.address(),
            socket_server = %p.socket_server.address(),
            database = %p.database.address(),
            log_file_path = %p.log_file_path,
            "Profile endpoints"
        );
        tracing::debug!(
            profile = profile.as_str(),
            topics = ?p.topics(),
            static_files_directory = ?p.http_server.static_files_directory,
            "Profile topics"
        );
    }

    match serde_json::to_string(settings) {
        Ok(json) => tracing::debug!(settings = %json, "Resolved settings"),
        Err(e) => tracing::warn!(error = %e, "Failed to serialize settings"),
    }
}
