#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::needless_pass_by_value,
        clippy::too_many_lines
    )
)]

//! Service Settings - Deployment profile configuration
//!
//! Resolves the settings shared by the broker client, HTTP server, socket
//! server, database client and log writer from environment variables.
//!
//! # Profiles
//!
//! - **Production**: topics, log path, broker, HTTP server (with a static
//!   files directory), socket server and database
//! - **Development**: the same set without the static files directory
//!
//! Every variable is optional; unset or empty variables take the defaults
//! listed in [`config::VARIABLES`]. Port variables must hold integers.
//!
//! ```rust,ignore
//! use service_settings::{Profile, Settings};
//!
//! let settings = Settings::from_env()?;
//! assert_eq!(settings.profile(Profile::Development).http_server.port, 8000);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Environment-driven settings.
pub mod config;

pub use config::{
    BrokerEndpoint, ConfigError, DatabaseEndpoint, EnvSource, HostLookup, HttpServerEndpoint,
    Loader, ProcessEnv, Profile, ProfileSettings, Settings, SocketServerEndpoint, load,
};
