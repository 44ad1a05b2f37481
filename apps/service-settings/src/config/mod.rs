//! Configuration Module
//!
//! Environment-driven settings for the production and development profiles.
//!
//! # Usage
//!
//! ```rust,ignore
//! use service_settings::config::{Profile, Settings};
//!
//! let settings = Settings::from_env()?;
//! let broker = &settings.profile(Profile::Production).broker;
//! println!("broker: {}", broker.address());
//! ```

mod loader;
mod settings;
mod source;
mod variables;

use std::num::ParseIntError;

use thiserror::Error;

pub use loader::{HostLookup, Loader, load};
pub use settings::{
    BrokerEndpoint, DatabaseEndpoint, HttpServerEndpoint, Profile, ProfileSettings, Settings,
    SocketServerEndpoint,
};
pub use source::{EnvSource, ProcessEnv};
pub use variables::{FieldKind, VARIABLES, Variable, variable_for_field};

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An integer variable holds a value that does not parse.
    #[error("environment variable {key} must be an integer, got {value:?}: {source}")]
    InvalidInteger {
        /// Variable name.
        key: &'static str,
        /// Raw value as read.
        value: String,
        /// The underlying parse error.
        source: ParseIntError,
    },
}

impl ConfigError {
    /// Name of the variable that failed.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::InvalidInteger { key, .. } => *key,
        }
    }
}
