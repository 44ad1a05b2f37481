//! Service Settings Types
//!
//! The resolved settings for both deployment profiles. Values are produced
//! by the loader and are not mutated afterwards.

use serde::{Deserialize, Serialize};

/// Deployment profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Production deployment.
    Production,
    /// Development deployment.
    #[default]
    Development,
}

impl Profile {
    /// Both profiles, production first.
    pub const ALL: [Self; 2] = [Self::Production, Self::Development];

    /// Parse profile from string.
    ///
    /// Anything other than `production` or `prod` selects development.
    #[must_use]
    pub fn from_str_case_insensitive(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    /// Get the profile name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }

    /// Check if this is the production profile.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message broker endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerEndpoint {
    /// Broker host.
    pub host: String,
    /// Broker port.
    pub port: i64,
}

/// HTTP server endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerEndpoint {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: i64,
    /// Directory served as static files. Only the production profile sets it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_files_directory: Option<String>,
}

/// Socket server endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketServerEndpoint {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: i64,
}

/// Database endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseEndpoint {
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: i64,
}

macro_rules! impl_address {
    ($($endpoint:ty),+ $(,)?) => {
        $(
            impl $endpoint {
                /// Get the `host:port` address.
                #[must_use]
                pub fn address(&self) -> String {
                    format!("{}:{}", self.host, self.port)
                }
            }
        )+
    };
}

impl_address!(
    BrokerEndpoint,
    HttpServerEndpoint,
    SocketServerEndpoint,
    DatabaseEndpoint,
);

/// Settings for a single deployment profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    /// Topic for initial messages.
    pub initial_topic: String,
    /// Sproot topic.
    pub sproot_topic: String,
    /// Loguna topic.
    pub loguna_topic: String,
    /// Hecatoncheir topic.
    pub hecatoncheir_topic: String,
    /// Path of the log file.
    pub log_file_path: String,
    /// Message broker.
    pub broker: BrokerEndpoint,
    /// HTTP server.
    pub http_server: HttpServerEndpoint,
    /// Socket server.
    pub socket_server: SocketServerEndpoint,
    /// Database.
    pub database: DatabaseEndpoint,
}

impl ProfileSettings {
    /// Topic names in fixed order: initial, sproot, loguna, hecatoncheir.
    #[must_use]
    pub fn topics(&self) -> [&str; 4] {
        [
            self.initial_topic.as_str(),
            self.sproot_topic.as_str(),
            self.loguna_topic.as_str(),
            self.hecatoncheir_topic.as_str(),
        ]
    }

    fn blank() -> Self {
        Self {
            initial_topic: String::new(),
            sproot_topic: String::new(),
            loguna_topic: String::new(),
            hecatoncheir_topic: String::new(),
            log_file_path: String::new(),
            broker: BrokerEndpoint {
                host: String::new(),
                port: 0,
            },
            http_server: HttpServerEndpoint {
                host: String::new(),
                port: 0,
                static_files_directory: None,
            },
            socket_server: SocketServerEndpoint {
                host: String::new(),
                port: 0,
            },
            database: DatabaseEndpoint {
                host: String::new(),
                port: 0,
            },
        }
    }
}

/// Complete service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// API version.
    pub api_version: String,
    /// Service name.
    pub service_name: String,
    /// Production profile.
    pub production: ProfileSettings,
    /// Development profile.
    pub development: ProfileSettings,
}

impl Settings {
    /// Get the settings for a profile.
    #[must_use]
    pub const fn profile(&self, profile: Profile) -> &ProfileSettings {
        match profile {
            Profile::Production => &self.production,
            Profile::Development => &self.development,
        }
    }

    /// Scaffold the loader fills in. Every field is overwritten by the
    /// variable table before the value leaves the loader.
    pub(crate) fn blank() -> Self {
        Self {
            api_version: String::new(),
            service_name: String::new(),
            production: ProfileSettings::blank(),
            development: ProfileSettings::blank(),
        }
    }
}
