//! Environment Variable Table
//!
//! Every supported variable, its default, and the settings field it fills.
//! The loader walks this table once; nothing else in the crate names a
//! variable.

use super::ConfigError;
use super::settings::Settings;

/// Kind of value a variable holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Stored verbatim.
    Text,
    /// Parsed as a decimal integer.
    Integer,
}

enum Slot {
    Text(fn(&mut Settings) -> &mut String),
    OptionalText(fn(&mut Settings) -> &mut Option<String>),
    Integer(fn(&mut Settings) -> &mut i64),
}

/// A supported environment variable.
pub struct Variable {
    /// Variable name, matched exactly.
    pub key: &'static str,
    /// Dotted path of the settings field it fills.
    pub field: &'static str,
    /// Value used when the variable is unset or empty.
    pub default: &'static str,
    /// Dedicated host key for hosts that are looked up under a port key.
    pub host_key: Option<&'static str>,
    slot: Slot,
}

impl Variable {
    const fn text(
        key: &'static str,
        field: &'static str,
        default: &'static str,
        slot: fn(&mut Settings) -> &mut String,
    ) -> Self {
        Self {
            key,
            field,
            default,
            host_key: None,
            slot: Slot::Text(slot),
        }
    }

    const fn optional_text(
        key: &'static str,
        field: &'static str,
        default: &'static str,
        slot: fn(&mut Settings) -> &mut Option<String>,
    ) -> Self {
        Self {
            key,
            field,
            default,
            host_key: None,
            slot: Slot::OptionalText(slot),
        }
    }

    const fn integer(
        key: &'static str,
        field: &'static str,
        default: &'static str,
        slot: fn(&mut Settings) -> &mut i64,
    ) -> Self {
        Self {
            key,
            field,
            default,
            host_key: None,
            slot: Slot::Integer(slot),
        }
    }

    /// A host read from its sibling port variable unless the loader is told
    /// to use `host_key`.
    const fn shared_host(
        key: &'static str,
        host_key: &'static str,
        field: &'static str,
        default: &'static str,
        slot: fn(&mut Settings) -> &mut String,
    ) -> Self {
        Self {
            key,
            field,
            default,
            host_key: Some(host_key),
            slot: Slot::Text(slot),
        }
    }

    /// Kind of value this variable holds.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self.slot {
            Slot::Text(_) | Slot::OptionalText(_) => FieldKind::Text,
            Slot::Integer(_) => FieldKind::Integer,
        }
    }

    /// Write `value` into the field. `key` is the name it was read under.
    pub(crate) fn assign(
        &self,
        settings: &mut Settings,
        key: &'static str,
        value: &str,
    ) -> Result<(), ConfigError> {
        match self.slot {
            Slot::Text(field) => *field(settings) = value.to_string(),
            Slot::OptionalText(field) => *field(settings) = Some(value.to_string()),
            Slot::Integer(field) => {
                *field(settings) = value.parse().map_err(|source| ConfigError::InvalidInteger {
                    key,
                    value: value.to_string(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Variable")
            .field("key", &self.key)
            .field("field", &self.field)
            .field("default", &self.default)
            .field("host_key", &self.host_key)
            .field("kind", &self.kind())
            .finish()
    }
}

/// All supported variables, in resolution order.
pub static VARIABLES: &[Variable] = &[
    Variable::text("API-Version", "api_version", "1.0.0", |s| &mut s.api_version),
    Variable::text("Service-Name", "service_name", "", |s| &mut s.service_name),
    // Topics
    Variable::text(
        "Production-Initial-Topic",
        "production.initial_topic",
        "Initial",
        |s| &mut s.production.initial_topic,
    ),
    Variable::text(
        "Production-Sproot-Topic",
        "production.sproot_topic",
        "Sproot",
        |s| &mut s.production.sproot_topic,
    ),
    Variable::text(
        "Production-Loguna-Topic",
        "production.loguna_topic",
        "Loguna",
        |s| &mut s.production.loguna_topic,
    ),
    Variable::text(
        "Production-Hecatoncheir-Topic",
        "production.hecatoncheir_topic",
        "Hecatoncheir",
        |s| &mut s.production.hecatoncheir_topic,
    ),
    Variable::text(
        "Development-Initial-Topic",
        "development.initial_topic",
        "DevInitial",
        |s| &mut s.development.initial_topic,
    ),
    Variable::text(
        "Development-Sproot-Topic",
        "development.sproot_topic",
        "DevSproot",
        |s| &mut s.development.sproot_topic,
    ),
    Variable::text(
        "Development-Loguna-Topic",
        "development.loguna_topic",
        "DevLoguna",
        |s| &mut s.development.loguna_topic,
    ),
    Variable::text(
        "Development-Hecatoncheir-Topic",
        "development.hecatoncheir_topic",
        "DevHecatoncheir",
        |s| &mut s.development.hecatoncheir_topic,
    ),
    // Production services
    Variable::text(
        "Production-Broker-Host",
        "production.broker.host",
        "192.168.99.100",
        |s| &mut s.production.broker.host,
    ),
    Variable::integer(
        "Production-Broker-Port",
        "production.broker.port",
        "4222",
        |s| &mut s.production.broker.port,
    ),
    Variable::text(
        "Production-HTTPServer-Host",
        "production.http_server.host",
        "localhost",
        |s| &mut s.production.http_server.host,
    ),
    Variable::integer(
        "Production-HTTPServer-Port",
        "production.http_server.port",
        "80",
        |s| &mut s.production.http_server.port,
    ),
    Variable::optional_text(
        "Production-HTTPServer-StaticFilesDirectory",
        "production.http_server.static_files_directory",
        "build/web",
        |s| &mut s.production.http_server.static_files_directory,
    ),
    Variable::text(
        "Production-SocketServer-Host",
        "production.socket_server.host",
        "localhost",
        |s| &mut s.production.socket_server.host,
    ),
    Variable::integer(
        "Production-SocketServer-Port",
        "production.socket_server.port",
        "81",
        |s| &mut s.production.socket_server.port,
    ),
    // Development services
    Variable::text(
        "Development-Broker-Host",
        "development.broker.host",
        "192.168.99.100",
        |s| &mut s.development.broker.host,
    ),
    Variable::integer(
        "Development-Broker-Port",
        "development.broker.port",
        "4222",
        |s| &mut s.development.broker.port,
    ),
    Variable::shared_host(
        "Development-HTTPServer-Port",
        "Development-HTTPServer-Host",
        "development.http_server.host",
        "localhost",
        |s| &mut s.development.http_server.host,
    ),
    Variable::integer(
        "Development-HTTPServer-Port",
        "development.http_server.port",
        "8000",
        |s| &mut s.development.http_server.port,
    ),
    Variable::shared_host(
        "Development-SocketServer-Port",
        "Development-SocketServer-Host",
        "development.socket_server.host",
        "localhost",
        |s| &mut s.development.socket_server.host,
    ),
    Variable::integer(
        "Development-SocketServer-Port",
        "development.socket_server.port",
        "8001",
        |s| &mut s.development.socket_server.port,
    ),
    // Databases
    Variable::text(
        "Production-Database-Host",
        "production.database.host",
        "192.168.99.100",
        |s| &mut s.production.database.host,
    ),
    Variable::integer(
        "Production-Database-Port",
        "production.database.port",
        "9080",
        |s| &mut s.production.database.port,
    ),
    Variable::text(
        "Development-Database-Host",
        "development.database.host",
        "192.168.99.100",
        |s| &mut s.development.database.host,
    ),
    Variable::integer(
        "Development-Database-Port",
        "development.database.port",
        "9080",
        |s| &mut s.development.database.port,
    ),
    // Log files
    Variable::text(
        "Production-Log-File-Path",
        "production.log_file_path",
        "log",
        |s| &mut s.production.log_file_path,
    ),
    Variable::text(
        "Development-Log-File-Path",
        "development.log_file_path",
        "dev_log",
        |s| &mut s.development.log_file_path,
    ),
];

/// Look up a variable by the settings field it fills.
#[must_use]
pub fn variable_for_field(field: &str) -> Option<&'static Variable> {
    VARIABLES.iter().find(|v| v.field == field)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_field_appears_once() {
        let fields: HashSet<_> = VARIABLES.iter().map(|v| v.field).collect();
        assert_eq!(fields.len(), VARIABLES.len());
        assert_eq!(VARIABLES.len(), 29);
    }

    #[test]
    fn integer_defaults_parse() {
        for variable in VARIABLES.iter().filter(|v| v.kind() == FieldKind::Integer) {
            assert!(
                variable.default.parse::<i64>().is_ok(),
                "default for {} is not an integer",
                variable.key
            );
        }
    }

    #[test]
    fn only_service_name_defaults_to_empty() {
        let empty: Vec<_> = VARIABLES
            .iter()
            .filter(|v| v.default.is_empty())
            .map(|v| v.key)
            .collect();
        assert_eq!(empty, vec!["Service-Name"]);
    }

    #[test]
    fn shared_host_keys_point_at_port_variables() {
        let shared: Vec<_> = VARIABLES.iter().filter(|v| v.host_key.is_some()).collect();
        assert_eq!(shared.len(), 2);
        for variable in shared {
            assert!(variable.key.ends_with("-Port"));
            assert_eq!(variable.kind(), FieldKind::Text);
            let port = VARIABLES
                .iter()
                .find(|v| v.key == variable.key && v.kind() == FieldKind::Integer);
            assert!(port.is_some(), "no port variable shares {}", variable.key);
        }
    }

    #[test]
    fn lookup_by_field() {
        let variable = variable_for_field("production.broker.port").unwrap();
        assert_eq!(variable.key, "Production-Broker-Port");
        assert_eq!(variable.default, "4222");
        assert!(variable_for_field("production.unknown").is_none());
    }

    #[test]
    fn assign_rejects_non_integer() {
        let variable = variable_for_field("production.broker.port").unwrap();
        let mut settings = Settings::blank();
        let err = variable
            .assign(&mut settings, variable.key, "abc")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidInteger { key: "Production-Broker-Port", .. }
        ));
    }

    #[test]
    fn assign_optional_text_sets_some() {
        let variable = variable_for_field("production.http_server.static_files_directory").unwrap();
        let mut settings = Settings::blank();
        variable.assign(&mut settings, variable.key, "public").unwrap();
        assert_eq!(
            settings.production.http_server.static_files_directory.as_deref(),
            Some("public")
        );
    }
}
