//! Settings Loader
//!
//! Resolves [`Settings`] from an [`EnvSource`] by walking [`VARIABLES`].

use std::collections::BTreeMap;

use super::ConfigError;
use super::settings::Settings;
use super::source::{EnvSource, ProcessEnv};
use super::variables::{VARIABLES, Variable};

/// Which variable the development HTTP and socket server hosts are read from.
///
/// The deployed variable set names both hosts after the port variables, so
/// a value set for `Development-HTTPServer-Port` lands in the host and the
/// port. `SharedPortKey` keeps that naming until deployments confirm the
/// dedicated `-Host` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostLookup {
    /// Read the host from the sibling `-Port` variable.
    #[default]
    SharedPortKey,
    /// Read the host from its own `-Host` variable.
    DedicatedHostKey,
}

/// Settings loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct Loader {
    host_lookup: HostLookup,
}

impl Loader {
    /// Create a loader with the default host lookup.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            host_lookup: HostLookup::SharedPortKey,
        }
    }

    /// Set how shared development host keys are resolved.
    #[must_use]
    pub const fn with_host_lookup(mut self, host_lookup: HostLookup) -> Self {
        self.host_lookup = host_lookup;
        self
    }

    /// Get the configured host lookup.
    #[must_use]
    pub const fn host_lookup(&self) -> HostLookup {
        self.host_lookup
    }

    /// Resolve settings from `source`.
    ///
    /// Unset and empty variables take their defaults. Fails on the first
    /// integer variable that does not parse.
    pub fn load<S: EnvSource + ?Sized>(&self, source: &S) -> Result<Settings, ConfigError> {
        let mut snapshot = Snapshot::new(source);
        let mut settings = Settings::blank();
        let mut defaulted = 0_usize;

        for variable in VARIABLES {
            let key = self.key_for(variable);

            let value = if let Some(value) = snapshot.get(key) {
                if variable.host_key.is_some() && self.host_lookup == HostLookup::SharedPortKey {
                    tracing::warn!(
                        key,
                        field = variable.field,
                        "Port variable also sets the host; use the dedicated host key to separate them"
                    );
                }
                value
            } else {
                defaulted += 1;
                tracing::debug!(key, default = variable.default, "Variable unset, using default");
                variable.default
            };

            variable.assign(&mut settings, key, value)?;
        }

        tracing::debug!(
            variables = VARIABLES.len(),
            defaulted,
            reads = snapshot.reads(),
            "Settings resolved"
        );

        Ok(settings)
    }

    fn key_for(&self, variable: &Variable) -> &'static str {
        match (self.host_lookup, variable.host_key) {
            (HostLookup::DedicatedHostKey, Some(host_key)) => host_key,
            _ => variable.key,
        }
    }
}

/// Resolve settings from `source` with the default loader.
pub fn load<S: EnvSource + ?Sized>(source: &S) -> Result<Settings, ConfigError> {
    Loader::new().load(source)
}

impl Settings {
    /// Create settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load(&ProcessEnv)
    }
}

/// Values read from a source, each key at most once.
struct Snapshot<'a, S: ?Sized> {
    source: &'a S,
    values: BTreeMap<&'static str, Option<String>>,
}

impl<'a, S: EnvSource + ?Sized> Snapshot<'a, S> {
    const fn new(source: &'a S) -> Self {
        Self {
            source,
            values: BTreeMap::new(),
        }
    }

    /// Non-empty value of `key`, if any.
    fn get(&mut self, key: &'static str) -> Option<&str> {
        let source = self.source;
        self.values
            .entry(key)
            .or_insert_with(|| source.var(key))
            .as_deref()
            .filter(|v| !v.is_empty())
    }

    fn reads(&self) -> usize {
        self.values.len()
    }
}
