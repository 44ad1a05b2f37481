//! Environment Sources
//!
//! Where the loader reads variables from: the process environment or an
//! injected mapping.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A read-only mapping from variable name to value.
pub trait EnvSource {
    /// Look up a variable by its exact name.
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for [(&str, &str)] {
    fn var(&self, key: &str) -> Option<String> {
        self.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_env_missing_variable() {
        assert_eq!(ProcessEnv.var("SERVICE_SETTINGS_TEST_UNLIKELY_TO_EXIST"), None);
    }

    #[test]
    fn process_env_reads_path() {
        // PATH should always exist
        assert!(ProcessEnv.var("PATH").is_some());
    }

    #[test]
    fn hash_map_lookup_is_exact() {
        let env: HashMap<String, String> =
            HashMap::from([("Production-Broker-Host".to_string(), "broker".to_string())]);
        assert_eq!(env.var("Production-Broker-Host").as_deref(), Some("broker"));
        assert_eq!(env.var("production-broker-host"), None);
    }

    #[test]
    fn pair_slice_lookup() {
        let env: &[(&str, &str)] = &[("API-Version", "2.0.0")];
        assert_eq!(env.var("API-Version").as_deref(), Some("2.0.0"));
        assert_eq!(env.var("Service-Name"), None);
    }
}
