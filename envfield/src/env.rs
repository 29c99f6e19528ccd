//! Environment sources: where raw values are read from and unset
//!
//! Resolution goes through the [`EnvSource`] capability instead of touching
//! `std::env` directly. [`ProcessEnv`] is the real process environment;
//! [`MemoryEnv`] is an isolated in-memory map for tests and for callers
//! that want to snapshot the environment before loading.

use std::collections::HashMap;

/// Read/write access to an environment variable table.
///
/// Keys are case-sensitive exact strings. Values that are not valid
/// unicode are treated as absent.
pub trait EnvSource {
    /// Look up a variable.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a variable.
    fn set(&mut self, key: &str, value: &str);

    /// Remove a variable, returning its previous value if it was set.
    fn remove(&mut self, key: &str) -> Option<String>;

    /// Whether a variable is currently set.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// The process environment.
///
/// Access is direct and unsynchronized; concurrent resolution against
/// `ProcessEnv` from multiple threads is unsupported. Serialize resolution
/// calls or use [`MemoryEnv`] instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        let previous = std::env::var(key).ok()?;
        std::env::remove_var(key);
        Some(previous)
    }
}

/// An in-memory environment, detached from the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
}

impl MemoryEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_memory_env_get_set_remove() {
        let mut env = MemoryEnv::new();
        assert_eq!(env.get("KEY"), None);
        assert!(!env.contains("KEY"));

        env.set("KEY", "value");
        assert_eq!(env.get("KEY"), Some("value".to_string()));
        assert!(env.contains("KEY"));

        assert_eq!(env.remove("KEY"), Some("value".to_string()));
        assert_eq!(env.remove("KEY"), None);
    }

    #[test]
    fn test_memory_env_from_iter() {
        let env: MemoryEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.get("A"), Some("1".to_string()));
        assert_eq!(env.get("B"), Some("2".to_string()));
    }

    #[test]
    fn test_memory_env_is_case_sensitive() {
        let env: MemoryEnv = [("Key", "1")].into_iter().collect();
        assert_eq!(env.get("KEY"), None);
        assert_eq!(env.get("Key"), Some("1".to_string()));
    }

    #[test]
    #[serial]
    fn test_process_env_round_trip() {
        let mut env = ProcessEnv;
        env.set("ENVFIELD_ENV_TEST", "123");
        assert_eq!(env.get("ENVFIELD_ENV_TEST"), Some("123".to_string()));

        assert_eq!(env.remove("ENVFIELD_ENV_TEST"), Some("123".to_string()));
        assert_eq!(env.get("ENVFIELD_ENV_TEST"), None);
        assert_eq!(env.remove("ENVFIELD_ENV_TEST"), None);
    }
}
