//! Environment variable access.
//!
//! Everything that reads configuration from the process environment goes
//! through [`Environment`] so tests can supply a fixed set of variables.

use std::collections::HashMap;

/// Read-only lookup of named environment variables.
pub trait Environment {
    /// Returns the value of `key`, or `None` when it is unset or not valid unicode.
    fn get(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed key/value environment.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl Environment for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_env_returns_only_what_was_set() {
        let env = MapEnv::new().with("CHANGELOG_DIR", ".custom");
        assert_eq!(env.get("CHANGELOG_DIR").as_deref(), Some(".custom"));
        assert_eq!(env.get("CHANGELOG_KINDS"), None);
    }

    #[test]
    fn process_env_misses_unset_keys() {
        assert_eq!(ProcessEnv.get("NEW_CL_SURELY_UNSET_VARIABLE_7f3a"), None);
    }
}
