use crate::env::Environment;
use std::fmt;

pub const CHANGELOG_DIR_ENV: &str = "CHANGELOG_DIR";
pub const DEFAULT_CHANGELOG_DIR: &str = ".changelog";

pub const CHANGELOG_KINDS_ENV: &str = "CHANGELOG_KINDS";
pub const DEFAULT_CHANGELOG_KINDS: &str = "bug,improvement,security,breaking-change,deprecation,note";

/// Settings for one invocation, resolved once from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub changelog_dir: String,
    pub kinds: KindVocabulary,
}

impl Config {
    /// Reads `CHANGELOG_DIR` and `CHANGELOG_KINDS`; unset or empty values fall back to defaults.
    pub fn from_env(env: &dyn Environment) -> Self {
        let changelog_dir = non_empty(env, CHANGELOG_DIR_ENV)
            .unwrap_or_else(|| DEFAULT_CHANGELOG_DIR.to_string());
        let kinds = non_empty(env, CHANGELOG_KINDS_ENV)
            .map(|value| KindVocabulary::parse(&value))
            .unwrap_or_default();

        Config {
            changelog_dir,
            kinds,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            changelog_dir: DEFAULT_CHANGELOG_DIR.to_string(),
            kinds: KindVocabulary::default(),
        }
    }
}

fn non_empty(env: &dyn Environment, key: &str) -> Option<String> {
    env.get(key).filter(|value| !value.is_empty())
}

/// The ordered set of accepted note kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindVocabulary {
    kinds: Vec<String>,
}

impl KindVocabulary {
    /// Splits a comma-separated list. Entries are kept exactly as written.
    pub fn parse(list: &str) -> Self {
        KindVocabulary {
            kinds: list.split(',').map(str::to_string).collect(),
        }
    }

    /// The caller's kind is lower-cased; vocabulary entries are compared as-is.
    pub fn contains(&self, kind: &str) -> bool {
        let lowered = kind.to_lowercase();
        self.kinds.iter().any(|k| *k == lowered)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.kinds.iter().map(String::as_str)
    }
}

impl Default for KindVocabulary {
    fn default() -> Self {
        KindVocabulary::parse(DEFAULT_CHANGELOG_KINDS)
    }
}

impl fmt::Display for KindVocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kinds.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_env(&MapEnv::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.changelog_dir, ".changelog");
    }

    #[test]
    fn empty_values_fall_back() {
        let env = MapEnv::new()
            .with(CHANGELOG_DIR_ENV, "")
            .with(CHANGELOG_KINDS_ENV, "");
        assert_eq!(Config::from_env(&env), Config::default());
    }

    #[test]
    fn custom_dir() {
        let env = MapEnv::new().with(CHANGELOG_DIR_ENV, ".custom");
        assert_eq!(Config::from_env(&env).changelog_dir, ".custom");
    }

    #[test]
    fn default_vocabulary() {
        let kinds = KindVocabulary::default();
        let all: Vec<&str> = kinds.iter().collect();
        assert_eq!(
            all,
            ["bug", "improvement", "security", "breaking-change", "deprecation", "note"]
        );
        for kind in ["bug", "improvement", "security", "breaking-change", "deprecation", "note"] {
            assert!(kinds.contains(kind), "{kind} should be accepted");
        }
        for kind in ["foo", "bar", "baz", "feature"] {
            assert!(!kinds.contains(kind), "{kind} should be rejected");
        }
    }

    #[test]
    fn custom_vocabulary_replaces_default() {
        let env = MapEnv::new().with(CHANGELOG_KINDS_ENV, "feature,regression,test");
        let kinds = Config::from_env(&env).kinds;
        for kind in ["feature", "regression", "test"] {
            assert!(kinds.contains(kind));
        }
        for kind in ["bug", "improvement", "security", "breaking-change", "deprecation", "note"] {
            assert!(!kinds.contains(kind));
        }
    }

    #[test]
    fn matching_lowercases_only_the_input() {
        let kinds = KindVocabulary::default();
        assert!(kinds.contains("BUG"));
        assert!(kinds.contains("Breaking-Change"));

        let upper = KindVocabulary::parse("Feature");
        assert!(!upper.contains("Feature"));
        assert!(!upper.contains("feature"));
    }

    #[test]
    fn renders_for_usage() {
        assert_eq!(
            KindVocabulary::default().to_string(),
            "bug|improvement|security|breaking-change|deprecation|note"
        );
    }
}
