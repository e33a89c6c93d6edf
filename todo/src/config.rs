//! Configuration for the todo front-end.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use tasklane_runtime::StoreConfig;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG` is unset
    pub log_level: String,
    /// Load the sample todos on start (default: true)
    pub seed_samples: bool,
    /// Print success notifications (default: true)
    pub notifications: bool,
    /// Follow-up actions allowed per `send` (default: 32)
    pub max_feedback_actions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            seed_samples: true,
            notifications: true,
            max_feedback_actions: StoreConfig::default().max_feedback_actions,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            log_level: lookup("TODO_LOG_LEVEL")
                .map(|s| s.trim().to_ascii_lowercase())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.log_level),
            seed_samples: lookup("TODO_SEED_SAMPLES")
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.seed_samples),
            notifications: lookup("TODO_NOTIFICATIONS")
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.notifications),
            max_feedback_actions: lookup("TODO_MAX_FEEDBACK_ACTIONS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.max_feedback_actions),
        }
    }

    /// Store limits derived from this configuration
    #[must_use]
    pub const fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.max_feedback_actions)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = from_pairs(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, "warn");
        assert!(config.seed_samples);
        assert!(config.notifications);
        assert_eq!(config.max_feedback_actions, 32);
    }

    #[test]
    fn reads_every_variable() {
        let config = from_pairs(&[
            ("TODO_LOG_LEVEL", "DEBUG"),
            ("TODO_SEED_SAMPLES", "no"),
            ("TODO_NOTIFICATIONS", "0"),
            ("TODO_MAX_FEEDBACK_ACTIONS", " 4 "),
        ]);

        assert_eq!(config.log_level, "debug");
        assert!(!config.seed_samples);
        assert!(!config.notifications);
        assert_eq!(config.store_config().max_feedback_actions, 4);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = from_pairs(&[
            ("TODO_SEED_SAMPLES", "maybe"),
            ("TODO_MAX_FEEDBACK_ACTIONS", "-3"),
            ("TODO_LOG_LEVEL", "  "),
        ]);
        assert_eq!(config, Config::default());
    }
}
