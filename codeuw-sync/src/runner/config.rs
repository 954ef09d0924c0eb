//! Runner configuration.

use crate::config::DEFAULT_CONFIG_FILE;
use crate::state::DEFAULT_STATE_FILE;
use crate::tracker::TrackerStrategy;
use std::path::{Path, PathBuf};

/// Configuration for running the issue mirror.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the YAML configuration file.
    config_path: PathBuf,
    /// Path to the state file used by the keyed-state strategy.
    state_path: PathBuf,
    /// GitHub token used for API calls.
    token: Option<String>,
    /// Whether to log issues instead of creating them.
    dry_run: bool,
    /// Duplicate detection strategy.
    strategy: TrackerStrategy,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_CONFIG_FILE), None, false)
    }
}

impl RunnerConfig {
    /// Creates a new configuration for a run, using the default state file
    /// and the keyed-state strategy.
    pub fn new(config_path: PathBuf, token: Option<String>, dry_run: bool) -> Self {
        Self {
            config_path,
            state_path: PathBuf::from(DEFAULT_STATE_FILE),
            token,
            dry_run,
            strategy: TrackerStrategy::default(),
        }
    }

    /// Sets a custom state file path.
    pub fn with_state_path(mut self, state_path: PathBuf) -> Self {
        self.state_path = state_path;
        self
    }

    /// Sets the duplicate detection strategy.
    pub fn with_strategy(mut self, strategy: TrackerStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configuration file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the state file path.
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    /// Returns the configured GitHub token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the duplicate detection strategy.
    pub fn strategy(&self) -> TrackerStrategy {
        self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_file_names() {
        let config = RunnerConfig::default();

        assert_eq!(config.config_path(), Path::new(".codeuw-config.yml"));
        assert_eq!(config.state_path(), Path::new(".codeuw-state.mpk"));
        assert_eq!(config.token(), None);
        assert!(!config.dry_run());
        assert_eq!(config.strategy(), TrackerStrategy::KeyedState);
    }

    #[test]
    fn builder_methods_override() {
        let config = RunnerConfig::new(PathBuf::from("cfg.yml"), Some("t".to_string()), true)
            .with_state_path(PathBuf::from("state.mpk"))
            .with_strategy(TrackerStrategy::TitleScan);

        assert_eq!(config.state_path(), Path::new("state.mpk"));
        assert_eq!(config.token(), Some("t"));
        assert!(config.dry_run());
        assert_eq!(config.strategy(), TrackerStrategy::TitleScan);
    }
}
