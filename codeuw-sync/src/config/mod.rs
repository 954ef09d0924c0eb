//! Configuration loading.
//!
//! This module handles parsing the YAML configuration file that names the
//! aggregating repository and the source repositories to scan.

mod error;
mod source;

pub use error::ConfigError;
pub use source::SourceRepository;

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = ".codeuw-config.yml";

/// Default owner of the aggregating repository.
pub const DEFAULT_OWNER: &str = "uw-ssec";

/// Default name of the aggregating repository.
pub const DEFAULT_REPO: &str = "codeuw";

/// Configuration file as written on disk; every key is optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    owner: Option<String>,
    repo: Option<String>,
    repos: Option<Vec<SourceRepository>>,
}

/// Validated configuration for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Owner of the aggregating repository.
    pub owner: String,

    /// Name of the aggregating repository.
    pub repo: String,

    /// Source repositories, scanned in the order given.
    pub repos: Vec<SourceRepository>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            repos: Vec::new(),
        }
    }
}

impl SyncConfig {
    /// Loads the configuration from a YAML file.
    ///
    /// Keys missing from the file fall back to [`DEFAULT_OWNER`],
    /// [`DEFAULT_REPO`] and an empty repository list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read, isn't valid YAML,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "Loading configuration");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    /// Parses configuration content; `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the content isn't valid YAML or fails validation.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        // An empty document deserializes to nothing rather than to an empty map
        let raw: RawConfig = if content.trim().is_empty() {
            RawConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| ConfigError::YamlError {
                path: path.display().to_string(),
                source: e,
            })?
        };

        let mut config = Self::default();
        if let Some(owner) = raw.owner {
            config.owner = owner;
        }
        if let Some(repo) = raw.repo {
            config.repo = repo;
        }
        if let Some(repos) = raw.repos {
            config.repos = repos;
        }

        config.validate(path)?;
        debug!(
            aggregator = %config.aggregator_full_name(),
            repos = config.repos.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Returns the aggregating repository in "owner/repo" format.
    #[must_use]
    pub fn aggregator_full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let path_str = path.display().to_string();

        if self.owner.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                path: path_str,
                message: "owner must not be empty".to_string(),
            });
        }

        if self.repo.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                path: path_str,
                message: "repo must not be empty".to_string(),
            });
        }

        for (index, source) in self.repos.iter().enumerate() {
            let empty_key = [
                ("org", &source.org),
                ("repo", &source.repo),
                ("name", &source.name),
            ]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty());

            if let Some((key, _)) = empty_key {
                return Err(ConfigError::ValidationError {
                    path: path_str,
                    message: format!("repos[{index}].{key} must not be empty"),
                });
            }
        }

        Ok(())
    }
}
