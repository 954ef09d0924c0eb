//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file couldn't be read.
    #[error("Cannot read configuration file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for the configuration schema.
    #[error("Failed to parse configuration in '{path}': {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A key is present but unusable.
    #[error("Invalid configuration in '{path}': {message}")]
    ValidationError { path: String, message: String },
}
