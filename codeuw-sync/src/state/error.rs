//! Deduplication record error types.

use thiserror::Error;

/// Errors that can occur while reading or writing the state file.
#[derive(Debug, Error)]
pub enum StateError {
    /// Failed to read or write the state file.
    #[error("Failed to access state file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode the MessagePack content.
    #[error("Failed to decode state file '{path}': {source}")]
    DecodeError {
        path: String,
        #[source]
        source: rmp_serde::decode::Error,
    },

    /// Failed to encode the record as MessagePack.
    #[error("Failed to encode state: {0}")]
    EncodeError(#[from] rmp_serde::encode::Error),

    /// The state file was written by an incompatible version.
    #[error("Unsupported state file version '{found}' in '{path}' (expected '{expected}')")]
    UnsupportedVersion {
        path: String,
        found: String,
        expected: &'static str,
    },
}
