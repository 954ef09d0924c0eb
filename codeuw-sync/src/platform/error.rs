//! Issue platform error types.

use thiserror::Error;

/// Errors reported by an [`IssuePlatform`](super::IssuePlatform).
#[derive(Debug, Error)]
pub enum PlatformError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The requested repository, issue, or file doesn't exist.
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// A file exists but its content couldn't be decoded as text.
    #[error("File '{path}' in {repository} has no decodable content")]
    UndecodableContent { repository: String, path: String },
}
