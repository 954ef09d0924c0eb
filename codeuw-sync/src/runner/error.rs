//! Runner error types.

/// Errors that can occur while running the mirror.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// State file errors.
    #[error(transparent)]
    State(#[from] crate::state::StateError),

    /// Issue template errors.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),

    /// Platform client and request errors.
    #[error(transparent)]
    Platform(#[from] crate::platform::PlatformError),

    /// Errors while mirroring a source repository.
    #[error(transparent)]
    Pipeline(#[from] crate::pipeline::PipelineError),
}
