//! Mirroring pipeline error types.

use crate::platform::PlatformError;
use crate::templates::TemplateError;
use thiserror::Error;

/// Errors that abort mirroring.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The platform rejected a request.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// A title or body couldn't be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),
}
