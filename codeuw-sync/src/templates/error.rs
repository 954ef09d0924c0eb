//! Template error types.

use crate::platform::PlatformError;

/// Errors that can occur while loading, compiling, or rendering templates.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The template definition file couldn't be fetched.
    #[error("Failed to fetch issue template: {0}")]
    FetchError(#[from] PlatformError),

    /// The template definition isn't valid YAML or lacks required keys.
    #[error("Failed to parse issue template: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// An input field declares no display label.
    #[error("Issue template field '{id}' has no label")]
    MissingLabel { id: String },

    /// A field id can't be used as a placeholder.
    #[error("Invalid template field id '{id}'")]
    InvalidFieldId { id: String },

    /// A placeholder had no value supplied at render time.
    #[error("No value supplied for template field '{field}'")]
    MissingField { field: String },

    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Template registration error.
    #[error("Template registration error: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),
}
