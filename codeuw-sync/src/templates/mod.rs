//! Issue templates for mirrored issues.
//!
//! The aggregating repository describes its issues with a GitHub issue form.
//! This module fetches that form and compiles it into title and body
//! templates rendered with Handlebars.

mod definition;
mod error;
mod renderer;

pub use definition::{FormAttributes, FormElement, IssueFormDefinition};
pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, FormatTemplate, FormatTemplateBuilder, Segment};

use crate::platform::IssuePlatform;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Path of the issue form inside the aggregating repository.
pub const TEMPLATE_PATH: &str = ".github/ISSUE_TEMPLATE/task.yml";

/// Title placeholder for the project's display name.
pub const PROJECT_NAME_FIELD: &str = "project_name";

/// Title placeholder for the source issue's title.
pub const TITLE_TEXT_FIELD: &str = "title_text";

/// Compiled title, body and labels for mirrored issues.
#[derive(Debug, Clone)]
pub struct IssueTemplate {
    title: FormatTemplate,
    body: FormatTemplate,
    labels: Vec<String>,
}

impl IssueTemplate {
    /// Fetches the issue form from the aggregating repository and compiles it.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the form can't be fetched, parsed, or compiled.
    pub async fn fetch<P: IssuePlatform>(
        platform: &P,
        owner: &str,
        repo: &str,
    ) -> Result<Self, TemplateError> {
        info!(owner, repo, path = TEMPLATE_PATH, "Fetching issue template");
        let content = platform.file_contents(owner, repo, TEMPLATE_PATH).await?;
        Self::parse(&content)
    }

    /// Parses and compiles an issue form definition.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the YAML is malformed or a field is unusable.
    pub fn parse(content: &str) -> Result<Self, TemplateError> {
        let definition = IssueFormDefinition::parse(content)?;
        Self::compile(&definition)
    }

    /// Compiles an issue form into templates.
    ///
    /// The title becomes `"<form title>{project_name} - {title_text}"`. The
    /// body has one section per input field, in declared order:
    ///
    /// ```text
    /// ### <field label>
    ///
    /// {<field id>}
    ///
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if an input field has no label or an unusable id.
    pub fn compile(definition: &IssueFormDefinition) -> Result<Self, TemplateError> {
        let title = FormatTemplate::builder()
            .literal(definition.title.clone())
            .field(PROJECT_NAME_FIELD)
            .literal(" - ")
            .field(TITLE_TEXT_FIELD)
            .build()?;

        let mut body = FormatTemplate::builder();
        for element in definition.inputs() {
            let Some(id) = element.id.as_deref() else {
                continue;
            };
            let label = element
                .attributes
                .label
                .as_deref()
                .ok_or_else(|| TemplateError::MissingLabel { id: id.to_string() })?;

            body = body
                .literal(format!("### {label}\n\n"))
                .field(id)
                .literal("\n\n");
        }
        let body = body.build()?;

        debug!(title = %title, fields = body.fields().count(), "Compiled issue template");
        Ok(Self {
            title,
            body,
            labels: definition.labels.clone(),
        })
    }

    /// Renders the title of a mirrored issue.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if rendering fails.
    pub fn render_title(&self, project_name: &str, title_text: &str) -> Result<String, TemplateError> {
        let fields = BTreeMap::from([
            (PROJECT_NAME_FIELD.to_string(), project_name.to_string()),
            (TITLE_TEXT_FIELD.to_string(), title_text.to_string()),
        ]);
        self.title.render(&fields)
    }

    /// Renders the body of a mirrored issue from field values keyed by field id.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingField`] if a form field has no value.
    pub fn render_body(&self, fields: &BTreeMap<String, String>) -> Result<String, TemplateError> {
        self.body.render(fields)
    }

    /// Returns the title template.
    #[must_use]
    pub fn title(&self) -> &FormatTemplate {
        &self.title
    }

    /// Returns the body template.
    #[must_use]
    pub fn body(&self) -> &FormatTemplate {
        &self.body
    }

    /// Returns the labels applied to every mirrored issue.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
