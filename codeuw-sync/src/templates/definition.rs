//! Issue form definition deserialization.

use serde::Deserialize;

/// Parsed issue form from `.github/ISSUE_TEMPLATE/task.yml`.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueFormDefinition {
    /// Prefix placed in front of every issue title.
    pub title: String,

    /// Labels applied to every issue created from this form.
    pub labels: Vec<String>,

    /// Form elements, in display order.
    pub body: Vec<FormElement>,
}

/// A single element of an issue form.
#[derive(Debug, Clone, Deserialize)]
pub struct FormElement {
    /// Element id; `markdown` elements usually have none.
    #[serde(default)]
    pub id: Option<String>,

    /// Element type (e.g. "input", "textarea", "markdown").
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Element attributes.
    #[serde(default)]
    pub attributes: FormAttributes,
}

/// Attributes of a form element; only the label is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormAttributes {
    /// Display label of the field.
    #[serde(default)]
    pub label: Option<String>,
}

impl IssueFormDefinition {
    /// Parses a form definition from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or lacks `title`, `labels` or `body`.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Returns the elements that accept input, i.e. those with an id.
    pub fn inputs(&self) -> impl Iterator<Item = &FormElement> {
        self.body.iter().filter(|element| element.id.is_some())
    }
}
