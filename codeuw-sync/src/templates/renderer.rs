//! Strict format templates rendered with Handlebars.

use super::TemplateError;
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Name under which each [`FormatTemplate`] registers its compiled pattern.
const PATTERN_NAME: &str = "pattern";

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// A piece of a [`FormatTemplate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output as is.
    Literal(String),

    /// Replaced by the value supplied for this field id.
    Field(String),
}

/// A pattern of literal text and named placeholders.
///
/// Literal text is passed to Handlebars as data rather than as template
/// source, so braces in it are never mistaken for placeholders.
#[derive(Clone)]
pub struct FormatTemplate {
    segments: Vec<Segment>,
    handlebars: Handlebars<'static>,
}

/// Incrementally assembles a [`FormatTemplate`].
#[derive(Debug, Default)]
pub struct FormatTemplateBuilder {
    segments: Vec<Segment>,
}

impl FormatTemplateBuilder {
    /// Appends literal text.
    #[must_use]
    pub fn literal(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Literal(text.into()));
        self
    }

    /// Appends a placeholder for the given field id.
    #[must_use]
    pub fn field(mut self, id: impl Into<String>) -> Self {
        self.segments.push(Segment::Field(id.into()));
        self
    }

    /// Compiles the template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::InvalidFieldId`] if a field id contains
    /// anything other than ASCII alphanumerics, `_` or `-`.
    pub fn build(self) -> Result<FormatTemplate, TemplateError> {
        FormatTemplate::new(self.segments)
    }
}

impl FormatTemplate {
    /// Starts building a template.
    #[must_use]
    pub fn builder() -> FormatTemplateBuilder {
        FormatTemplateBuilder::default()
    }

    /// Compiles a template from its segments.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::InvalidFieldId`] for unusable field ids, or a
    /// registration error if the compiled pattern is rejected.
    pub fn new(segments: Vec<Segment>) -> Result<Self, TemplateError> {
        let mut source = String::new();
        let mut literal_index = 0;

        for segment in &segments {
            match segment {
                Segment::Literal(_) => {
                    source.push_str(&format!("{{{{literals.[{literal_index}]}}}}"));
                    literal_index += 1;
                }
                Segment::Field(id) => {
                    if !is_valid_field_id(id) {
                        return Err(TemplateError::InvalidFieldId { id: id.clone() });
                    }
                    source.push_str(&format!("{{{{fields.[{id}]}}}}"));
                }
            }
        }

        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(PATTERN_NAME, source)?;

        Ok(Self {
            segments,
            handlebars,
        })
    }

    /// Returns the field ids this template expects, in order of appearance.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(id) => Some(id.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Renders the template, substituting each placeholder with its value.
    ///
    /// Values for fields the template doesn't use are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingField`] if any placeholder has no value.
    pub fn render(&self, fields: &BTreeMap<String, String>) -> Result<String, TemplateError> {
        if let Some(missing) = self.fields().find(|id| !fields.contains_key(*id)) {
            return Err(TemplateError::MissingField {
                field: missing.to_string(),
            });
        }

        let literals: Vec<&str> = self
            .segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Literal(text) => Some(text.as_str()),
                Segment::Field(_) => None,
            })
            .collect();

        let values: Map<String, Value> = fields
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();

        let data = json!({
            "literals": literals,
            "fields": values,
        });

        Ok(self.handlebars.render(PATTERN_NAME, &data)?)
    }
}

impl fmt::Display for FormatTemplate {
    /// Shows the pattern with placeholders written as `{id}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Field(id) => write!(f, "{{{id}}}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatTemplate")
            .field("segments", &self.segments)
            .finish_non_exhaustive()
    }
}

fn is_valid_field_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
