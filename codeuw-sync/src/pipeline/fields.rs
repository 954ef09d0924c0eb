//! Body field values for mirrored issues.

use crate::platform::SourceIssue;
use std::collections::BTreeMap;
use url::Url;

/// Field ids the mirrored issue body is filled with.
pub const BODY_FIELDS: [&str; 7] = [
    "contact",
    "description",
    "repo",
    "issue",
    "level",
    "language",
    "dependencies",
];

/// Description used when the source issue has no body.
pub const NO_DESCRIPTION: &str = "*No description provided.*";

/// Value of the dependencies field.
pub const NO_RESPONSE: &str = "*No response*";

/// How the contact field and the follow-up prompts are filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStyle {
    /// Contact is `@author`, and prompts are addressed to the author.
    AuthorHandle,

    /// Static placeholders asking for the values to be entered by hand.
    ManualEntry,
}

/// Builds the body field values for a source issue.
#[must_use]
pub fn body_fields(
    issue: &SourceIssue,
    repository_url: &Url,
    style: ContactStyle,
) -> BTreeMap<String, String> {
    let (contact, level, language) = match style {
        ContactStyle::AuthorHandle => {
            let handle = format!("@{}", issue.author);
            (
                handle.clone(),
                format!("*{handle}: Please provide the level of the task here.*"),
                format!("*{handle}: Please provide the programming language of the task here.*"),
            )
        }
        ContactStyle::ManualEntry => (
            "*Please provide the contact information for this task here.*".to_string(),
            "*Please provide the level of the task here.*".to_string(),
            "*Please provide the programming language of the task here.*".to_string(),
        ),
    };

    let description = match issue.body.as_deref() {
        Some(body) if !body.is_empty() => body.to_string(),
        _ => NO_DESCRIPTION.to_string(),
    };

    let values = [
        contact,
        description,
        repository_url.to_string(),
        issue.html_url.to_string(),
        level,
        language,
        NO_RESPONSE.to_string(),
    ];

    BODY_FIELDS
        .iter()
        .map(ToString::to_string)
        .zip(values)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(body: Option<&str>) -> SourceIssue {
        SourceIssue {
            number: 12,
            title: "Write tutorial".to_string(),
            body: body.map(ToString::to_string),
            html_url: Url::parse("https://github.com/uw-ssec/tutorials/issues/12").unwrap(),
            author: "octocat".to_string(),
            labels: vec!["codeuw".to_string()],
        }
    }

    fn repo_url() -> Url {
        Url::parse("https://github.com/uw-ssec/tutorials").unwrap()
    }

    #[test]
    fn author_handle_style() {
        let fields = body_fields(&issue(Some("Details")), &repo_url(), ContactStyle::AuthorHandle);

        assert_eq!(fields["contact"], "@octocat");
        assert_eq!(fields["description"], "Details");
        assert_eq!(fields["repo"], "https://github.com/uw-ssec/tutorials");
        assert_eq!(
            fields["issue"],
            "https://github.com/uw-ssec/tutorials/issues/12"
        );
        assert_eq!(
            fields["level"],
            "*@octocat: Please provide the level of the task here.*"
        );
        assert_eq!(
            fields["language"],
            "*@octocat: Please provide the programming language of the task here.*"
        );
        assert_eq!(fields["dependencies"], NO_RESPONSE);
    }

    #[test]
    fn manual_entry_style_does_not_mention_author() {
        let fields = body_fields(&issue(Some("Details")), &repo_url(), ContactStyle::ManualEntry);

        assert!(fields.values().all(|value| !value.contains("octocat")));
        assert_eq!(
            fields["level"],
            "*Please provide the level of the task here.*"
        );
    }

    #[test]
    fn missing_or_empty_body_uses_marker() {
        let missing = body_fields(&issue(None), &repo_url(), ContactStyle::AuthorHandle);
        let empty = body_fields(&issue(Some("")), &repo_url(), ContactStyle::AuthorHandle);

        assert_eq!(missing["description"], NO_DESCRIPTION);
        assert_eq!(empty["description"], NO_DESCRIPTION);
    }

    #[test]
    fn fills_every_body_field() {
        let fields = body_fields(&issue(None), &repo_url(), ContactStyle::ManualEntry);

        assert_eq!(fields.len(), BODY_FIELDS.len());
        assert!(BODY_FIELDS.iter().all(|id| fields.contains_key(*id)));
    }
}
