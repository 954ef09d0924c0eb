//! Platform-neutral issue and repository models.

use url::Url;

/// Basic information about a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Browser URL of the repository.
    pub html_url: Url,
}

/// An issue read from a source repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceIssue {
    /// Issue number within its repository.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Issue body, if the author wrote one.
    pub body: Option<String>,

    /// Browser URL of the issue.
    pub html_url: Url,

    /// Login of the issue author.
    pub author: String,

    /// Names of the labels attached to the issue.
    pub labels: Vec<String>,
}

impl SourceIssue {
    /// Returns true if the issue carries a label with exactly this name.
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|name| name == label)
    }
}

/// An issue about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// An issue the platform has just created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    /// Issue number assigned by the platform.
    pub number: u64,

    /// Browser URL of the new issue.
    pub html_url: Url,
}
