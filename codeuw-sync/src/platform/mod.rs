//! Access to the issue-hosting platform.
//!
//! The mirroring pipeline only talks to the platform through the
//! [`IssuePlatform`] trait; [`GitHubPlatform`] is the octocrab-backed
//! implementation used by the CLI.

mod error;
mod github;
mod models;

pub use error::PlatformError;
pub use github::GitHubPlatform;
pub use models::{CreatedIssue, NewIssue, RepositoryInfo, SourceIssue};

/// Operations the mirroring pipeline needs from an issue-hosting platform.
///
/// Calls are made one at a time; implementations don't need to be shared
/// across tasks.
#[allow(async_fn_in_trait)]
pub trait IssuePlatform {
    /// Fetches basic information about a repository.
    async fn repository(&self, owner: &str, repo: &str) -> Result<RepositoryInfo, PlatformError>;

    /// Lists every open issue of a repository, across all pages.
    async fn list_open_issues(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<SourceIssue>, PlatformError>;

    /// Lists the titles of every issue of a repository, open and closed.
    async fn list_issue_titles(&self, owner: &str, repo: &str)
        -> Result<Vec<String>, PlatformError>;

    /// Reads a text file from the repository's default branch.
    async fn file_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<String, PlatformError>;

    /// Creates an issue and returns its number and URL.
    async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        issue: &NewIssue,
    ) -> Result<CreatedIssue, PlatformError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn issue_with_labels(labels: &[&str]) -> SourceIssue {
        SourceIssue {
            number: 1,
            title: "Add docs".to_string(),
            body: None,
            html_url: Url::parse("https://github.com/org/repo/issues/1").unwrap(),
            author: "octocat".to_string(),
            labels: labels.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn has_label_is_exact_and_case_sensitive() {
        let issue = issue_with_labels(&["bug", "codeuw"]);

        assert!(issue.has_label("codeuw"));
        assert!(!issue.has_label("CodeUW"));
        assert!(!issue.has_label("code"));
    }
}
