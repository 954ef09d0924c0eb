//! GitHub implementation of [`IssuePlatform`] using octocrab.

use super::{CreatedIssue, IssuePlatform, NewIssue, PlatformError, RepositoryInfo, SourceIssue};
use octocrab::models::issues::Issue;
use octocrab::{params, Octocrab};
use tracing::debug;

/// Results per page when listing issues.
const RESULTS_PER_PAGE: u8 = 100;

/// GitHub REST API access through an [`Octocrab`] client.
#[derive(Debug, Clone)]
pub struct GitHubPlatform {
    octocrab: Octocrab,
}

impl GitHubPlatform {
    /// Builds a client, authenticated with a personal access token when one is given.
    ///
    /// Without a token the client is anonymous; calls that need
    /// authentication fail when they are made.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the client can't be built.
    pub fn new(token: Option<&str>) -> Result<Self, PlatformError> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }

        Ok(Self {
            octocrab: builder.build()?,
        })
    }

    /// Wraps an already configured client.
    #[must_use]
    pub fn from_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        state: params::State,
    ) -> Result<Vec<Issue>, PlatformError> {
        let first_page = self
            .octocrab
            .issues(owner, repo)
            .list()
            .state(state)
            .per_page(RESULTS_PER_PAGE)
            .send()
            .await?;

        let issues = self.octocrab.all_pages(first_page).await?;
        debug!(owner, repo, count = issues.len(), "Listed issues");
        Ok(issues)
    }
}

impl IssuePlatform for GitHubPlatform {
    async fn repository(&self, owner: &str, repo: &str) -> Result<RepositoryInfo, PlatformError> {
        let repository = self.octocrab.repos(owner, repo).get().await?;
        let full_name = repository
            .full_name
            .unwrap_or_else(|| format!("{owner}/{repo}"));

        let html_url = repository.html_url.ok_or_else(|| PlatformError::NotFound {
            resource: format!("html_url of {full_name}"),
        })?;

        Ok(RepositoryInfo {
            full_name,
            html_url,
        })
    }

    async fn list_open_issues(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<SourceIssue>, PlatformError> {
        let issues = self.list_issues(owner, repo, params::State::Open).await?;
        Ok(issues.into_iter().map(to_source_issue).collect())
    }

    async fn list_issue_titles(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<String>, PlatformError> {
        let issues = self.list_issues(owner, repo, params::State::All).await?;
        Ok(issues.into_iter().map(|issue| issue.title).collect())
    }

    async fn file_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<String, PlatformError> {
        let contents = self
            .octocrab
            .repos(owner, repo)
            .get_content()
            .path(path)
            .send()
            .await?;

        let file = contents
            .items
            .into_iter()
            .next()
            .ok_or_else(|| PlatformError::NotFound {
                resource: format!("{owner}/{repo}:{path}"),
            })?;

        file.decoded_content()
            .ok_or_else(|| PlatformError::UndecodableContent {
                repository: format!("{owner}/{repo}"),
                path: path.to_string(),
            })
    }

    async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        issue: &NewIssue,
    ) -> Result<CreatedIssue, PlatformError> {
        let created = self
            .octocrab
            .issues(owner, repo)
            .create(&issue.title)
            .body(&issue.body)
            .labels(issue.labels.clone())
            .send()
            .await?;

        Ok(CreatedIssue {
            number: created.number,
            html_url: created.html_url,
        })
    }
}

fn to_source_issue(issue: Issue) -> SourceIssue {
    SourceIssue {
        number: issue.number,
        title: issue.title,
        body: issue.body,
        html_url: issue.html_url,
        author: issue.user.login,
        labels: issue.labels.into_iter().map(|label| label.name).collect(),
    }
}
