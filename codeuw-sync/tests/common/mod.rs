//! In-memory issue platform shared by the integration tests.

#![allow(dead_code)]

use codeuw_sync::{
    CreatedIssue, IssuePlatform, NewIssue, PlatformError, RepositoryInfo, SourceIssue,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;
use url::Url;

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn task_template() -> String {
    std::fs::read_to_string(fixtures_root().join("task.yml")).unwrap()
}

/// Builds a source issue in `full_name` with the given labels.
pub fn issue(full_name: &str, number: u64, title: &str, labels: &[&str]) -> SourceIssue {
    SourceIssue {
        number,
        title: title.to_string(),
        body: Some(format!("Body of {title}")),
        html_url: Url::parse(&format!("https://github.com/{full_name}/issues/{number}")).unwrap(),
        author: "alice".to_string(),
        labels: labels.iter().map(ToString::to_string).collect(),
    }
}

#[derive(Debug, Clone)]
struct StoredIssue {
    issue: SourceIssue,
    open: bool,
}

/// Issue platform backed by maps; every created issue becomes visible to later listings.
#[derive(Debug, Default)]
pub struct FakePlatform {
    repositories: HashMap<String, RepositoryInfo>,
    files: HashMap<String, String>,
    issues: RefCell<HashMap<String, Vec<StoredIssue>>>,
    created: RefCell<Vec<(String, NewIssue)>>,
    calls: Cell<usize>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// A platform with the `uw-ssec/codeuw` aggregator and its task template.
    pub fn with_aggregator() -> Self {
        Self::new()
            .with_repository("uw-ssec/codeuw")
            .with_file("uw-ssec/codeuw", ".github/ISSUE_TEMPLATE/task.yml", &task_template())
    }

    pub fn with_repository(mut self, full_name: &str) -> Self {
        self.repositories.insert(
            full_name.to_string(),
            RepositoryInfo {
                full_name: full_name.to_string(),
                html_url: Url::parse(&format!("https://github.com/{full_name}")).unwrap(),
            },
        );
        self
    }

    pub fn with_file(mut self, full_name: &str, path: &str, content: &str) -> Self {
        self.files
            .insert(format!("{full_name}:{path}"), content.to_string());
        self
    }

    pub fn add_issue(&self, full_name: &str, issue: SourceIssue) {
        self.push(full_name, issue, true);
    }

    pub fn add_closed_issue(&self, full_name: &str, issue: SourceIssue) {
        self.push(full_name, issue, false);
    }

    /// Issues created so far, with the repository they were created in.
    pub fn created(&self) -> Vec<(String, NewIssue)> {
        self.created.borrow().clone()
    }

    /// Number of platform calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn push(&self, full_name: &str, issue: SourceIssue, open: bool) {
        self.issues
            .borrow_mut()
            .entry(full_name.to_string())
            .or_default()
            .push(StoredIssue { issue, open });
    }

    fn stored(&self, full_name: &str) -> Vec<StoredIssue> {
        self.issues
            .borrow()
            .get(full_name)
            .cloned()
            .unwrap_or_default()
    }

    fn known_repository(&self, owner: &str, repo: &str) -> Result<String, PlatformError> {
        self.calls.set(self.calls.get() + 1);
        let full_name = format!("{owner}/{repo}");
        if self.repositories.contains_key(&full_name) {
            Ok(full_name)
        } else {
            Err(PlatformError::NotFound {
                resource: full_name,
            })
        }
    }
}

impl IssuePlatform for FakePlatform {
    async fn repository(&self, owner: &str, repo: &str) -> Result<RepositoryInfo, PlatformError> {
        let full_name = self.known_repository(owner, repo)?;
        Ok(self.repositories[&full_name].clone())
    }

    async fn list_open_issues(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<SourceIssue>, PlatformError> {
        let full_name = self.known_repository(owner, repo)?;
        Ok(self
            .stored(&full_name)
            .into_iter()
            .filter(|stored| stored.open)
            .map(|stored| stored.issue)
            .collect())
    }

    async fn list_issue_titles(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<String>, PlatformError> {
        let full_name = self.known_repository(owner, repo)?;
        Ok(self
            .stored(&full_name)
            .into_iter()
            .map(|stored| stored.issue.title)
            .collect())
    }

    async fn file_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<String, PlatformError> {
        let full_name = self.known_repository(owner, repo)?;
        let key = format!("{full_name}:{path}");
        self.files
            .get(&key)
            .cloned()
            .ok_or(PlatformError::NotFound { resource: key })
    }

    async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        issue: &NewIssue,
    ) -> Result<CreatedIssue, PlatformError> {
        let full_name = self.known_repository(owner, repo)?;
        let number = self.stored(&full_name).len() as u64 + 1;
        let html_url =
            Url::parse(&format!("https://github.com/{full_name}/issues/{number}")).unwrap();

        self.push(
            &full_name,
            SourceIssue {
                number,
                title: issue.title.clone(),
                body: Some(issue.body.clone()),
                html_url: html_url.clone(),
                author: "codeuw-bot".to_string(),
                labels: issue.labels.clone(),
            },
            true,
        );
        self.created
            .borrow_mut()
            .push((full_name, issue.clone()));

        Ok(CreatedIssue { number, html_url })
    }
}
