//! Issue mirroring pipeline.
//!
//! For each source repository this module lists the open issues carrying
//! the tracked label, skips those the duplicate tracker already knows, and
//! creates a templated copy of the rest in the aggregating repository.

mod error;
mod fields;

pub use error::PipelineError;
pub use fields::{body_fields, ContactStyle, BODY_FIELDS, NO_DESCRIPTION, NO_RESPONSE};

use crate::config::SourceRepository;
use crate::platform::{IssuePlatform, NewIssue, RepositoryInfo, SourceIssue};
use crate::state::MirrorEntry;
use crate::summary::{MirrorStatus, ProcessingResult, RepositorySummary};
use crate::templates::IssueTemplate;
use crate::tracker::{Duplicate, DuplicateTracker, MirrorCandidate};
use tracing::{debug, info, info_span, Instrument};

/// Label that marks a source issue for mirroring.
pub const TRACKED_LABEL: &str = "codeuw";

/// Keeps only the issues carrying `label` (exact, case-sensitive match).
#[must_use]
pub fn filter_labeled(issues: Vec<SourceIssue>, label: &str) -> Vec<SourceIssue> {
    issues
        .into_iter()
        .filter(|issue| issue.has_label(label))
        .collect()
}

/// Mirrors labeled issues into one aggregating repository.
pub struct IssueMirror<'a, P> {
    platform: &'a P,
    template: &'a IssueTemplate,
    owner: &'a str,
    repo: &'a str,
    dry_run: bool,
    contact_style: ContactStyle,
}

impl<'a, P: IssuePlatform> IssueMirror<'a, P> {
    /// Creates a mirror targeting the `owner/repo` aggregating repository.
    #[must_use]
    pub fn new(
        platform: &'a P,
        template: &'a IssueTemplate,
        owner: &'a str,
        repo: &'a str,
        dry_run: bool,
        contact_style: ContactStyle,
    ) -> Self {
        Self {
            platform,
            template,
            owner,
            repo,
            dry_run,
            contact_style,
        }
    }

    /// Mirrors every labeled open issue of a source repository.
    ///
    /// Issues are processed in the order the platform returns them. The
    /// first error aborts the remaining issues.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] if a platform call or rendering fails.
    pub async fn mirror_repository(
        &self,
        tracker: &mut dyn DuplicateTracker,
        source: &SourceRepository,
    ) -> Result<RepositorySummary, PipelineError> {
        let span = info_span!("mirror_repository", repo = %source.full_name());

        async {
            let repository = self.platform.repository(&source.org, &source.repo).await?;
            tracker.track_repository(&repository.full_name);

            let issues = self
                .platform
                .list_open_issues(&source.org, &source.repo)
                .await?;
            let open_count = issues.len();
            let labeled = filter_labeled(issues, TRACKED_LABEL);
            info!(
                open = open_count,
                labeled = labeled.len(),
                label = TRACKED_LABEL,
                "Listed source issues"
            );

            let mut summary = RepositorySummary::new(repository.full_name.clone());
            summary.issues_matched = labeled.len();

            for issue in &labeled {
                let result = self
                    .mirror_issue(tracker, &repository, &source.name, issue)
                    .await?;
                summary.record_result(&result);
            }

            Ok(summary)
        }
        .instrument(span)
        .await
    }

    /// Mirrors a single source issue unless it is a duplicate.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] if rendering or issue creation fails.
    pub async fn mirror_issue(
        &self,
        tracker: &mut dyn DuplicateTracker,
        repository: &RepositoryInfo,
        project_name: &str,
        issue: &SourceIssue,
    ) -> Result<ProcessingResult, PipelineError> {
        let title = self.template.render_title(project_name, &issue.title)?;
        let candidate = MirrorCandidate {
            repo_full_name: &repository.full_name,
            issue_number: issue.number,
            title: &title,
        };

        if let Some(duplicate) = tracker.find_duplicate(&candidate) {
            let reason = self.describe_duplicate(duplicate);
            info!(
                issue = %format!("{}#{}", repository.full_name, issue.number),
                reason = %reason,
                "Issue already mirrored, skipping"
            );
            return Ok(ProcessingResult {
                repository: repository.full_name.clone(),
                issue_number: issue.number,
                title,
                status: MirrorStatus::Skipped { reason },
            });
        }

        let fields = body_fields(issue, &repository.html_url, self.contact_style);
        let body = self.template.render_body(&fields)?;

        info!(title = %title, labels = ?self.template.labels(), "Creating issue");

        let status = if self.dry_run {
            info!("Dry run, not creating issue. Here is the issue body:\n\n{body}");
            tracker.record(&candidate, MirrorEntry::Simulated);
            MirrorStatus::Simulated
        } else {
            let new_issue = NewIssue {
                title: title.clone(),
                body,
                labels: self.template.labels().to_vec(),
            };
            let created = self
                .platform
                .create_issue(self.owner, self.repo, &new_issue)
                .await?;
            info!(url = %created.html_url, "Issue successfully created");
            tracker.record(&candidate, MirrorEntry::Mirrored(created.number));
            MirrorStatus::Created {
                number: created.number,
                url: created.html_url.to_string(),
            }
        };

        debug!(status = status.as_str(), "Processed issue");
        Ok(ProcessingResult {
            repository: repository.full_name.clone(),
            issue_number: issue.number,
            title,
            status,
        })
    }

    fn describe_duplicate(&self, duplicate: Duplicate) -> String {
        match duplicate {
            Duplicate::Recorded(MirrorEntry::Mirrored(number)) => {
                format!("already exists in {}/{}#{number}", self.owner, self.repo)
            }
            Duplicate::Recorded(MirrorEntry::Simulated) => {
                "recorded by an earlier dry run".to_string()
            }
            Duplicate::ExistingTitle => {
                format!("an issue with this title exists in {}/{}", self.owner, self.repo)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn issue(number: u64, labels: &[&str]) -> SourceIssue {
        SourceIssue {
            number,
            title: format!("Issue {number}"),
            body: None,
            html_url: Url::parse(&format!("https://github.com/org/repo/issues/{number}"))
                .unwrap(),
            author: "octocat".to_string(),
            labels: labels.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn filter_keeps_issues_with_tracked_label() {
        let issues = vec![
            issue(1, &["bug", "codeuw"]),
            issue(2, &["bug"]),
            issue(3, &["CodeUW"]),
            issue(4, &[]),
            issue(5, &["codeuw"]),
        ];

        let labeled = filter_labeled(issues, TRACKED_LABEL);
        let numbers: Vec<_> = labeled.iter().map(|issue| issue.number).collect();

        assert_eq!(numbers, vec![1, 5]);
    }
}
