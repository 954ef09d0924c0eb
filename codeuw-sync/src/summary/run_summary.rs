//! Run summary types.

use super::{MirrorStatus, ProcessingResult};
use crate::tracker::TrackerStrategy;

/// Tally of a single source repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositorySummary {
    /// Source repository full name.
    pub full_name: String,

    /// Number of open issues carrying the tracked label.
    pub issues_matched: usize,

    /// Number of issues created in the aggregating repository.
    pub issues_created: usize,

    /// Number of issues whose creation was simulated (dry run).
    pub issues_simulated: usize,

    /// Number of issues skipped as already mirrored.
    pub issues_skipped: usize,
}

impl RepositorySummary {
    /// Creates an empty tally for a repository.
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Default::default()
        }
    }

    /// Updates the tally with a processing result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        match result.status {
            MirrorStatus::Created { .. } => self.issues_created += 1,
            MirrorStatus::Simulated => self.issues_simulated += 1,
            MirrorStatus::Skipped { .. } => self.issues_skipped += 1,
        }
    }
}

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Duplicate detection strategy used.
    pub strategy: TrackerStrategy,

    /// Per source repository tallies, in configured order.
    pub repositories: Vec<RepositorySummary>,

    /// Issues recorded per source repository by the tracker, after the run.
    pub recorded: Vec<(String, usize)>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool, strategy: TrackerStrategy) -> Self {
        Self {
            dry_run,
            strategy,
            ..Default::default()
        }
    }

    /// Number of labeled issues across all repositories.
    #[must_use]
    pub fn issues_matched(&self) -> usize {
        self.repositories.iter().map(|r| r.issues_matched).sum()
    }

    /// Number of issues created across all repositories.
    #[must_use]
    pub fn issues_created(&self) -> usize {
        self.repositories.iter().map(|r| r.issues_created).sum()
    }

    /// Number of simulated creations across all repositories.
    #[must_use]
    pub fn issues_simulated(&self) -> usize {
        self.repositories.iter().map(|r| r.issues_simulated).sum()
    }

    /// Number of skipped issues across all repositories.
    #[must_use]
    pub fn issues_skipped(&self) -> usize {
        self.repositories.iter().map(|r| r.issues_skipped).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: MirrorStatus) -> ProcessingResult {
        ProcessingResult {
            repository: "test/repo".to_string(),
            issue_number: 1,
            title: "Task: Test - Thing".to_string(),
            status,
        }
    }

    #[test]
    fn can_record_result() {
        let mut repository = RepositorySummary::new("test/repo");

        repository.record_result(&result(MirrorStatus::Created {
            number: 1,
            url: "https://example.com".to_string(),
        }));
        repository.record_result(&result(MirrorStatus::Simulated));
        repository.record_result(&result(MirrorStatus::Skipped {
            reason: "duplicate".to_string(),
        }));

        assert_eq!(repository.issues_created, 1);
        assert_eq!(repository.issues_simulated, 1);
        assert_eq!(repository.issues_skipped, 1);
    }

    #[test]
    fn totals_sum_repositories() {
        let mut summary = RunSummary::new(false, TrackerStrategy::KeyedState);
        summary.repositories.push(RepositorySummary {
            full_name: "a/one".to_string(),
            issues_matched: 3,
            issues_created: 2,
            issues_simulated: 0,
            issues_skipped: 1,
        });
        summary.repositories.push(RepositorySummary {
            full_name: "b/two".to_string(),
            issues_matched: 1,
            issues_created: 1,
            issues_simulated: 0,
            issues_skipped: 0,
        });

        assert_eq!(summary.issues_matched(), 4);
        assert_eq!(summary.issues_created(), 3);
        assert_eq!(summary.issues_skipped(), 1);
        assert_eq!(summary.issues_simulated(), 0);
    }
}
