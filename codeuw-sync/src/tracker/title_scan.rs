//! Duplicate tracking by comparing titles with existing aggregator issues.

use super::{Duplicate, DuplicateTracker, MirrorCandidate, TrackerStrategy};
use crate::platform::{IssuePlatform, PlatformError};
use crate::state::MirrorEntry;
use std::collections::HashSet;
use tracing::info;

/// Treats a candidate as mirrored iff its rendered title already exists verbatim.
///
/// Nothing is recorded; the next run lists the aggregator's titles again.
#[derive(Debug, Clone, Default)]
pub struct TitleScanTracker {
    titles: HashSet<String>,
}

impl TitleScanTracker {
    /// Creates a tracker over a known set of titles.
    pub fn new(titles: impl IntoIterator<Item = String>) -> Self {
        Self {
            titles: titles.into_iter().collect(),
        }
    }

    /// Lists every issue title (open and closed) of the aggregating repository.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the issues can't be listed.
    pub async fn fetch<P: IssuePlatform>(
        platform: &P,
        owner: &str,
        repo: &str,
    ) -> Result<Self, PlatformError> {
        let titles = platform.list_issue_titles(owner, repo).await?;
        info!(owner, repo, count = titles.len(), "Loaded existing issue titles");
        Ok(Self::new(titles))
    }

    /// Number of distinct known titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Returns true if no titles are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl DuplicateTracker for TitleScanTracker {
    fn strategy(&self) -> TrackerStrategy {
        TrackerStrategy::TitleScan
    }

    fn find_duplicate(&self, candidate: &MirrorCandidate<'_>) -> Option<Duplicate> {
        self.titles
            .contains(candidate.title)
            .then_some(Duplicate::ExistingTitle)
    }

    fn record(&mut self, _candidate: &MirrorCandidate<'_>, _entry: MirrorEntry) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: &str) -> MirrorCandidate<'_> {
        MirrorCandidate {
            repo_full_name: "uw-ssec/tutorials",
            issue_number: 1,
            title,
        }
    }

    #[test]
    fn existing_title_is_duplicate() {
        let tracker = TitleScanTracker::new(vec!["Task: Tutorials - Fix typo".to_string()]);

        assert_eq!(
            tracker.find_duplicate(&candidate("Task: Tutorials - Fix typo")),
            Some(Duplicate::ExistingTitle)
        );
        assert!(!tracker.is_duplicate(&candidate("Task: Tutorials - Fix Typo")));
    }

    #[test]
    fn record_does_not_change_known_titles() {
        let mut tracker = TitleScanTracker::default();
        let new_title = candidate("Task: Tutorials - New");

        tracker.record(&new_title, MirrorEntry::Mirrored(3));

        assert!(tracker.is_empty());
        assert!(!tracker.is_duplicate(&new_title));
        assert!(tracker.recorded_counts().is_empty());
    }
}
