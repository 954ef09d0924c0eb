//! Duplicate tracking through the persisted deduplication record.

use super::{Duplicate, DuplicateTracker, MirrorCandidate, TrackerStrategy};
use crate::state::{DeduplicationRecord, MirrorEntry, StateError};
use std::path::{Path, PathBuf};
use tracing::info;

/// Tracks mirrored issues by source repository and issue number.
#[derive(Debug, Clone)]
pub struct KeyedStateTracker {
    state: DeduplicationRecord,
    path: PathBuf,
}

impl KeyedStateTracker {
    /// Loads the record at `path`, starting a fresh one if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if an existing state file can't be read.
    pub fn load(path: &Path) -> Result<Self, StateError> {
        let state = DeduplicationRecord::load_or_create(path)?;
        Ok(Self::new(state, path.to_path_buf()))
    }

    /// Wraps an existing record that will be persisted to `path`.
    #[must_use]
    pub fn new(state: DeduplicationRecord, path: PathBuf) -> Self {
        Self { state, path }
    }

    /// Returns the current record.
    #[must_use]
    pub fn state(&self) -> &DeduplicationRecord {
        &self.state
    }

    /// Returns the state file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DuplicateTracker for KeyedStateTracker {
    fn strategy(&self) -> TrackerStrategy {
        TrackerStrategy::KeyedState
    }

    fn track_repository(&mut self, repo_full_name: &str) {
        self.state.ensure_repository(repo_full_name);
    }

    fn find_duplicate(&self, candidate: &MirrorCandidate<'_>) -> Option<Duplicate> {
        self.state
            .entry(candidate.repo_full_name, candidate.issue_number)
            .map(Duplicate::Recorded)
    }

    fn record(&mut self, candidate: &MirrorCandidate<'_>, entry: MirrorEntry) {
        self.state
            .record(candidate.repo_full_name, candidate.issue_number, entry);
    }

    fn persist(&self) -> Result<(), StateError> {
        info!(path = %self.path.display(), "Writing state file to disk");
        self.state.write(&self.path)
    }

    fn recorded_counts(&self) -> Vec<(String, usize)> {
        self.state
            .issue_counts()
            .into_iter()
            .map(|(repo, count)| (repo.to_string(), count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DEFAULT_STATE_FILE;
    use tempfile::TempDir;

    fn candidate(number: u64) -> MirrorCandidate<'static> {
        MirrorCandidate {
            repo_full_name: "uw-ssec/tutorials",
            issue_number: number,
            title: "Task: Tutorials - Fix typo",
        }
    }

    #[test]
    fn unrecorded_issue_is_not_duplicate() {
        let temp = TempDir::new().unwrap();
        let tracker = KeyedStateTracker::load(&temp.path().join(DEFAULT_STATE_FILE)).unwrap();

        assert!(!tracker.is_duplicate(&candidate(1)));
    }

    #[test]
    fn recorded_issue_is_duplicate_regardless_of_title() {
        let temp = TempDir::new().unwrap();
        let mut tracker =
            KeyedStateTracker::load(&temp.path().join(DEFAULT_STATE_FILE)).unwrap();

        tracker.record(&candidate(4), MirrorEntry::Mirrored(31));

        let renamed = MirrorCandidate {
            title: "Task: Tutorials - Renamed upstream",
            ..candidate(4)
        };
        assert_eq!(
            tracker.find_duplicate(&renamed),
            Some(Duplicate::Recorded(MirrorEntry::Mirrored(31)))
        );
        assert!(!tracker.is_duplicate(&candidate(5)));
    }

    #[test]
    fn same_number_in_other_repository_is_not_duplicate() {
        let mut tracker =
            KeyedStateTracker::new(DeduplicationRecord::new(), PathBuf::from("unused"));
        tracker.record(&candidate(4), MirrorEntry::Mirrored(31));

        let other = MirrorCandidate {
            repo_full_name: "uw-ssec/other",
            ..candidate(4)
        };
        assert!(!tracker.is_duplicate(&other));
    }

    #[test]
    fn persist_writes_record() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_STATE_FILE);

        let mut tracker = KeyedStateTracker::load(&path).unwrap();
        tracker.track_repository("uw-ssec/empty");
        tracker.record(&candidate(2), MirrorEntry::Simulated);
        tracker.persist().unwrap();

        let reloaded = KeyedStateTracker::load(&path).unwrap();
        assert_eq!(reloaded.state(), tracker.state());
        assert_eq!(
            reloaded.recorded_counts(),
            vec![
                ("uw-ssec/empty".to_string(), 0),
                ("uw-ssec/tutorials".to_string(), 1)
            ]
        );
    }
}
