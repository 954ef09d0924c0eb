//! Duplicate detection for mirrored issues.
//!
//! Two interchangeable strategies are available, selected when the run starts:
//! - [`KeyedStateTracker`] remembers mirrored source issue numbers in a state file.
//! - [`TitleScanTracker`] compares rendered titles against every issue already in
//!   the aggregating repository. It keeps no state, but an upstream title edit
//!   after mirroring (or two source issues rendering the same title) defeats it.

mod keyed_state;
mod title_scan;

pub use keyed_state::KeyedStateTracker;
pub use title_scan::TitleScanTracker;

use crate::state::{MirrorEntry, StateError};
use std::fmt;

/// Which duplicate detection strategy a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerStrategy {
    /// Persisted mapping of source issue numbers to mirrored issue numbers.
    #[default]
    KeyedState,

    /// Exact comparison against existing aggregator issue titles.
    TitleScan,
}

impl TrackerStrategy {
    /// Returns the strategy name as used on the command line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KeyedState => "keyed-state",
            Self::TitleScan => "title-scan",
        }
    }
}

impl fmt::Display for TrackerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source issue about to be mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorCandidate<'a> {
    /// Source repository in "owner/name" format.
    pub repo_full_name: &'a str,

    /// Issue number in the source repository.
    pub issue_number: u64,

    /// Title the mirrored issue would get.
    pub title: &'a str,
}

/// Why a candidate counts as already mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duplicate {
    /// The source issue is in the state file.
    Recorded(MirrorEntry),

    /// An aggregator issue already has the rendered title.
    ExistingTitle,
}

/// Decides whether a source issue has already been mirrored.
pub trait DuplicateTracker {
    /// Returns the strategy this tracker implements.
    fn strategy(&self) -> TrackerStrategy;

    /// Called once per source repository before its issues are processed.
    fn track_repository(&mut self, _repo_full_name: &str) {}

    /// Returns why the candidate is a duplicate, or `None` if it should be mirrored.
    fn find_duplicate(&self, candidate: &MirrorCandidate<'_>) -> Option<Duplicate>;

    /// Returns true if the candidate has already been mirrored.
    fn is_duplicate(&self, candidate: &MirrorCandidate<'_>) -> bool {
        self.find_duplicate(candidate).is_some()
    }

    /// Remembers that the candidate was mirrored (or simulated).
    fn record(&mut self, candidate: &MirrorCandidate<'_>, entry: MirrorEntry);

    /// Writes any persistent state.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the state can't be written.
    fn persist(&self) -> Result<(), StateError> {
        Ok(())
    }

    /// Number of recorded issues per source repository, if the tracker keeps any.
    fn recorded_counts(&self) -> Vec<(String, usize)> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names() {
        assert_eq!(TrackerStrategy::KeyedState.to_string(), "keyed-state");
        assert_eq!(TrackerStrategy::TitleScan.as_str(), "title-scan");
        assert_eq!(TrackerStrategy::default(), TrackerStrategy::KeyedState);
    }
}
