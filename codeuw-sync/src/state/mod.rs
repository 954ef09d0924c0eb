//! Persisted deduplication record.
//!
//! The record maps each source repository to the source issue numbers that
//! were already mirrored, and is stored on disk as MessagePack.

mod entry;
mod error;

pub use entry::{MirrorEntry, DRY_RUN_SENTINEL};
pub use error::StateError;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Default state file name.
pub const DEFAULT_STATE_FILE: &str = ".codeuw-state.mpk";

/// Version written to new state files.
pub const STATE_VERSION: &str = "1.0";

/// Mirrored issues of a single source repository, keyed by source issue number.
pub type RepositoryEntries = BTreeMap<u64, MirrorEntry>;

/// Record of every source issue that has already been mirrored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeduplicationRecord {
    /// Format version of the record.
    pub version: String,

    /// Unix timestamp (seconds) when the record was first created.
    pub created_time: i64,

    /// Unix timestamp (seconds) of the last recorded issue.
    pub last_modified: i64,

    /// Source repository full name -> source issue number -> mirror entry.
    pub issues: BTreeMap<String, RepositoryEntries>,
}

impl Default for DeduplicationRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl DeduplicationRecord {
    /// Creates an empty record stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        let now = now_timestamp();
        Self {
            version: STATE_VERSION.to_string(),
            created_time: now,
            last_modified: now,
            issues: BTreeMap::new(),
        }
    }

    /// Reads the record at `path`, or creates a fresh one if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if an existing file can't be read or decoded.
    pub fn load_or_create(path: &Path) -> Result<Self, StateError> {
        if path.exists() {
            Self::read(path)
        } else {
            info!(path = %path.display(), "No state file found, starting a new record");
            Ok(Self::new())
        }
    }

    /// Reads a record from a MessagePack file.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the file can't be read, decoded, or has an
    /// unsupported version.
    pub fn read(path: &Path) -> Result<Self, StateError> {
        let bytes = std::fs::read(path).map_err(|e| StateError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let record: Self =
            rmp_serde::from_slice(&bytes).map_err(|e| StateError::DecodeError {
                path: path.display().to_string(),
                source: e,
            })?;

        if record.version != STATE_VERSION {
            return Err(StateError::UnsupportedVersion {
                path: path.display().to_string(),
                found: record.version,
                expected: STATE_VERSION,
            });
        }

        debug!(
            path = %path.display(),
            repositories = record.issues.len(),
            "Loaded state file"
        );
        Ok(record)
    }

    /// Writes the record to a MessagePack file, replacing any existing file.
    ///
    /// Fields are written as a named map so the file stays readable by other
    /// MessagePack tooling.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if encoding or writing fails.
    pub fn write(&self, path: &Path) -> Result<(), StateError> {
        let bytes = rmp_serde::to_vec_named(self)?;
        std::fs::write(path, bytes).map_err(|e| StateError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        debug!(path = %path.display(), "Wrote state file");
        Ok(())
    }

    /// Ensures an (possibly empty) entry exists for a source repository.
    pub fn ensure_repository(&mut self, repo_full_name: &str) {
        self.issues.entry(repo_full_name.to_string()).or_default();
    }

    /// Looks up the entry recorded for a source issue.
    #[must_use]
    pub fn entry(&self, repo_full_name: &str, issue_number: u64) -> Option<MirrorEntry> {
        self.issues
            .get(repo_full_name)
            .and_then(|entries| entries.get(&issue_number))
            .copied()
    }

    /// Records a mirrored (or simulated) source issue and bumps `last_modified`.
    ///
    /// Returns the entry it replaced, if any.
    pub fn record(
        &mut self,
        repo_full_name: &str,
        issue_number: u64,
        entry: MirrorEntry,
    ) -> Option<MirrorEntry> {
        let previous = self
            .issues
            .entry(repo_full_name.to_string())
            .or_default()
            .insert(issue_number, entry);
        self.last_modified = now_timestamp();
        previous
    }

    /// Returns the number of recorded issues per source repository.
    #[must_use]
    pub fn issue_counts(&self) -> Vec<(&str, usize)> {
        self.issues
            .iter()
            .map(|(repo, entries)| (repo.as_str(), entries.len()))
            .collect()
    }
}

fn now_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
