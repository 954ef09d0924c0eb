//! Mirror status types.

use serde::Serialize;

/// Outcome of mirroring a single source issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MirrorStatus {
    /// Issue created in the aggregating repository.
    Created {
        /// Aggregator issue number.
        number: u64,
        /// Aggregator issue URL.
        url: String,
    },

    /// Dry run; creation was only logged.
    Simulated,

    /// Already mirrored, nothing was done.
    Skipped {
        /// Reason for skipping.
        reason: String,
    },
}

impl MirrorStatus {
    /// Returns the status as a short string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Simulated => "simulated",
            Self::Skipped { .. } => "skipped",
        }
    }
}
