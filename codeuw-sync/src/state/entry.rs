//! Per-issue mirror entries.

use serde::{Deserialize, Serialize};

/// Stored in place of an issue number when a dry run simulated the creation.
pub const DRY_RUN_SENTINEL: i64 = -1;

/// What the record knows about a single mirrored source issue.
///
/// Serialized as a plain integer: the mirrored issue number, or
/// [`DRY_RUN_SENTINEL`] for simulated creations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum MirrorEntry {
    /// Mirrored as this issue number in the aggregating repository.
    Mirrored(u64),

    /// Creation was simulated during a dry run.
    Simulated,
}

impl MirrorEntry {
    /// Returns the mirrored issue number, if the issue was really created.
    #[must_use]
    pub fn number(&self) -> Option<u64> {
        match self {
            Self::Mirrored(number) => Some(*number),
            Self::Simulated => None,
        }
    }
}

impl TryFrom<i64> for MirrorEntry {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value == DRY_RUN_SENTINEL {
            return Ok(Self::Simulated);
        }
        match u64::try_from(value) {
            Ok(number) if number > 0 => Ok(Self::Mirrored(number)),
            _ => Err(format!("invalid mirrored issue number: {value}")),
        }
    }
}

impl From<MirrorEntry> for i64 {
    fn from(entry: MirrorEntry) -> Self {
        match entry {
            MirrorEntry::Mirrored(number) => i64::try_from(number).unwrap_or(i64::MAX),
            MirrorEntry::Simulated => DRY_RUN_SENTINEL,
        }
    }
}
