//! Processing result types.

use super::MirrorStatus;

/// Result of processing a single labeled source issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingResult {
    /// Source repository full name.
    pub repository: String,

    /// Source issue number.
    pub issue_number: u64,

    /// Rendered title of the mirrored issue.
    pub title: String,

    /// What happened to the issue.
    pub status: MirrorStatus,
}
