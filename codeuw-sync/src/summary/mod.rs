//! Run summary types and helpers.

mod result;
mod run_summary;
mod status;

pub use result::ProcessingResult;
pub use run_summary::{RepositorySummary, RunSummary};
pub use status::MirrorStatus;
