#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod pipeline;
pub mod platform;
pub mod runner;
pub mod state;
pub mod summary;
pub mod templates;
pub mod tracker;

pub use config::{ConfigError, SourceRepository, SyncConfig};
pub use pipeline::{
    body_fields, filter_labeled, ContactStyle, IssueMirror, PipelineError, TRACKED_LABEL,
};
pub use platform::{
    CreatedIssue, GitHubPlatform, IssuePlatform, NewIssue, PlatformError, RepositoryInfo,
    SourceIssue,
};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use state::{DeduplicationRecord, MirrorEntry, StateError, DRY_RUN_SENTINEL};
pub use summary::{MirrorStatus, ProcessingResult, RepositorySummary, RunSummary};
pub use templates::{FormatTemplate, IssueFormDefinition, IssueTemplate, TemplateError};
pub use tracker::{
    Duplicate, DuplicateTracker, KeyedStateTracker, MirrorCandidate, TitleScanTracker,
    TrackerStrategy,
};
