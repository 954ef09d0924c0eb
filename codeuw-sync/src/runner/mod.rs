//! Orchestrates a mirroring run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::SyncConfig;
use crate::pipeline::{ContactStyle, IssueMirror};
use crate::platform::{GitHubPlatform, IssuePlatform};
use crate::summary::RunSummary;
use crate::templates::IssueTemplate;
use crate::tracker::{DuplicateTracker, KeyedStateTracker, TitleScanTracker, TrackerStrategy};
use tracing::{info, warn};

/// Runs the mirror against an issue platform.
pub struct Runner<P = GitHubPlatform> {
    config: RunnerConfig,
    platform: P,
}

impl Runner<GitHubPlatform> {
    /// Builds a runner that talks to GitHub.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the GitHub client can't be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let platform = GitHubPlatform::new(config.token())?;
        Ok(Self::with_platform(config, platform))
    }
}

impl<P: IssuePlatform> Runner<P> {
    /// Builds a runner on top of any issue platform.
    pub fn with_platform(config: RunnerConfig, platform: P) -> Self {
        Self { config, platform }
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Returns the issue platform.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Consumes the runner, returning its issue platform.
    pub fn into_platform(self) -> P {
        self.platform
    }

    /// Executes the full flow: load configuration, set up the tracker,
    /// mirror every source repository, then persist state.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] on the first failure; nothing is retried.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        // Configuration errors surface before any network activity
        let sync = SyncConfig::load(self.config.config_path())?;
        let mut tracker = self.build_tracker(&sync).await?;
        self.run_with_tracker(&sync, tracker.as_mut()).await
    }

    /// Creates the duplicate tracker selected in the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the state file can't be read or the
    /// aggregator's titles can't be listed.
    pub async fn build_tracker(
        &self,
        sync: &SyncConfig,
    ) -> Result<Box<dyn DuplicateTracker>, RunnerError> {
        let tracker: Box<dyn DuplicateTracker> = match self.config.strategy() {
            TrackerStrategy::KeyedState => {
                Box::new(KeyedStateTracker::load(self.config.state_path())?)
            }
            TrackerStrategy::TitleScan => {
                Box::new(TitleScanTracker::fetch(&self.platform, &sync.owner, &sync.repo).await?)
            }
        };
        info!(strategy = %tracker.strategy(), "Duplicate tracker ready");
        Ok(tracker)
    }

    /// Mirrors every configured source repository using the given tracker.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] on the first failure.
    pub async fn run_with_tracker(
        &self,
        sync: &SyncConfig,
        tracker: &mut dyn DuplicateTracker,
    ) -> Result<RunSummary, RunnerError> {
        let dry_run = self.config.dry_run();
        let strategy = tracker.strategy();
        let mut summary = RunSummary::new(dry_run, strategy);

        let aggregator = self.platform.repository(&sync.owner, &sync.repo).await?;
        info!(aggregator = %aggregator.full_name, dry_run, "Mirroring into aggregating repository");

        let template = IssueTemplate::fetch(&self.platform, &sync.owner, &sync.repo).await?;

        if sync.repos.is_empty() {
            warn!("No source repositories configured");
        }

        let mirror = IssueMirror::new(
            &self.platform,
            &template,
            &sync.owner,
            &sync.repo,
            dry_run,
            contact_style(strategy),
        );

        for source in &sync.repos {
            let repository = mirror.mirror_repository(tracker, source).await?;
            summary.repositories.push(repository);
        }

        if dry_run {
            info!("Dry run, not writing state");
        } else {
            tracker.persist()?;
        }

        summary.recorded = tracker.recorded_counts();
        for (repo, count) in &summary.recorded {
            info!(repo = %repo, issues = count, "Issues creation summary");
        }

        Ok(summary)
    }
}

/// The keyed-state strategy knows the author; title scans ask for manual entry.
fn contact_style(strategy: TrackerStrategy) -> ContactStyle {
    match strategy {
        TrackerStrategy::KeyedState => ContactStyle::AuthorHandle,
        TrackerStrategy::TitleScan => ContactStyle::ManualEntry,
    }
}
