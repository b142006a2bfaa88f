//! Export coordinator - runs the per-year submission loop
//!
//! The coordinator expands the configured years, builds one task per year and
//! hands each task to the export platform, in order. It never waits for the
//! exports themselves.

use crate::adapters::earthengine::{create_platform, ExportPlatform};
use crate::config::MapExportConfig;
use crate::core::export::plan::TaskTemplate;
use crate::core::export::summary::{ExportError, ExportSummary};
use crate::domain::{Result, Year};
use crate::{log_error_with_context, log_task_submitted};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Export coordinator
pub struct ExportCoordinator {
    config: MapExportConfig,
    template: TaskTemplate,
    platform: Arc<dyn ExportPlatform>,
    shutdown_signal: watch::Receiver<bool>,
}

impl ExportCoordinator {
    /// Create a coordinator with the platform the configuration asks for
    ///
    /// # Errors
    ///
    /// Returns an error if the platform cannot be created (missing
    /// credentials, HTTP client setup) or an asset id is empty.
    pub fn new(config: MapExportConfig, shutdown_signal: watch::Receiver<bool>) -> Result<Self> {
        let platform = create_platform(&config)?;
        Self::with_platform(config, platform, shutdown_signal)
    }

    /// Create a coordinator around an existing platform
    ///
    /// # Errors
    ///
    /// Returns an error if an asset id is empty
    pub fn with_platform(
        config: MapExportConfig,
        platform: Arc<dyn ExportPlatform>,
        shutdown_signal: watch::Receiver<bool>,
    ) -> Result<Self> {
        let template = TaskTemplate::from_config(&config)?;
        Ok(Self {
            config,
            template,
            platform,
            shutdown_signal,
        })
    }

    /// Years this run will submit
    pub fn years(&self) -> Vec<Year> {
        self.config.export.years.years()
    }

    /// Execute the export
    ///
    /// Submits one task per configured year, in order. A rejected submission
    /// is recorded in the summary and the loop moves on to the next year.
    /// A shutdown signal stops the loop before the next submission.
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();
        summary.dry_run = self.config.is_dry_run();

        let tasks = self.template.plan_tasks(&self.years());
        summary.total_years = tasks.len();

        tracing::info!(
            platform = self.platform.name(),
            years = tasks.len(),
            image_asset = %self.template.source().asset_id(),
            region_asset = %self.template.region().asset_id(),
            destination = %self.config.export.destination().describe(),
            "Starting export run"
        );

        if tasks.is_empty() {
            tracing::warn!("No years to export");
        }

        for task in tasks {
            let year = task.year;
            if *self.shutdown_signal.borrow() {
                tracing::info!(next_year = %year, "Shutdown requested, stopping submissions");
                summary.interrupted = true;
                break;
            }

            match self.platform.submit_export(&task).await {
                Ok(()) => {
                    summary.submitted += 1;
                    log_task_submitted!(task.year, task.description, task.file_name_prefix);
                }
                Err(e) => {
                    log_error_with_context!(&e, format!("Submission rejected for year {year}"));
                    summary.record_failure(ExportError::from_error(year, &e));
                }
            }
        }

        summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        Ok(summary)
    }
}
