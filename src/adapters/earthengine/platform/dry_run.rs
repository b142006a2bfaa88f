//! Dry-run platform
//!
//! Logs each task with the request body it would have sent.

use super::ExportPlatform;
use crate::adapters::earthengine::models::ExportImageRequest;
use crate::domain::{ExportTask, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Platform that accepts every task without contacting Earth Engine
#[derive(Debug, Default)]
pub struct DryRunPlatform {
    submitted: AtomicUsize,
}

impl DryRunPlatform {
    /// Create a new dry-run platform
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks logged so far
    pub fn submitted(&self) -> usize {
        self.submitted.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExportPlatform for DryRunPlatform {
    async fn submit_export(&self, task: &ExportTask) -> Result<()> {
        let request = ExportImageRequest::from_task(task, "dry-run");
        let body = serde_json::to_string(&request)?;

        tracing::info!(
            year = %task.year,
            description = %task.description,
            destination = %task.destination.describe(),
            file_name_prefix = %task.file_name_prefix,
            "[DRY RUN] Would submit export task"
        );
        tracing::debug!(year = %task.year, body = %body, "[DRY RUN] Request body");

        self.submitted.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &str {
        "dry-run"
    }
}
