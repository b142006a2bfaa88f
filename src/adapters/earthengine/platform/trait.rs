//! Export platform trait definition
//!
//! `ExportPlatform` is the seam between the orchestrator and whatever runs the
//! export jobs. The orchestrator only needs one operation from it: register a
//! job and return.

use crate::domain::{ExportTask, Result};
use async_trait::async_trait;

/// A facility that accepts batch export jobs
///
/// Implementations enqueue the job and return as soon as the platform has
/// accepted it. They never wait for the job to run, and they do not hand back
/// a job handle: callers have nothing to poll.
///
/// # Example
///
/// ```no_run
/// use mapexport::adapters::earthengine::{DryRunPlatform, ExportPlatform};
/// use mapexport::core::export::TaskTemplate;
/// use mapexport::domain::Year;
///
/// # async fn example(template: &TaskTemplate) -> mapexport::domain::Result<()> {
/// let platform = DryRunPlatform::new();
/// let task = template.build_task(Year::new(1985).unwrap());
/// platform.submit_export(&task).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ExportPlatform: Send + Sync {
    /// Register an export job for `task`
    ///
    /// # Errors
    ///
    /// Returns an error only when the platform rejects the submission
    /// itself. Failures of the job (missing band, pixel limit, ...) are
    /// reported by the platform's own task console and never surface here.
    async fn submit_export(&self, task: &ExportTask) -> Result<()>;

    /// Short name used in logs
    fn name(&self) -> &str;
}
