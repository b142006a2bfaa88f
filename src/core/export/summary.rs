//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use crate::domain::{MapExportError, PlatformError, Year};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Number of years requested
    pub total_years: usize,

    /// Tasks accepted by the platform
    pub submitted: usize,

    /// Tasks the platform rejected
    pub failed: usize,

    /// Whether tasks were only logged
    pub dry_run: bool,

    /// Whether a shutdown signal stopped the run early
    pub interrupted: bool,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Duration of the run
    pub duration: Duration,

    /// Submission errors, in the order they happened
    pub errors: Vec<ExportError>,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self {
            total_years: 0,
            submitted: 0,
            failed: 0,
            dry_run: false,
            interrupted: false,
            started_at: Utc::now(),
            duration: Duration::from_secs(0),
            errors: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a rejected submission
    pub fn record_failure(&mut self, error: ExportError) {
        self.failed += 1;
        self.errors.push(error);
    }

    /// Years requested but never handed to the platform
    pub fn skipped(&self) -> usize {
        self.total_years
            .saturating_sub(self.submitted + self.failed)
    }

    /// Check if every submission was accepted
    pub fn is_successful(&self) -> bool {
        self.failed == 0 && self.errors.is_empty()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_years = self.total_years,
            submitted = self.submitted,
            failed = self.failed,
            skipped = self.skipped(),
            dry_run = self.dry_run,
            interrupted = self.interrupted,
            started_at = %self.started_at.to_rfc3339(),
            duration_secs = self.duration.as_secs_f64(),
            "Export run completed"
        );

        if !self.errors.is_empty() {
            tracing::warn!(
                error_count = self.errors.len(),
                "Export run completed with rejected submissions"
            );
            for error in &self.errors {
                tracing::warn!(
                    year = %error.year,
                    error_type = ?error.error_type,
                    message = %error.message,
                    "Submission rejected"
                );
            }
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Type of submission error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportErrorType {
    /// Platform unreachable or timed out
    Connection,
    /// Credentials rejected
    Authentication,
    /// Rate limited
    RateLimit,
    /// Request rejected by the platform
    Rejected,
    /// Unknown error
    Unknown,
}

impl From<&MapExportError> for ExportErrorType {
    fn from(error: &MapExportError) -> Self {
        match error {
            MapExportError::Platform(platform) => match platform {
                PlatformError::ConnectionFailed(_) | PlatformError::Timeout(_) => {
                    ExportErrorType::Connection
                }
                PlatformError::AuthenticationFailed(_) => ExportErrorType::Authentication,
                PlatformError::RateLimitExceeded(_) => ExportErrorType::RateLimit,
                PlatformError::ClientError { .. }
                | PlatformError::ServerError { .. }
                | PlatformError::InvalidResponse(_) => ExportErrorType::Rejected,
            },
            _ => ExportErrorType::Unknown,
        }
    }
}

/// A rejected submission
#[derive(Debug, Clone)]
pub struct ExportError {
    /// Year whose task was rejected
    pub year: Year,

    /// Type of error
    pub error_type: ExportErrorType,

    /// Error message
    pub message: String,
}

impl ExportError {
    /// Create a new export error
    pub fn new(year: Year, error_type: ExportErrorType, message: String) -> Self {
        Self {
            year,
            error_type,
            message,
        }
    }

    /// Classify a platform error for `year`
    pub fn from_error(year: Year, error: &MapExportError) -> Self {
        Self::new(year, ExportErrorType::from(error), error.to_string())
    }
}
