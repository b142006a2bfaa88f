//! Export orchestration
//!
//! This module provides the core export logic for mapexport:
//! - Per-year task construction
//! - Submission coordination
//! - Summary and reporting

pub mod coordinator;
pub mod plan;
pub mod summary;

pub use coordinator::ExportCoordinator;
pub use plan::TaskTemplate;
pub use summary::{ExportError, ExportErrorType, ExportSummary};
