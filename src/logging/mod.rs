//! Logging and observability
//!
//! Structured logging on top of `tracing`:
//! - Human-readable console output
//! - Optional JSON file logging with rotation
//! - Helper macros for the events every export run emits
//!
//! # Example
//!
//! ```no_run
//! use mapexport::logging::init_logging;
//! use mapexport::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a submitted export task
///
/// # Example
///
/// ```no_run
/// use mapexport::log_task_submitted;
///
/// log_task_submitted!(1985, "Exportar_1985", "classificacao_1985");
/// ```
#[macro_export]
macro_rules! log_task_submitted {
    ($year:expr, $description:expr, $file_name_prefix:expr) => {
        tracing::info!(
            year = %$year,
            description = %$description,
            file_name_prefix = %$file_name_prefix,
            "Export task submitted"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use mapexport::log_error_with_context;
/// use mapexport::domain::MapExportError;
///
/// let error = MapExportError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = %$context,
            "Error occurred"
        );
    };
}
