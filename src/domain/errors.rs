//! Domain error types
//!
//! This module defines the error hierarchy for mapexport.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main mapexport error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum MapExportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Export platform errors (submission rejected, transport failure)
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    /// Raster decoding errors
    #[error("Raster error: {0}")]
    Raster(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors reported synchronously by the export platform
///
/// Only the submission call can produce these. Failures of the export job
/// itself happen remotely and are never observed here.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Failed to reach the platform
    #[error("Failed to connect to export platform: {0}")]
    ConnectionFailed(String),

    /// Credentials rejected (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded (429)
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Response body could not be understood
    #[error("Invalid response from platform: {0}")]
    InvalidResponse(String),
}

impl PlatformError {
    /// Classify a non-success HTTP status returned by the platform
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => PlatformError::AuthenticationFailed(format!("{status} - {message}")),
            429 => PlatformError::RateLimitExceeded(message),
            400..=499 => PlatformError::ClientError { status, message },
            _ => PlatformError::ServerError { status, message },
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for MapExportError {
    fn from(err: std::io::Error) -> Self {
        MapExportError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for MapExportError {
    fn from(err: serde_json::Error) -> Self {
        MapExportError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for MapExportError {
    fn from(err: toml::de::Error) -> Self {
        MapExportError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv writer errors
impl From<csv::Error> for MapExportError {
    fn from(err: csv::Error) -> Self {
        MapExportError::Io(format!("CSV write error: {err}"))
    }
}

// Conversion from tiff decoding errors
impl From<tiff::TiffError> for MapExportError {
    fn from(err: tiff::TiffError) -> Self {
        MapExportError::Raster(err.to_string())
    }
}
