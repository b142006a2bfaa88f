//! Core business logic for mapexport.
//!
//! # Modules
//!
//! - [`export`] - Per-year task construction and submission
//! - [`stats`] - Class statistics over exported rasters
//!
//! # Example
//!
//! ```rust,no_run
//! use mapexport::config::load_config;
//! use mapexport::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("mapexport.toml")?;
//!
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! let coordinator = ExportCoordinator::new(config, shutdown_rx)?;
//!
//! let summary = coordinator.execute_export().await?;
//!
//! println!("Submitted: {}", summary.submitted);
//! println!("Failed: {}", summary.failed);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod stats;
