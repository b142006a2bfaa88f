// mapexport - Annual land-cover export orchestrator
// Copyright (c) 2025 Mapexport Contributors
// Licensed under the MIT License

//! # mapexport - Annual land-cover export orchestrator
//!
//! mapexport asks Google Earth Engine to export an annual land-cover
//! classification, one raster per year, clipped to a region of interest.
//!
//! ## Overview
//!
//! For every configured year the tool:
//! - **Selects** band `classification_<year>` from the source image
//! - **Clips** it to the region of interest
//! - **Submits** an export task named `Exportar_<year>` that writes
//!   `classificacao_<year>` into the destination folder
//!
//! Submission is fire-and-forget: the platform runs the jobs and reports
//! their outcome in its own task console. Once the rasters are downloaded,
//! the `stats` command counts pixels per class and writes a CSV report.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Task construction, submission loop, class statistics
//! - [`adapters`] - Export platforms (Earth Engine REST, dry run)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mapexport::config::load_config;
//! use mapexport::core::export::ExportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("mapexport.toml")?;
//!
//!     let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!     let coordinator = ExportCoordinator::new(config, shutdown_rx)?;
//!
//!     let summary = coordinator.execute_export().await?;
//!     println!("Submitted {} export tasks", summary.submitted);
//!     Ok(())
//! }
//! ```
//!
//! ## Building tasks without submitting
//!
//! Task construction is pure, so the task list can be inspected offline:
//!
//! ```rust,no_run
//! use mapexport::config::load_config;
//! use mapexport::core::export::TaskTemplate;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("mapexport.toml")?;
//! let template = TaskTemplate::from_config(&config)?;
//!
//! for task in template.plan_tasks(&config.export.years.years()) {
//!     println!("{} -> {}", task.description, task.file_name_prefix);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`], whose error type is
//! [`domain::MapExportError`]. A rejected submission does not stop the run;
//! it is recorded in the [`core::export::ExportSummary`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
