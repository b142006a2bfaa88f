//! Export command implementation
//!
//! This module implements the `export` command, which submits one Earth
//! Engine export task per configured year.

use crate::config::{load_config, YearSelection};
use crate::core::export::ExportCoordinator;
use crate::domain::ids::parse_year_list;
use crate::domain::MapExportError;
use clap::Args;
use tokio::sync::watch;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - log the tasks without submitting them
    #[arg(long)]
    pub dry_run: bool,

    /// Override the years to export (e.g. "1985,1990" or "1985-2024")
    #[arg(long)]
    pub years: Option<String>,

    /// Override the Drive destination folder
    #[arg(long)]
    pub folder: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        // Apply CLI overrides
        if let Some(years) = &self.years {
            match parse_year_list(years) {
                Ok(list) => {
                    tracing::info!(years = %years, "Overriding years from CLI");
                    config.export.years = YearSelection::List(list);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Invalid --years value");
                    eprintln!("Invalid --years value: {e}");
                    return Ok(2);
                }
            }
        }

        if let Some(folder) = &self.folder {
            tracing::info!(folder = %folder, "Overriding destination folder from CLI");
            config.export.folder = folder.clone();
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let dry_run = config.is_dry_run();
        if dry_run {
            tracing::info!("Dry run mode enabled - no tasks will be submitted");
            println!("🔍 DRY RUN MODE - No tasks will be submitted to Earth Engine");
            println!();
        }

        let years = config.export.years.years();

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !dry_run {
            println!("Export Configuration:");
            println!("  Project: {}", config.earthengine.project);
            println!("  Image: {}", config.source.image_asset);
            println!("  Region: {}", config.source.region_asset);
            println!("  Destination: {}", config.export.destination().describe());
            println!("  Years: {}", describe_years(&years));
            println!("  Scale: {} m", config.export.scale);
            println!();
            print!("Submit {} export task(s)? [y/N]: ", years.len());
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Export cancelled.");
                return Ok(0);
            }
        }

        tracing::info!("Creating export coordinator");
        let coordinator = match ExportCoordinator::new(config, shutdown_signal) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export coordinator");
                eprintln!("Failed to initialize export: {e}");
                return Ok(match e {
                    MapExportError::Configuration(_) | MapExportError::Validation(_) => 2,
                    _ => 4,
                });
            }
        };

        println!("🚀 Submitting export tasks...");
        println!();

        let summary = match coordinator.execute_export().await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(5);
            }
        };

        println!();
        println!("📊 Export Summary:");
        println!("  Years: {}", summary.total_years);
        println!("  Submitted: {}", summary.submitted);
        println!("  Rejected: {}", summary.failed);
        if summary.skipped() > 0 {
            println!("  Not submitted: {}", summary.skipped());
        }
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();

        if !summary.errors.is_empty() {
            println!("⚠️  Rejected submissions:");
            for error in &summary.errors {
                println!("  - {} ({:?}): {}", error.year, error.error_type, error.message);
            }
            println!();
        }

        let exit_code = if summary.interrupted {
            println!("⚠️  Export interrupted. Tasks already submitted keep running.");
            println!();
            tracing::info!("Export interrupted by user signal");
            130
        } else if summary.is_successful() {
            if dry_run {
                println!("✅ Dry run completed!");
            } else {
                println!("✅ All tasks submitted! Track them in the Earth Engine task console.");
            }
            0
        } else {
            println!("⚠️  Export completed with rejected submissions");
            1
        };

        Ok(exit_code)
    }
}

fn describe_years(years: &[crate::domain::Year]) -> String {
    match (years.first(), years.last()) {
        (Some(first), Some(last)) if years.len() > 3 => {
            format!("{} years ({first} .. {last})", years.len())
        }
        _ => years
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    }
}
