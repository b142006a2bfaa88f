//! Stats command implementation
//!
//! Counts land-cover classes in the downloaded export rasters and writes
//! the CSV report.

use crate::config::load_config;
use crate::core::stats::{collect_statistics, Legend};
use crate::domain::ids::parse_year_list;
use clap::Args;
use std::path::Path;

/// Arguments for the stats command
#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    /// Directory holding the downloaded rasters
    #[arg(long)]
    pub input_dir: Option<String>,

    /// CSV report path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Legend JSON with class names and colours
    #[arg(long)]
    pub legend: Option<String>,

    /// Years to process (e.g. "1985,1990" or "1985-2024")
    #[arg(long)]
    pub years: Option<String>,

    /// Number of leading classes listed per year
    #[arg(long)]
    pub top_n: Option<usize>,
}

impl StatsArgs {
    /// Execute the stats command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting stats command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        if let Some(input_dir) = &self.input_dir {
            config.stats.input_dir = input_dir.clone();
        }
        if let Some(output) = &self.output {
            config.stats.output_csv = output.clone();
        }
        if let Some(legend) = &self.legend {
            config.stats.legend_path = Some(legend.clone());
        }
        if let Some(top_n) = self.top_n {
            config.stats.top_n = top_n;
        }

        if let Err(e) = config.validate() {
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let years = match &self.years {
            Some(years) => match parse_year_list(years) {
                Ok(list) => list,
                Err(e) => {
                    eprintln!("Invalid --years value: {e}");
                    return Ok(2);
                }
            },
            None => config.export.years.years(),
        };

        let stats = &config.stats;
        let legend = Legend::load_or_empty(stats.legend_path.as_deref());

        println!("📊 Counting classes in {}", stats.input_dir);
        println!();

        let report = collect_statistics(
            &years,
            Path::new(&stats.input_dir),
            &config.export.file_name_prefix,
            stats.nodata,
        );

        for year in report.years_skipped() {
            println!("⚠️  No readable raster for {year}");
        }

        if report.is_empty() {
            println!("❌ No data was processed. Check input_dir and file names.");
            return Ok(1);
        }

        report.write_csv(&stats.output_csv)?;

        let processed = report.years_processed();
        println!();
        println!("✅ Report written to {}", stats.output_csv);
        println!("  Records: {}", report.records().len());
        println!("  Years processed: {}", processed.len());
        if let (Some(first), Some(last)) = (processed.first(), processed.last()) {
            println!("  Period: {first} - {last}");
        }
        println!("  Distinct classes: {}", report.distinct_classes().len());
        println!();

        println!("Top {} classes per year:", stats.top_n);
        for year in processed {
            println!("  {year}:");
            for record in report.top_classes(*year, stats.top_n) {
                println!(
                    "    {:>4}  {:<40} {:>12} px  {:>6.2}%",
                    record.class,
                    legend.name(record.class),
                    record.pixels,
                    record.percent
                );
            }
        }
        println!();

        let table = report.top_classes_table(stats.top_n, &legend);
        tracing::debug!(rows = table.len(), "Built unified top classes table");
        for row in &table {
            tracing::trace!(
                year = %row.year,
                class = row.class,
                name = %row.name,
                colour = %row.colour,
                percent = row.percent,
                rank = row.rank,
                "Top class"
            );
        }

        if report.years_skipped().is_empty() {
            Ok(0)
        } else {
            Ok(1)
        }
    }
}
