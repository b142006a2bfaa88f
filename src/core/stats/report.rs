//! Per-year class statistics and the CSV report

use crate::core::stats::legend::Legend;
use crate::core::stats::raster::read_class_histogram;
use crate::domain::{MapExportError, Result, Year};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// CSV header of the class report
pub const CSV_HEADER: &str = "ano,classe,num_px,porc_rel";

/// One CSV line of the class report
#[derive(Debug, Serialize)]
struct CsvRow {
    #[serde(rename = "ano")]
    year: i32,
    #[serde(rename = "classe")]
    class: u64,
    #[serde(rename = "num_px")]
    pixels: u64,
    #[serde(rename = "porc_rel")]
    percent: f64,
}

impl From<&ClassRecord> for CsvRow {
    fn from(record: &ClassRecord) -> Self {
        Self {
            year: record.year.value(),
            class: record.class,
            pixels: record.pixels,
            percent: record.percent,
        }
    }
}

/// Pixel count of one class in one year
#[derive(Debug, Clone, PartialEq)]
pub struct ClassRecord {
    pub year: Year,
    pub class: u64,
    pub pixels: u64,
    /// Share of the year's valid pixels, in percent
    pub percent: f64,
}

/// One row of the unified top-N table
#[derive(Debug, Clone, PartialEq)]
pub struct TopClassRow {
    pub year: Year,
    pub class: u64,
    /// Zero when the class is absent that year
    pub percent: f64,
    /// 1-based rank in that year, `top_n + 1` when outside the top N
    pub rank: usize,
    pub name: String,
    pub colour: String,
}

/// Statistics over every raster that could be read
#[derive(Debug, Clone, Default)]
pub struct StatisticsReport {
    records: Vec<ClassRecord>,
    years_processed: Vec<Year>,
    years_skipped: Vec<Year>,
}

/// Path of the exported raster for `year`
pub fn raster_path(input_dir: &Path, file_name_prefix: &str, year: Year) -> PathBuf {
    input_dir.join(format!("{file_name_prefix}{year}.tif"))
}

/// Reads the raster of every year and counts its classes
///
/// Years are processed once each, in ascending order. A missing or
/// unreadable raster is logged and skipped.
pub fn collect_statistics(
    years: &[Year],
    input_dir: &Path,
    file_name_prefix: &str,
    nodata: u64,
) -> StatisticsReport {
    let unique: BTreeSet<Year> = years.iter().copied().collect();
    let mut report = StatisticsReport::default();

    for year in unique {
        let path = raster_path(input_dir, file_name_prefix, year);
        if !path.exists() {
            tracing::warn!(year = %year, path = %path.display(), "Raster not found, skipping year");
            report.years_skipped.push(year);
            continue;
        }

        let histogram = match read_class_histogram(&path, nodata) {
            Ok(h) => h,
            Err(e) => {
                tracing::warn!(
                    year = %year,
                    path = %path.display(),
                    error = %e,
                    "Failed to read raster, skipping year"
                );
                report.years_skipped.push(year);
                continue;
            }
        };

        tracing::info!(
            year = %year,
            valid_pixels = histogram.total(),
            classes = histogram.class_count(),
            "Processed raster"
        );

        report
            .records
            .extend(histogram.rows().into_iter().map(|row| ClassRecord {
                year,
                class: row.class,
                pixels: row.pixels,
                percent: row.percent,
            }));
        report.years_processed.push(year);
    }

    report
}

impl StatisticsReport {
    /// Records sorted by year, then by pixel count descending
    pub fn records(&self) -> &[ClassRecord] {
        &self.records
    }

    /// Years whose raster was read
    pub fn years_processed(&self) -> &[Year] {
        &self.years_processed
    }

    /// Years whose raster was missing or unreadable
    pub fn years_skipped(&self) -> &[Year] {
        &self.years_skipped
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct class codes across all years
    pub fn distinct_classes(&self) -> BTreeSet<u64> {
        self.records.iter().map(|r| r.class).collect()
    }

    /// Records of `year`, largest class first
    pub fn year_records(&self, year: Year) -> Vec<&ClassRecord> {
        self.records.iter().filter(|r| r.year == year).collect()
    }

    /// The `n` largest classes of `year`
    pub fn top_classes(&self, year: Year, n: usize) -> Vec<&ClassRecord> {
        self.year_records(year).into_iter().take(n).collect()
    }

    /// Writes the report as CSV, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                MapExportError::Io(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let mut writer = csv::Writer::from_path(path)?;
        if self.records.is_empty() {
            writer.write_record(CSV_HEADER.split(','))?;
        }
        for record in &self.records {
            writer.serialize(CsvRow::from(record))?;
        }
        writer.flush()?;

        tracing::info!(path = %path.display(), rows = self.records.len(), "Wrote class report");
        Ok(())
    }

    /// Union of every year's top `top_n` classes, one row per year and class
    ///
    /// Rows are ordered by year, then class code.
    pub fn top_classes_table(&self, top_n: usize, legend: &Legend) -> Vec<TopClassRow> {
        let union: BTreeSet<u64> = self
            .years_processed
            .iter()
            .flat_map(|year| self.top_classes(*year, top_n))
            .map(|r| r.class)
            .collect();

        let mut rows = Vec::new();
        for year in &self.years_processed {
            let year_records = self.year_records(*year);
            for class in &union {
                let position = year_records.iter().position(|r| r.class == *class);
                let percent = position.map(|i| year_records[i].percent).unwrap_or(0.0);
                let rank = match position {
                    Some(i) if i < top_n => i + 1,
                    _ => top_n + 1,
                };

                rows.push(TopClassRow {
                    year: *year,
                    class: *class,
                    percent,
                    rank,
                    name: legend.name(*class),
                    colour: legend.colour(*class).to_string(),
                });
            }
        }
        rows
    }
}
