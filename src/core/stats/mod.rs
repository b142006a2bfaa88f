//! Class statistics over exported rasters
//!
//! Once the exported GeoTIFFs are downloaded, this module counts pixels per
//! land-cover class for each year and writes a CSV report.
//!
//! # Example
//!
//! ```rust,no_run
//! use mapexport::core::stats::{collect_statistics, Legend};
//! use mapexport::domain::Year;
//! use std::path::Path;
//!
//! # fn example() -> mapexport::domain::Result<()> {
//! let years = vec![Year::new(1985).unwrap(), Year::new(1986).unwrap()];
//! let report = collect_statistics(&years, Path::new("rasters"), "classificacao_", 0);
//! report.write_csv("classes.csv")?;
//!
//! let legend = Legend::load_or_empty(Some("legend.json"));
//! for row in report.top_classes_table(5, &legend) {
//!     println!("{} {} {:.2}% #{}", row.year, row.name, row.percent, row.rank);
//! }
//! # Ok(())
//! # }
//! ```

pub mod histogram;
pub mod legend;
pub mod raster;
pub mod report;

pub use histogram::{ClassCount, ClassHistogram};
pub use legend::{Legend, LegendEntry};
pub use raster::read_class_histogram;
pub use report::{collect_statistics, raster_path, ClassRecord, StatisticsReport, TopClassRow};
