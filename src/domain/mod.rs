//! Domain models and types for mapexport.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`Year`], [`AssetId`], [`BandName`])
//! - **Lazy platform references** ([`SourceImage`], [`RegionOfInterest`], [`Image`])
//! - **The export descriptor** ([`ExportTask`], [`Destination`])
//! - **Error types** ([`MapExportError`], [`PlatformError`])
//! - **Result type alias** ([`Result`])
//!
//! # Building an image expression
//!
//! ```rust
//! use mapexport::domain::{AssetId, BandName, RegionOfInterest, SourceImage};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let region = RegionOfInterest::load(AssetId::new("projects/p/assets/roi")?);
//! let source = SourceImage::load(AssetId::new("projects/p/assets/lulc")?);
//!
//! let clipped = source
//!     .select(BandName::new("classification_1985")?)
//!     .clip(&region);
//! assert_eq!(clipped.band().as_str(), "classification_1985");
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod image;
pub mod result;
pub mod task;

// Re-export commonly used types for convenience
pub use errors::{MapExportError, PlatformError};
pub use ids::{AssetId, BandName, Year};
pub use image::{Image, RegionOfInterest, SourceImage};
pub use result::Result;
pub use task::{Destination, ExportTask};
