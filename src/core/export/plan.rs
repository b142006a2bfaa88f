//! Per-year task construction
//!
//! Building a task is pure: it only combines the configured template with a
//! year. Nothing here talks to the platform.

use crate::config::MapExportConfig;
use crate::domain::{
    AssetId, BandName, Destination, ExportTask, MapExportError, RegionOfInterest, Result,
    SourceImage, Year,
};

/// Everything an export task shares across years
#[derive(Debug, Clone)]
pub struct TaskTemplate {
    source: SourceImage,
    region: RegionOfInterest,
    band_prefix: String,
    description_prefix: String,
    file_name_prefix: String,
    destination: Destination,
    scale: f64,
    max_pixels: u64,
    file_format: String,
}

impl TaskTemplate {
    /// Builds the template from the `[source]` and `[export]` sections
    ///
    /// # Errors
    ///
    /// Returns a validation error if an asset id is empty
    pub fn from_config(config: &MapExportConfig) -> Result<Self> {
        let image_asset =
            AssetId::new(config.source.image_asset.as_str()).map_err(MapExportError::Validation)?;
        let region_asset = AssetId::new(config.source.region_asset.as_str())
            .map_err(MapExportError::Validation)?;

        Ok(Self {
            source: SourceImage::load(image_asset),
            region: RegionOfInterest::load(region_asset),
            band_prefix: config.source.band_prefix.clone(),
            description_prefix: config.export.description_prefix.clone(),
            file_name_prefix: config.export.file_name_prefix.clone(),
            destination: config.export.destination(),
            scale: config.export.scale,
            max_pixels: config.export.max_pixels,
            file_format: config.export.file_format.clone(),
        })
    }

    /// Source image every task selects from
    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    /// Region every task is clipped to
    pub fn region(&self) -> &RegionOfInterest {
        &self.region
    }

    /// Builds the export task for one year
    pub fn build_task(&self, year: Year) -> ExportTask {
        let band = BandName::for_year(&self.band_prefix, year);
        let image = self.source.select(band).clip(&self.region);

        ExportTask {
            year,
            image,
            description: format!("{}{}", self.description_prefix, year),
            destination: self.destination.clone(),
            file_name_prefix: format!("{}{}", self.file_name_prefix, year),
            region: self.region.clone(),
            scale: self.scale,
            max_pixels: self.max_pixels,
            file_format: self.file_format.clone(),
        }
    }

    /// Builds one task per year, in input order
    ///
    /// Duplicated years yield duplicated tasks.
    pub fn plan_tasks(&self, years: &[Year]) -> Vec<ExportTask> {
        years.iter().map(|year| self.build_task(*year)).collect()
    }
}
