//! Lazy references to remote rasters and geometries
//!
//! Nothing here talks to the platform. Loading an asset, selecting a band and
//! clipping only build an expression; the platform evaluates it when an export
//! job runs, so a missing band or bad asset surfaces remotely.

use super::ids::{AssetId, BandName};
use serde::{Deserialize, Serialize};

/// Feature collection used as clip mask and export region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionOfInterest {
    asset_id: AssetId,
}

impl RegionOfInterest {
    /// References a feature collection asset by identifier
    pub fn load(asset_id: AssetId) -> Self {
        Self { asset_id }
    }

    /// Identifier of the referenced feature collection
    pub fn asset_id(&self) -> &AssetId {
        &self.asset_id
    }
}

/// Multi-band source raster with one band per classification year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceImage {
    asset_id: AssetId,
}

impl SourceImage {
    /// References an image asset by identifier
    pub fn load(asset_id: AssetId) -> Self {
        Self { asset_id }
    }

    /// Identifier of the referenced image
    pub fn asset_id(&self) -> &AssetId {
        &self.asset_id
    }

    /// Projects a single band by name
    pub fn select(&self, band: BandName) -> Image {
        Image::Select {
            source: self.clone(),
            band,
        }
    }
}

/// Image expression evaluated by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Image {
    /// One band of the source image
    Select { source: SourceImage, band: BandName },

    /// An image restricted to a region's geometry
    Clip {
        input: Box<Image>,
        region: RegionOfInterest,
    },
}

impl Image {
    /// Restricts the image to the region's extent and mask
    pub fn clip(self, region: &RegionOfInterest) -> Image {
        Image::Clip {
            input: Box::new(self),
            region: region.clone(),
        }
    }

    /// The band this expression ultimately reads
    pub fn band(&self) -> &BandName {
        match self {
            Image::Select { band, .. } => band,
            Image::Clip { input, .. } => input.band(),
        }
    }

    /// The source image this expression ultimately reads
    pub fn source(&self) -> &SourceImage {
        match self {
            Image::Select { source, .. } => source,
            Image::Clip { input, .. } => input.source(),
        }
    }
}
