//! Export task descriptor
//!
//! An [`ExportTask`] is the value handed to the platform for one year. It is
//! built, submitted and dropped; nothing keeps it around afterwards.

use super::ids::Year;
use super::image::{Image, RegionOfInterest};
use serde::{Deserialize, Serialize};

/// Where the platform writes the exported raster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Destination {
    /// A folder in the user's Drive
    Drive { folder: String },

    /// A folder (object name prefix) inside a Cloud Storage bucket
    ///
    /// An empty folder writes to the bucket root.
    CloudStorage { bucket: String, folder: String },
}

impl Destination {
    /// Human-readable location, used in logs and summaries
    pub fn describe(&self) -> String {
        match self {
            Destination::Drive { folder } => format!("drive:{folder}"),
            Destination::CloudStorage { bucket, folder } => match cloud_folder(folder) {
                Some(folder) => format!("gs://{bucket}/{folder}"),
                None => format!("gs://{bucket}"),
            },
        }
    }

    /// File name prefix as the platform expects it for this destination
    ///
    /// Drive takes the folder separately. Cloud Storage has no folders, so
    /// the folder becomes part of the object name.
    pub fn output_prefix(&self, file_name_prefix: &str) -> String {
        match self {
            Destination::Drive { .. } => file_name_prefix.to_string(),
            Destination::CloudStorage { folder, .. } => match cloud_folder(folder) {
                Some(folder) => format!("{folder}/{file_name_prefix}"),
                None => file_name_prefix.to_string(),
            },
        }
    }
}

fn cloud_folder(folder: &str) -> Option<&str> {
    let folder = folder.trim().trim_matches('/');
    (!folder.is_empty()).then_some(folder)
}

/// Everything the platform needs to run one export job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTask {
    /// Year this task was derived from
    pub year: Year,

    /// Clipped single-band image
    pub image: Image,

    /// Task description shown in the platform's job console
    pub description: String,

    /// Output location
    pub destination: Destination,

    /// Output file name prefix, unique per year
    pub file_name_prefix: String,

    /// Export region
    pub region: RegionOfInterest,

    /// Ground resolution in meters per pixel
    pub scale: f64,

    /// Pixel ceiling enforced by the platform
    pub max_pixels: u64,

    /// Output file format (e.g. GEO_TIFF)
    pub file_format: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_keeps_prefix() {
        let destination = Destination::Drive {
            folder: "SAIDA_MAPBIOMAS_ANOS".to_string(),
        };
        assert_eq!(destination.describe(), "drive:SAIDA_MAPBIOMAS_ANOS");
        assert_eq!(
            destination.output_prefix("classificacao_1985"),
            "classificacao_1985"
        );
    }

    #[test]
    fn test_cloud_storage_folder_in_object_name() {
        let destination = Destination::CloudStorage {
            bucket: "lulc-exports".to_string(),
            folder: "SAIDA_MAPBIOMAS_ANOS/".to_string(),
        };
        assert_eq!(destination.describe(), "gs://lulc-exports/SAIDA_MAPBIOMAS_ANOS");
        assert_eq!(
            destination.output_prefix("classificacao_1985"),
            "SAIDA_MAPBIOMAS_ANOS/classificacao_1985"
        );
    }

    #[test]
    fn test_cloud_storage_bucket_root() {
        let destination = Destination::CloudStorage {
            bucket: "lulc-exports".to_string(),
            folder: String::new(),
        };
        assert_eq!(destination.describe(), "gs://lulc-exports");
        assert_eq!(
            destination.output_prefix("classificacao_1985"),
            "classificacao_1985"
        );
    }
}
