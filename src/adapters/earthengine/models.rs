//! Earth Engine REST API models
//!
//! Request and response structures for `projects.image.export`. These are kept
//! apart from the domain types: the domain describes *what* to export, these
//! structs describe how Earth Engine wants to be told.

use crate::domain::{Destination, ExportTask, Image, RegionOfInterest};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Body of `POST /v1/projects/{project}/image:export`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportImageRequest {
    /// Expression graph producing the image to export
    pub expression: Expression,

    /// Task description shown in the task console
    pub description: String,

    /// Output format and destination
    pub file_export_options: FileExportOptions,

    /// Pixel ceiling, encoded as an int64 string
    pub max_pixels: String,

    /// Client-generated id; a repeated id is not started twice
    pub request_id: String,
}

impl ExportImageRequest {
    /// Builds the request for one export task
    pub fn from_task(task: &ExportTask, request_id: impl Into<String>) -> Self {
        let (drive_destination, cloud_storage_destination) = match &task.destination {
            Destination::Drive { folder } => (
                Some(DriveDestination {
                    folder: folder.clone(),
                    filename_prefix: task.file_name_prefix.clone(),
                }),
                None,
            ),
            Destination::CloudStorage { bucket, .. } => (
                None,
                Some(CloudStorageDestination {
                    bucket: bucket.clone(),
                    filename_prefix: task.destination.output_prefix(&task.file_name_prefix),
                }),
            ),
        };

        Self {
            expression: Expression::for_export(&task.image, &task.region, task.scale),
            description: task.description.clone(),
            file_export_options: FileExportOptions {
                file_format: task.file_format.clone(),
                drive_destination,
                cloud_storage_destination,
            },
            max_pixels: task.max_pixels.to_string(),
            request_id: request_id.into(),
        }
    }
}

/// Serialized expression graph
///
/// Nodes are nested inline under a single root value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expression {
    /// Key of the root node in `values`
    pub result: String,

    /// Value nodes by key
    pub values: BTreeMap<String, Value>,
}

impl Expression {
    /// Encodes `image` clipped to the region's bounds and resampled to `scale`
    pub fn for_export(image: &Image, region: &RegionOfInterest, scale: f64) -> Self {
        let root = invocation(
            "Image.clipToBoundsAndScale",
            json!({
                "input": encode_image(image),
                "geometry": invocation(
                    "Collection.geometry",
                    json!({ "collection": encode_region(region) }),
                ),
                "scale": constant(json!(scale)),
            }),
        );

        let mut values = BTreeMap::new();
        values.insert("0".to_string(), root);
        Self {
            result: "0".to_string(),
            values,
        }
    }
}

fn encode_image(image: &Image) -> Value {
    match image {
        Image::Select { source, band } => invocation(
            "Image.select",
            json!({
                "input": invocation(
                    "Image.load",
                    json!({ "id": constant(json!(source.asset_id().as_str())) }),
                ),
                "bandSelectors": constant(json!([band.as_str()])),
            }),
        ),
        Image::Clip { input, region } => invocation(
            "Image.clip",
            json!({
                "input": encode_image(input),
                "geometry": encode_region(region),
            }),
        ),
    }
}

fn encode_region(region: &RegionOfInterest) -> Value {
    invocation(
        "Collection.loadTable",
        json!({ "tableId": constant(json!(region.asset_id().as_str())) }),
    )
}

fn invocation(function_name: &str, arguments: Value) -> Value {
    json!({
        "functionInvocationValue": {
            "functionName": function_name,
            "arguments": arguments,
        }
    })
}

fn constant(value: Value) -> Value {
    json!({ "constantValue": value })
}

/// Output format and destination
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileExportOptions {
    /// File format, e.g. GEO_TIFF
    pub file_format: String,

    /// Drive destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_destination: Option<DriveDestination>,

    /// Cloud Storage destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_storage_destination: Option<CloudStorageDestination>,
}

/// Drive folder destination
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveDestination {
    pub folder: String,
    pub filename_prefix: String,
}

/// Cloud Storage destination
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudStorageDestination {
    pub bucket: String,
    pub filename_prefix: String,
}

/// Long-running operation returned for an accepted export
#[derive(Debug, Clone, Deserialize)]
pub struct Operation {
    /// Operation resource name, e.g. `projects/p/operations/ABC`
    pub name: String,

    /// Whether the operation already finished
    #[serde(default)]
    pub done: bool,
}

/// Error envelope returned by Google APIs
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// Error details
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetId, BandName, SourceImage, Year};

    fn task(destination: Destination) -> ExportTask {
        let region = RegionOfInterest::load(AssetId::new("R").unwrap());
        let image = SourceImage::load(AssetId::new("S").unwrap())
            .select(BandName::new("classification_1985").unwrap())
            .clip(&region);

        ExportTask {
            year: Year::new(1985).unwrap(),
            image,
            description: "Exportar_1985".to_string(),
            destination,
            file_name_prefix: "classificacao_1985".to_string(),
            region,
            scale: 30.0,
            max_pixels: 10_000_000_000_000,
            file_format: "GEO_TIFF".to_string(),
        }
    }

    #[test]
    fn test_request_top_level_fields() {
        let request = ExportImageRequest::from_task(
            &task(Destination::Drive {
                folder: "SAIDA_MAPBIOMAS_ANOS".to_string(),
            }),
            "req-1",
        );
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["description"], "Exportar_1985");
        assert_eq!(body["maxPixels"], "10000000000000");
        assert_eq!(body["requestId"], "req-1");
        assert_eq!(body["fileExportOptions"]["fileFormat"], "GEO_TIFF");
        assert_eq!(
            body["fileExportOptions"]["driveDestination"]["folder"],
            "SAIDA_MAPBIOMAS_ANOS"
        );
        assert_eq!(
            body["fileExportOptions"]["driveDestination"]["filenamePrefix"],
            "classificacao_1985"
        );
        assert!(body["fileExportOptions"]
            .get("cloudStorageDestination")
            .is_none());
    }

    #[test]
    fn test_request_cloud_storage_destination() {
        let request = ExportImageRequest::from_task(
            &task(Destination::CloudStorage {
                bucket: "lulc-exports".to_string(),
                folder: "SAIDA_MAPBIOMAS_ANOS".to_string(),
            }),
            "req-2",
        );
        let body = serde_json::to_value(&request).unwrap();

        let options = &body["fileExportOptions"];
        assert!(options.get("driveDestination").is_none());
        assert!(options.get("gcsDestination").is_none());
        assert_eq!(options["cloudStorageDestination"]["bucket"], "lulc-exports");
        assert_eq!(
            options["cloudStorageDestination"]["filenamePrefix"],
            "SAIDA_MAPBIOMAS_ANOS/classificacao_1985"
        );
    }

    #[test]
    fn test_expression_graph_shape() {
        let t = task(Destination::Drive {
            folder: "f".to_string(),
        });
        let expression = Expression::for_export(&t.image, &t.region, t.scale);
        assert_eq!(expression.result, "0");

        let root = &expression.values["0"]["functionInvocationValue"];
        assert_eq!(root["functionName"], "Image.clipToBoundsAndScale");
        assert_eq!(root["arguments"]["scale"]["constantValue"], 30.0);

        let geometry = &root["arguments"]["geometry"]["functionInvocationValue"];
        assert_eq!(geometry["functionName"], "Collection.geometry");

        let clip = &root["arguments"]["input"]["functionInvocationValue"];
        assert_eq!(clip["functionName"], "Image.clip");
        let clip_region = &clip["arguments"]["geometry"]["functionInvocationValue"];
        assert_eq!(clip_region["functionName"], "Collection.loadTable");
        assert_eq!(clip_region["arguments"]["tableId"]["constantValue"], "R");

        let select = &clip["arguments"]["input"]["functionInvocationValue"];
        assert_eq!(select["functionName"], "Image.select");
        assert_eq!(
            select["arguments"]["bandSelectors"]["constantValue"],
            json!(["classification_1985"])
        );

        let load = &select["arguments"]["input"]["functionInvocationValue"];
        assert_eq!(load["functionName"], "Image.load");
        assert_eq!(load["arguments"]["id"]["constantValue"], "S");
    }

    #[test]
    fn test_operation_deserialization() {
        let op: Operation =
            serde_json::from_str(r#"{"name":"projects/p/operations/ABC"}"#).unwrap();
        assert_eq!(op.name, "projects/p/operations/ABC");
        assert!(!op.done);
    }

    #[test]
    fn test_error_envelope_deserialization() {
        let envelope: ErrorEnvelope = serde_json::from_str(
            r#"{"error":{"code":403,"message":"Permission denied","status":"PERMISSION_DENIED"}}"#,
        )
        .unwrap();
        assert_eq!(envelope.error.code, 403);
        assert_eq!(envelope.error.status, "PERMISSION_DENIED");
    }
}
