//! Earth Engine REST implementation
//!
//! Submits each task with `POST {base_url}/v1/projects/{project}/image:export`.
//! The long-running operation in the response is logged and dropped.

use super::ExportPlatform;
use crate::adapters::earthengine::models::{ErrorEnvelope, ExportImageRequest, Operation};
use crate::config::EarthEngineConfig;
use crate::domain::{ExportTask, MapExportError, PlatformError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use std::time::Duration;
use uuid::Uuid;

/// Earth Engine REST platform
///
/// # Example
///
/// ```no_run
/// use mapexport::adapters::earthengine::EarthEngineRest;
/// use mapexport::config::{secret_string, EarthEngineConfig};
///
/// # fn example() -> mapexport::domain::Result<()> {
/// let config = EarthEngineConfig {
///     project: "my-cloud-project".to_string(),
///     access_token: Some(secret_string("ya29.token".to_string())),
///     ..Default::default()
/// };
/// let platform = EarthEngineRest::new(config)?;
/// # Ok(())
/// # }
/// ```
pub struct EarthEngineRest {
    /// HTTP client for making requests
    client: Client,

    /// Earth Engine configuration
    config: EarthEngineConfig,
}

impl EarthEngineRest {
    /// Create a new Earth Engine REST platform
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the project or access token is
    /// missing, or if the HTTP client cannot be built.
    pub fn new(config: EarthEngineConfig) -> Result<Self> {
        config
            .validate_credentials()
            .map_err(MapExportError::Configuration)?;

        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            tracing::warn!("TLS certificate verification is disabled for Earth Engine");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            MapExportError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self { client, config })
    }

    /// URL of the image export endpoint
    pub fn export_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/image:export",
            self.config.base_url.trim_end_matches('/'),
            self.config.project
        )
    }

    fn auth_header_value(&self) -> Option<String> {
        self.config
            .access_token
            .as_ref()
            .map(|token| format!("Bearer {}", token.expose_secret().as_ref()))
    }
}

#[async_trait]
impl ExportPlatform for EarthEngineRest {
    async fn submit_export(&self, task: &ExportTask) -> Result<()> {
        let request_id = Uuid::new_v4().to_string();
        let body = ExportImageRequest::from_task(task, request_id.as_str());

        tracing::debug!(
            year = %task.year,
            request_id = %request_id,
            url = %self.export_url(),
            "Submitting export request"
        );

        let mut request = self.client.post(self.export_url()).json(&body);
        if let Some(auth) = self.auth_header_value() {
            request = request.header("Authorization", auth);
        }

        let resp = request.send().await.map_err(|e| {
            if e.is_timeout() {
                PlatformError::Timeout(e.to_string())
            } else {
                PlatformError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(text);
            return Err(PlatformError::from_status(status.as_u16(), message).into());
        }

        match serde_json::from_str::<Operation>(&text) {
            Ok(operation) => tracing::debug!(
                year = %task.year,
                operation = %operation.name,
                done = operation.done,
                "Export accepted"
            ),
            Err(e) => tracing::debug!(
                year = %task.year,
                error = %e,
                "Export accepted with unrecognised response body"
            ),
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "earthengine"
    }
}
