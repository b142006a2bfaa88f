//! Export platform factory
//!
//! Picks the platform implementation for a configuration.

use crate::adapters::earthengine::platform::{DryRunPlatform, EarthEngineRest, ExportPlatform};
use crate::config::MapExportConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Create the export platform for `config`
///
/// Dry-run configurations get a [`DryRunPlatform`] and need no credentials.
/// Everything else gets an [`EarthEngineRest`] client.
///
/// # Errors
///
/// Returns a configuration error if credentials are missing for a real run
pub fn create_platform(config: &MapExportConfig) -> Result<Arc<dyn ExportPlatform>> {
    if config.is_dry_run() {
        tracing::info!("Creating dry-run export platform");
        return Ok(Arc::new(DryRunPlatform::new()) as Arc<dyn ExportPlatform>);
    }

    tracing::info!(
        base_url = %config.earthengine.base_url,
        project = %config.earthengine.project,
        "Creating Earth Engine export platform"
    );
    let platform = EarthEngineRest::new(config.earthengine.clone())?;
    Ok(Arc::new(platform) as Arc<dyn ExportPlatform>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{secret_string, SourceConfig};
    use crate::domain::MapExportError;

    fn config() -> MapExportConfig {
        MapExportConfig {
            application: Default::default(),
            environment: Default::default(),
            earthengine: Default::default(),
            source: SourceConfig {
                image_asset: "S".to_string(),
                band_prefix: "classification_".to_string(),
                region_asset: "R".to_string(),
            },
            export: Default::default(),
            stats: Default::default(),
            logging: Default::default(),
        }
    }

    #[test]
    fn test_dry_run_needs_no_credentials() {
        let mut config = config();
        config.application.dry_run = true;
        let platform = create_platform(&config).unwrap();
        assert_eq!(platform.name(), "dry-run");
    }

    #[test]
    fn test_real_run_requires_credentials() {
        let result = create_platform(&config());
        assert!(matches!(result, Err(MapExportError::Configuration(_))));
    }

    #[test]
    fn test_real_run_with_credentials() {
        let mut config = config();
        config.earthengine.project = "lulc".to_string();
        config.earthengine.access_token = Some(secret_string("token".to_string()));
        let platform = create_platform(&config).unwrap();
        assert_eq!(platform.name(), "earthengine");
    }
}
