//! Configuration management for mapexport.
//!
//! mapexport reads a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `MAPEXPORT_<SECTION>_<KEY>` environment overrides
//! - Default values for everything except the `[source]` assets
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mapexport::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("mapexport.toml")?;
//!
//! println!("Source image: {}", config.source.image_asset);
//! println!("Years: {}", config.export.years.years().len());
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [earthengine]
//! project = "my-cloud-project"
//! access_token = "${MAPEXPORT_EE_ACCESS_TOKEN}"
//!
//! [source]
//! image_asset = "projects/mapbiomas-public/assets/brazil/lulc/collection10/mapbiomas_brazil_collection10_integration_v2"
//! region_asset = "projects/my-cloud-project/assets/roi"
//!
//! [export]
//! years = { start = 1985, end = 2024 }
//! folder = "SAIDA_MAPBIOMAS_ANOS"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, DestinationKind, EarthEngineConfig, Environment, ExportConfig,
    LoggingConfig, MapExportConfig, SourceConfig, StatsConfig, YearSelection,
};
pub use secret::{secret_string, SecretString, SecretValue};
