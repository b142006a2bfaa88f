//! Configuration schema types
//!
//! This module defines the configuration structure for mapexport. Every
//! section except `[source]` has defaults, and the `[export]` defaults
//! reproduce the MapBiomas annual export (1985-2024, 30 m, 1e13 pixels).

use crate::config::SecretString;
use crate::domain::{Destination, Year};
use serde::{Deserialize, Serialize};

/// Runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

/// Main mapexport configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapExportConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// Earth Engine connection settings
    #[serde(default)]
    pub earthengine: EarthEngineConfig,

    /// Source image and region assets
    pub source: SourceConfig,

    /// Export task settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Class statistics settings
    #[serde(default)]
    pub stats: StatsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MapExportConfig {
    /// Validates the configuration
    ///
    /// Credentials are not checked here; see
    /// [`EarthEngineConfig::validate_credentials`].
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.earthengine.validate(&self.environment)?;
        self.source.validate()?;
        self.export.validate()?;
        self.stats.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Whether submissions should be logged instead of sent
    pub fn is_dry_run(&self) -> bool {
        self.application.dry_run
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (log tasks instead of submitting them)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Earth Engine REST API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarthEngineConfig {
    /// Base URL of the Earth Engine REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Cloud project that owns the export jobs
    #[serde(default)]
    pub project: String,

    /// OAuth2 access token sent as a Bearer credential
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub access_token: Option<SecretString>,

    /// Timeout in seconds for each submission request
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification enabled
    ///
    /// Disabling verification is rejected in production environments.
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl EarthEngineConfig {
    fn validate(&self, environment: &Environment) -> Result<(), String> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| format!("earthengine.base_url is not a valid URL: {e}"))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err("earthengine.base_url must start with http:// or https://".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("earthengine.timeout_seconds must be > 0".to_string());
        }

        if *environment == Environment::Production && !self.tls_verify {
            return Err(
                "TLS certificate verification cannot be disabled in production environments. \
                Set 'tls_verify = true' or use environment = \"development\"."
                    .to_string(),
            );
        }

        Ok(())
    }

    /// Checks the settings needed to actually submit jobs
    ///
    /// Dry runs never call this, so a configuration without a token can
    /// still be used to preview the task list.
    pub fn validate_credentials(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.project.trim().is_empty() {
            return Err("earthengine.project cannot be empty".to_string());
        }

        if self
            .access_token
            .as_ref()
            .map(|t| t.expose_secret().is_empty())
            .unwrap_or(true)
        {
            return Err("earthengine.access_token cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for EarthEngineConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            project: String::new(),
            access_token: None,
            timeout_seconds: default_timeout_seconds(),
            tls_verify: true,
        }
    }
}

/// Source raster and region of interest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Multi-band image asset with one band per year
    pub image_asset: String,

    /// Band name prefix; the year is appended
    #[serde(default = "default_band_prefix")]
    pub band_prefix: String,

    /// Feature collection asset used as clip mask and export region
    pub region_asset: String,
}

impl SourceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.image_asset.trim().is_empty() {
            return Err("source.image_asset cannot be empty".to_string());
        }
        if self.region_asset.trim().is_empty() {
            return Err("source.region_asset cannot be empty".to_string());
        }
        if self.band_prefix.trim().is_empty() {
            return Err("source.band_prefix cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Which years to export
///
/// Either an explicit list (order and duplicates preserved) or an inclusive
/// range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearSelection {
    /// Explicit list, e.g. `[1985, 1990]`
    List(Vec<Year>),

    /// Inclusive range, e.g. `{ start = 1985, end = 2024 }`
    Range { start: Year, end: Year },
}

impl YearSelection {
    /// Expands the selection into an ordered list
    pub fn years(&self) -> Vec<Year> {
        match self {
            YearSelection::List(years) => years.clone(),
            YearSelection::Range { start, end } => (start.value()..=end.value())
                .filter_map(|v| Year::new(v).ok())
                .collect(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if let YearSelection::Range { start, end } = self {
            Year::check_range(*start, *end).map_err(|e| format!("export.years: {e}"))?;
        }
        Ok(())
    }
}

impl Default for YearSelection {
    fn default() -> Self {
        YearSelection::Range {
            start: Year::FIRST_ANNUAL,
            end: Year::LAST_ANNUAL,
        }
    }
}

/// Output destination kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKind {
    /// Drive folder
    #[default]
    Drive,
    /// Cloud Storage bucket
    CloudStorage,
}

/// Export task configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Years to export
    #[serde(default)]
    pub years: YearSelection,

    /// Task description prefix; the year is appended
    #[serde(default = "default_description_prefix")]
    pub description_prefix: String,

    /// Output file name prefix; the year is appended
    #[serde(default = "default_file_name_prefix")]
    pub file_name_prefix: String,

    /// Destination kind (drive or cloud_storage)
    #[serde(default)]
    pub destination: DestinationKind,

    /// Drive folder
    #[serde(default = "default_folder")]
    pub folder: String,

    /// Cloud Storage bucket (required for cloud_storage)
    #[serde(default)]
    pub bucket: Option<String>,

    /// Ground resolution in meters
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Maximum number of pixels the platform may produce per task
    #[serde(default = "default_max_pixels")]
    pub max_pixels: u64,

    /// Output file format
    #[serde(default = "default_file_format")]
    pub file_format: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        self.years.validate()?;

        if self.description_prefix.trim().is_empty() {
            return Err("export.description_prefix cannot be empty".to_string());
        }

        if self.file_name_prefix.trim().is_empty() {
            return Err("export.file_name_prefix cannot be empty".to_string());
        }

        match self.destination {
            DestinationKind::Drive => {
                if self.folder.trim().is_empty() {
                    return Err(
                        "export.folder cannot be empty when destination is 'drive'".to_string()
                    );
                }
            }
            DestinationKind::CloudStorage => {
                if self
                    .bucket
                    .as_ref()
                    .map(|b| b.trim().is_empty())
                    .unwrap_or(true)
                {
                    return Err(
                        "export.bucket is required when destination is 'cloud_storage'"
                            .to_string(),
                    );
                }
            }
        }

        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(format!("export.scale must be > 0, got {}", self.scale));
        }

        if self.max_pixels == 0 {
            return Err("export.max_pixels must be > 0".to_string());
        }

        let valid_formats = ["GEO_TIFF", "TF_RECORD_IMAGE"];
        if !valid_formats.contains(&self.file_format.as_str()) {
            return Err(format!(
                "Invalid export.file_format '{}'. Must be one of: {}",
                self.file_format,
                valid_formats.join(", ")
            ));
        }

        Ok(())
    }

    /// Resolves the configured destination
    pub fn destination(&self) -> Destination {
        match self.destination {
            DestinationKind::Drive => Destination::Drive {
                folder: self.folder.clone(),
            },
            DestinationKind::CloudStorage => Destination::CloudStorage {
                bucket: self.bucket.clone().unwrap_or_default(),
                folder: self.folder.clone(),
            },
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            years: YearSelection::default(),
            description_prefix: default_description_prefix(),
            file_name_prefix: default_file_name_prefix(),
            destination: DestinationKind::default(),
            folder: default_folder(),
            bucket: None,
            scale: default_scale(),
            max_pixels: default_max_pixels(),
            file_format: default_file_format(),
        }
    }
}

/// Class statistics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Directory holding the downloaded `<file_name_prefix><year>.tif` files
    #[serde(default = "default_input_dir")]
    pub input_dir: String,

    /// CSV report path
    #[serde(default = "default_output_csv")]
    pub output_csv: String,

    /// Optional legend JSON (class code -> name and colour)
    #[serde(default)]
    pub legend_path: Option<String>,

    /// Pixel value treated as no data
    #[serde(default)]
    pub nodata: u64,

    /// Number of leading classes listed per year
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl StatsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.input_dir.trim().is_empty() {
            return Err("stats.input_dir cannot be empty".to_string());
        }
        if self.output_csv.trim().is_empty() {
            return Err("stats.output_csv cannot be empty".to_string());
        }
        if self.top_n == 0 {
            return Err("stats.top_n must be > 0".to_string());
        }
        Ok(())
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_csv: default_output_csv(),
            legend_path: None,
            nodata: 0,
            top_n: default_top_n(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    "https://earthengine.googleapis.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_band_prefix() -> String {
    "classification_".to_string()
}

fn default_description_prefix() -> String {
    "Exportar_".to_string()
}

fn default_file_name_prefix() -> String {
    "classificacao_".to_string()
}

fn default_folder() -> String {
    "SAIDA_MAPBIOMAS_ANOS".to_string()
}

fn default_scale() -> f64 {
    30.0
}

fn default_max_pixels() -> u64 {
    10_000_000_000_000
}

fn default_file_format() -> String {
    "GEO_TIFF".to_string()
}

fn default_input_dir() -> String {
    ".".to_string()
}

fn default_output_csv() -> String {
    "classes_by_year.csv".to_string()
}

fn default_top_n() -> usize {
    5
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn minimal_config() -> MapExportConfig {
        toml::from_str(
            r#"
[source]
image_asset = "S"
region_asset = "R"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_match_annual_export() {
        let config = minimal_config();
        assert!(config.validate().is_ok());

        let years = config.export.years.years();
        assert_eq!(years.len(), 40);
        assert_eq!(years.first().map(|y| y.value()), Some(1985));
        assert_eq!(years.last().map(|y| y.value()), Some(2024));

        assert_eq!(config.source.band_prefix, "classification_");
        assert_eq!(config.export.description_prefix, "Exportar_");
        assert_eq!(config.export.file_name_prefix, "classificacao_");
        assert_eq!(config.export.folder, "SAIDA_MAPBIOMAS_ANOS");
        assert_eq!(config.export.scale, 30.0);
        assert_eq!(config.export.max_pixels, 10_000_000_000_000);
        assert_eq!(
            config.export.destination(),
            Destination::Drive {
                folder: "SAIDA_MAPBIOMAS_ANOS".to_string()
            }
        );
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_year_selection_list_and_range() {
        #[derive(Deserialize)]
        struct Wrapper {
            years: YearSelection,
        }

        let list: Wrapper = toml::from_str("years = [1990, 1985, 1990]").unwrap();
        let values: Vec<i32> = list.years.years().iter().map(|y| y.value()).collect();
        assert_eq!(values, vec![1990, 1985, 1990]);

        let range: Wrapper = toml::from_str("years = { start = 2000, end = 2003 }").unwrap();
        assert_eq!(range.years.years().len(), 4);

        let empty: Wrapper = toml::from_str("years = []").unwrap();
        assert!(empty.years.years().is_empty());
        assert!(empty.years.validate().is_ok());
    }

    #[test]
    fn test_year_selection_reversed_range_invalid() {
        let selection = YearSelection::Range {
            start: Year::new(2024).unwrap(),
            end: Year::new(1985).unwrap(),
        };
        assert!(selection.validate().is_err());
    }

    #[test]
    fn test_year_selection_huge_range_invalid() {
        let selection = YearSelection::Range {
            start: Year::new(1).unwrap(),
            end: Year::new(i32::MAX).unwrap(),
        };
        assert!(selection.validate().is_err());
    }

    #[test]
    fn test_export_config_validation() {
        let mut config = ExportConfig::default();
        assert!(config.validate().is_ok());

        config.scale = 0.0;
        assert!(config.validate().is_err());
        config.scale = 30.0;

        config.max_pixels = 0;
        assert!(config.validate().is_err());
        config.max_pixels = default_max_pixels();

        config.file_name_prefix = String::new();
        assert!(config.validate().is_err());
        config.file_name_prefix = default_file_name_prefix();

        config.file_format = "PNG".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cloud_storage_requires_bucket() {
        let mut config = ExportConfig {
            destination: DestinationKind::CloudStorage,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.bucket = Some("lulc-exports".to_string());
        assert!(config.validate().is_ok());
        assert_eq!(
            config.destination(),
            Destination::CloudStorage {
                bucket: "lulc-exports".to_string(),
                folder: "SAIDA_MAPBIOMAS_ANOS".to_string(),
            }
        );

        config.folder = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_source_config_validation() {
        let mut config = minimal_config().source;
        assert!(config.validate().is_ok());

        config.region_asset = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_earthengine_base_url_validation() {
        let mut config = EarthEngineConfig::default();
        assert!(config.validate(&Environment::Development).is_ok());

        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate(&Environment::Development).is_err());

        config.base_url = "not a url".to_string();
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_tls_verify_enforced_in_production() {
        let config = EarthEngineConfig {
            tls_verify: false,
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert!(config.validate(&Environment::Production).is_err());
    }

    #[test]
    fn test_validate_credentials() {
        let mut config = EarthEngineConfig::default();
        assert!(config.validate_credentials().is_err());

        config.project = "my-project".to_string();
        assert!(config.validate_credentials().is_err());

        config.access_token = Some(secret_string(String::new()));
        assert!(config.validate_credentials().is_err());

        config.access_token = Some(secret_string("ya29.token".to_string()));
        assert!(config.validate_credentials().is_ok());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_stats_config_validation() {
        let mut config = StatsConfig::default();
        assert!(config.validate().is_ok());

        config.top_n = 0;
        assert!(config.validate().is_err());
    }
}
