//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{MapExportConfig, YearSelection};
use super::secret::secret_string;
use crate::domain::errors::MapExportError;
use crate::domain::ids::parse_year_list;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into MapExportConfig
/// 4. Applies environment variable overrides (MAPEXPORT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced environment
/// variable is unset, TOML parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use mapexport::config::loader::load_config;
///
/// let config = load_config("mapexport.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<MapExportConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MapExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MapExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: MapExportConfig = toml::from_str(&contents)
        .map_err(|e| MapExportError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        MapExportError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched. A variable that is not set
/// becomes an empty string and is reported as a warning.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| MapExportError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), "");
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        tracing::warn!(
            variables = %missing_vars.join(", "),
            "Environment variables referenced by the configuration are not set, using empty values"
        );
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using MAPEXPORT_* prefix
///
/// Environment variables follow the pattern: MAPEXPORT_<SECTION>_<KEY>
/// For example: MAPEXPORT_EARTHENGINE_PROJECT, MAPEXPORT_EXPORT_FOLDER
fn apply_env_overrides(config: &mut MapExportConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("MAPEXPORT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("MAPEXPORT_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Earth Engine overrides
    if let Ok(val) = std::env::var("MAPEXPORT_EARTHENGINE_BASE_URL") {
        config.earthengine.base_url = val;
    }
    if let Ok(val) = std::env::var("MAPEXPORT_EARTHENGINE_PROJECT") {
        config.earthengine.project = val;
    }
    if let Ok(val) = std::env::var("MAPEXPORT_EARTHENGINE_ACCESS_TOKEN") {
        config.earthengine.access_token = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("MAPEXPORT_EARTHENGINE_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.earthengine.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("MAPEXPORT_EARTHENGINE_TLS_VERIFY") {
        config.earthengine.tls_verify = val.parse().unwrap_or(true);
    }

    // Source overrides
    if let Ok(val) = std::env::var("MAPEXPORT_SOURCE_IMAGE_ASSET") {
        config.source.image_asset = val;
    }
    if let Ok(val) = std::env::var("MAPEXPORT_SOURCE_REGION_ASSET") {
        config.source.region_asset = val;
    }

    // Export overrides
    if let Ok(val) = std::env::var("MAPEXPORT_EXPORT_YEARS") {
        let years = parse_year_list(&val).map_err(|e| {
            MapExportError::Configuration(format!("Invalid MAPEXPORT_EXPORT_YEARS: {e}"))
        })?;
        config.export.years = YearSelection::List(years);
    }
    if let Ok(val) = std::env::var("MAPEXPORT_EXPORT_FOLDER") {
        config.export.folder = val;
    }
    if let Ok(val) = std::env::var("MAPEXPORT_EXPORT_BUCKET") {
        config.export.bucket = Some(val);
    }

    // Stats overrides
    if let Ok(val) = std::env::var("MAPEXPORT_STATS_INPUT_DIR") {
        config.stats.input_dir = val;
    }
    if let Ok(val) = std::env::var("MAPEXPORT_STATS_OUTPUT_CSV") {
        config.stats.output_csv = val;
    }
    if let Ok(val) = std::env::var("MAPEXPORT_STATS_LEGEND_PATH") {
        config.stats.legend_path = Some(val);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("MAPEXPORT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("MAPEXPORT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
