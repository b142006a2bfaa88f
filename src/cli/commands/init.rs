//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "mapexport.toml")]
    pub output: String,

    /// Include every section with comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing mapexport configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your project and assets", self.output);
                println!("  2. Put an OAuth access token in .env:");
                println!("     MAPEXPORT_EE_ACCESS_TOKEN=$(gcloud auth print-access-token)");
                println!("  3. Validate configuration: mapexport validate-config");
                println!("  4. Preview the tasks: mapexport export --dry-run");
                println!("  5. Submit them: mapexport export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# mapexport configuration

[earthengine]
project = "my-cloud-project"
access_token = "${MAPEXPORT_EE_ACCESS_TOKEN}"

[source]
image_asset = "projects/mapbiomas-public/assets/brazil/lulc/collection10/mapbiomas_brazil_collection10_integration_v2"
region_asset = "projects/my-cloud-project/assets/roi"

[export]
years = { start = 1985, end = 2024 }
folder = "SAIDA_MAPBIOMAS_ANOS"
"#
        .to_string()
    }

    /// Generate configuration with every section documented
    fn generate_config_with_examples() -> String {
        r#"# mapexport configuration
# Submits one Earth Engine export task per year of an annual land-cover
# classification, clipped to a region of interest.
#
# Values of the form ${VAR} are read from the environment (or .env).
# Any key can also be overridden with MAPEXPORT_<SECTION>_<KEY>.

# development | staging | production
environment = "development"

[application]
# trace | debug | info | warn | error
log_level = "info"
# Log the tasks instead of submitting them
dry_run = false

[earthengine]
base_url = "https://earthengine.googleapis.com"
# Cloud project that owns the export jobs
project = "my-cloud-project"
# OAuth2 access token, e.g. from `gcloud auth print-access-token`
access_token = "${MAPEXPORT_EE_ACCESS_TOKEN}"
timeout_seconds = 60
tls_verify = true

[source]
# Multi-band image with one band per year
image_asset = "projects/mapbiomas-public/assets/brazil/lulc/collection10/mapbiomas_brazil_collection10_integration_v2"
# The year is appended to this prefix to form the band name
band_prefix = "classification_"
# Feature collection used as clip mask and export region
region_asset = "projects/my-cloud-project/assets/roi"

[export]
# Inclusive range, or an explicit list such as [1985, 1990, 2000]
years = { start = 1985, end = 2024 }
description_prefix = "Exportar_"
file_name_prefix = "classificacao_"
# drive | cloud_storage
destination = "drive"
folder = "SAIDA_MAPBIOMAS_ANOS"
# bucket = "my-bucket"
# Meters per pixel
scale = 30.0
max_pixels = 10000000000000
# GEO_TIFF | TF_RECORD_IMAGE
file_format = "GEO_TIFF"

[stats]
# Where the exported rasters were downloaded
input_dir = "."
output_csv = "classes_1985-2024.csv"
# legend_path = "mapbiomas_legend.json"
nodata = 0
top_n = 5

[logging]
local_enabled = false
local_path = "./logs"
# daily | hourly
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapExportConfig;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "mapexport.toml".to_string(),
            with_examples: false,
            force: false,
        };

        assert_eq!(args.output, "mapexport.toml");
        assert!(!args.with_examples);
        assert!(!args.force);
    }

    #[test]
    fn test_generate_minimal_config() {
        let config: MapExportConfig =
            toml::from_str(&InitArgs::generate_minimal_config()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.export.years.years().len(), 40);
    }

    #[test]
    fn test_generate_config_with_examples() {
        let config: MapExportConfig =
            toml::from_str(&InitArgs::generate_config_with_examples()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.export.folder, "SAIDA_MAPBIOMAS_ANOS");
        assert_eq!(config.stats.top_n, 5);
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("mapexport.toml");
        fs::write(&path, "existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing");
    }
}
