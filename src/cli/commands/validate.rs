//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the mapexport configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        if let Err(e) = config.validate() {
            println!("❌ Configuration validation failed");
            println!("   Error: {e}");
            println!();
            return Ok(2);
        }

        println!("✅ Configuration is valid");

        let credentials = config.earthengine.validate_credentials();
        if let Err(e) = &credentials {
            if config.is_dry_run() {
                println!("ℹ️  Credentials incomplete ({e}); fine for dry runs");
            } else {
                println!("❌ {e}");
            }
        }

        let years = config.export.years.years();
        println!();
        println!("Configuration Summary:");
        println!("  Environment: {:?}", config.environment);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Earth Engine: {}", config.earthengine.base_url);
        println!("  Project: {}", config.earthengine.project);
        println!("  Image: {}", config.source.image_asset);
        println!("  Band prefix: {}", config.source.band_prefix);
        println!("  Region: {}", config.source.region_asset);
        println!("  Years: {} task(s)", years.len());
        println!("  Destination: {}", config.export.destination().describe());
        println!("  File prefix: {}", config.export.file_name_prefix);
        println!("  Scale: {} m", config.export.scale);
        println!("  Max pixels: {}", config.export.max_pixels);
        println!("  Dry run: {}", config.is_dry_run());
        println!();

        if credentials.is_err() && !config.is_dry_run() {
            return Ok(2);
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_creation() {
        let args = ValidateArgs {};
        let _ = format!("{args:?}");
    }

    #[tokio::test]
    async fn test_validate_dry_run_config_without_token() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[application]
dry_run = true

[source]
image_asset = "S"
region_asset = "R"
"#,
        )
        .unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_validate_missing_token() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[source]
image_asset = "S"
region_asset = "R"
"#,
        )
        .unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
