//! External system integrations for mapexport.
//!
//! - [`earthengine`] - Earth Engine export platform (REST and dry run)
//!
//! The orchestrator talks to the platform only through the
//! [`earthengine::ExportPlatform`] trait, so tests can swap in a recording
//! implementation.
//!
//! ```rust,no_run
//! use mapexport::adapters::earthengine::create_platform;
//! use mapexport::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("mapexport.toml")?;
//! let platform = create_platform(&config)?;
//! println!("Using platform: {}", platform.name());
//! # Ok(())
//! # }
//! ```

pub mod earthengine;
