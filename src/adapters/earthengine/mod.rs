//! Earth Engine adapter
//!
//! Translates export tasks into `projects.image.export` requests.

pub mod factory;
pub mod models;
pub mod platform;

pub use factory::create_platform;
pub use platform::{DryRunPlatform, EarthEngineRest, ExportPlatform};
