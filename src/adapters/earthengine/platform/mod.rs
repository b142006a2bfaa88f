//! Export platform implementations
//!
//! `ExportPlatform` is the common interface. `EarthEngineRest` talks to the
//! Earth Engine REST API; `DryRunPlatform` only logs.

pub mod dry_run;
pub mod rest;
mod r#trait;

pub use dry_run::DryRunPlatform;
pub use r#trait::ExportPlatform;
pub use rest::EarthEngineRest;
