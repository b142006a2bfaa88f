//! Result type alias for mapexport

use super::errors::MapExportError;

/// Result type alias for mapexport operations
///
/// # Examples
///
/// ```
/// use mapexport::domain::result::Result;
/// use mapexport::domain::errors::MapExportError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(MapExportError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, MapExportError>;
