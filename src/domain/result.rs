//! Result type alias for the harvester

use super::errors::HarvestError;

/// Result type alias for harvester operations
///
/// Uses `HarvestError` as the error type.
///
/// # Examples
///
/// ```
/// use mimu_harvester::domain::result::Result;
/// use mimu_harvester::domain::errors::HarvestError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(HarvestError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, HarvestError>;
