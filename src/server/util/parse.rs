use crate::server::error::AppError;

/// Parses a numeric id taken from a request path
///
/// # Arguments
/// - `value` - The raw path segment
/// - `resource` - Name of the resource, used in the error message
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::BadRequest)` - The segment is not a number
pub fn parse_id(value: &str, resource: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID - must be a number", resource)))
}
