use crate::server::error::AppError;

/// Normalizes and validates an ICAO airport code.
///
/// Trims and uppercases the input and requires exactly four ASCII alphanumerics.
///
/// # Returns
/// - `Ok(String)` - Uppercased ICAO code
/// - `Err(AppError::BadRequest)` - Input is not a four character code
pub fn parse_icao(value: &str) -> Result<String, AppError> {
    let icao = value.trim().to_uppercase();

    if icao.len() != 4 || !icao.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::BadRequest(format!(
            "Invalid ICAO code '{}'",
            value.trim()
        )));
    }

    Ok(icao)
}

/// Trims a required text field, rejecting empty values.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - Raw value from the request
pub fn require_text(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }

    Ok(trimmed.to_string())
}

/// Decodes a JSON list stored in a text column, treating malformed data as empty.
pub fn json_list<T: serde::de::DeserializeOwned>(raw: &str) -> Vec<T> {
    serde_json::from_str(raw).unwrap_or_default()
}
