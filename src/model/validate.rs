//! Custom field validators shared by request DTOs.

use serde::{Deserialize, Deserializer};
use validator::ValidationError;

/// Reads an optional text field, treating an empty or whitespace-only string as absent.
///
/// Admin forms submit `""` for optional inputs left empty.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.filter(|v| !v.trim().is_empty()))
}

/// Accepts lowercase ASCII letters, digits and single hyphens between them.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let well_formed = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::new("slug")
            .with_message("Slug may only contain lowercase letters, digits and hyphens".into()))
    }
}

/// Accepts absolute `http` or `https` URLs.
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    match url::Url::parse(value) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
        _ => Err(ValidationError::new("url")
            .with_message("Must be an absolute http(s) URL".into())),
    }
}

/// Like `validate_http_url`, but a blank value is accepted as a request to clear the field.
pub fn validate_http_url_or_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }

    validate_http_url(value)
}

/// Maps an update to a nullable text column; a blank value clears it.
pub fn clear_if_blank(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| if v.trim().is_empty() { None } else { Some(v) })
}
