//! appBaseUrl validator

use crate::builder::ValidationBuilder;
use crate::errors::{ConfigField, ConfigValidationError, ValidationResult};

use super::patterns::{ENDS_IN_PATH, HAS_PROTOCOL};

/// Validate the base URL of the consuming application
///
/// The URL must be present, filled in, carry a scheme (`://`) and must not
/// end with `/`, since redirect paths are appended to it.
pub fn valid_app_base_url<'a>(app_base_url: impl Into<Option<&'a str>>) -> ValidationResult<()> {
    ValidationBuilder::new(ConfigField::AppBaseUrl, app_base_url.into())
        .required()
        .reject_placeholder()
        .require_match(&HAS_PROTOCOL, |value| {
            ConfigValidationError::MissingProtocol(value.to_string())
        })
        .reject_match(&ENDS_IN_PATH, |value| {
            ConfigValidationError::TrailingSlash(value.to_string())
        })
        .finish()
}
