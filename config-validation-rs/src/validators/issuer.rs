//! Issuer validator

use crate::builder::ValidationBuilder;
use crate::config::TestingConfig;
use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::errors::{ConfigField, ConfigValidationError, ValidationResult};

use super::patterns::IS_HTTPS;

/// Warning emitted whenever the HTTPS check is turned off
pub const HTTPS_DISABLED_WARNING: &str = concat!(
    "Warning: HTTPS check is disabled.",
    "This allows for insecure configurations and is NOT recommended for production use."
);

/// Validate the Cryptr issuer URL, sending any warning to the `log` facade
///
/// `testing` may be `None` for the strict defaults. See [`valid_issuer_with`].
pub fn valid_issuer<'a, 't>(
    issuer: impl Into<Option<&'a str>>,
    testing: impl Into<Option<&'t TestingConfig>>,
) -> ValidationResult<()> {
    valid_issuer_with(issuer, testing, &LogDiagnostics)
}

/// Validate the Cryptr issuer URL
///
/// Without a `testing` config the HTTPS check is enforced.
/// When `testing.disable_https_check` is set, a warning goes to `diagnostics`
/// before any rule runs, whatever the outcome. The rules, in order:
///
/// 1. the issuer is present and not empty
/// 2. it starts with `https://`, unless the HTTPS check is disabled
/// 3. it does not contain `{yourCryptrDomain}`
pub fn valid_issuer_with<'a, 't>(
    issuer: impl Into<Option<&'a str>>,
    testing: impl Into<Option<&'t TestingConfig>>,
    diagnostics: &dyn Diagnostics,
) -> ValidationResult<()> {
    let testing = testing.into().copied().unwrap_or_default();
    if testing.disable_https_check {
        diagnostics.warn(HTTPS_DISABLED_WARNING);
    }

    ValidationBuilder::new(ConfigField::Issuer, issuer.into())
        .required()
        .when(!testing.disable_https_check, |rules| {
            rules.require_match(&IS_HTTPS, |value| {
                ConfigValidationError::InsecureIssuer(value.to_string())
            })
        })
        .reject_placeholder()
        .finish()
}
