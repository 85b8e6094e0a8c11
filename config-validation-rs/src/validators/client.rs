//! Application credential validators
//!
//! Client ID, client secret and redirect URI share the same two rules: the
//! value is present, and it no longer holds its template token.

use crate::builder::ValidationBuilder;
use crate::errors::{ConfigField, ValidationResult};

fn present_and_filled_in(field: ConfigField, value: Option<&str>) -> ValidationResult<()> {
    ValidationBuilder::new(field, value)
        .required()
        .reject_placeholder()
        .finish()
}

/// Validate the application's client ID
///
/// A leftover `{client_id}` is reported with the whole raw value quoted back.
pub fn valid_client_id<'a>(client_id: impl Into<Option<&'a str>>) -> ValidationResult<()> {
    present_and_filled_in(ConfigField::ClientId, client_id.into())
}

/// Validate the application's client secret
pub fn valid_client_secret<'a>(client_secret: impl Into<Option<&'a str>>) -> ValidationResult<()> {
    present_and_filled_in(ConfigField::ClientSecret, client_secret.into())
}

/// Validate the redirect URI registered for the application
pub fn valid_redirect_uri<'a>(redirect_uri: impl Into<Option<&'a str>>) -> ValidationResult<()> {
    present_and_filled_in(ConfigField::RedirectUri, redirect_uri.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigValidationError;
    use test_case::test_case;

    #[test_case(None, "Your client ID is missing." ; "absent")]
    #[test_case(Some(""), "Your client ID is missing." ; "empty")]
    #[test_case(
        Some("{client_id}"),
        "Replace {client_id} (client_id in cryptr.config.json) with the client ID of your Application." ;
        "placeholder"
    )]
    fn test_client_id_rejected(client_id: Option<&str>, message: &str) {
        assert_eq!(valid_client_id(client_id).unwrap_err().to_string(), message);
    }

    #[test]
    fn test_client_id_placeholder_quoted_once_beside_json_key() {
        let message = valid_client_id("{client_id}").unwrap_err().to_string();
        assert_eq!(message.matches("{client_id}").count(), 1);
        assert!(message.contains("(client_id in cryptr.config.json)"));
    }

    #[test]
    fn test_client_id_placeholder_inside_value() {
        let err = valid_client_id("app-{client_id}-prod").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Replace app-{client_id}-prod (client_id in cryptr.config.json) with the client ID of your Application."
        );
    }

    #[test_case(None, "Your client secret is missing." ; "absent")]
    #[test_case(Some(""), "Your client secret is missing." ; "empty")]
    #[test_case(
        Some("{clientSecret}"),
        "Replace {clientSecret} with the client secret of your Application." ;
        "placeholder"
    )]
    fn test_client_secret_rejected(client_secret: Option<&str>, message: &str) {
        assert_eq!(valid_client_secret(client_secret).unwrap_err().to_string(), message);
    }

    #[test]
    fn test_client_secret_never_echoed() {
        let message = valid_client_secret("s3cr3t{clientSecret}")
            .unwrap_err()
            .to_string();
        assert!(!message.contains("s3cr3t"));
    }

    #[test_case(None, "Your redirect URI is missing." ; "absent")]
    #[test_case(Some(""), "Your redirect URI is missing." ; "empty")]
    #[test_case(
        Some("{redirectUri}"),
        "Replace {redirectUri} with the redirect URI of your Application." ;
        "placeholder"
    )]
    fn test_redirect_uri_rejected(redirect_uri: Option<&str>, message: &str) {
        assert_eq!(valid_redirect_uri(redirect_uri).unwrap_err().to_string(), message);
    }

    #[test]
    fn test_placeholder_match_is_exact() {
        assert!(valid_client_id("{CLIENT_ID}").is_ok());
        assert!(valid_client_secret(" {clientsecret} ").is_ok());
        assert!(valid_redirect_uri("{ redirectUri }").is_ok());
    }

    #[test]
    fn test_filled_in_values_accepted() {
        assert!(valid_client_id("8b2d1c3e-6f1a-4b0e-9a27-2f1f7c0e5d11").is_ok());
        assert!(valid_client_secret("s3cr3t").is_ok());
        assert!(valid_redirect_uri("http://localhost:8080/callback").is_ok());
    }

    #[test]
    fn test_errors_name_their_field() {
        assert_eq!(
            valid_redirect_uri(None).unwrap_err(),
            ConfigValidationError::Missing(ConfigField::RedirectUri)
        );
    }
}
