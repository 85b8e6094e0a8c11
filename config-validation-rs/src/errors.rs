//! Error handling for configuration validation
//!
//! Every variant renders the exact message shown to the developer who
//! misconfigured the client. Callers that match on message text keep working,
//! Rust callers can match on the variant or ask for the offending field.

use std::fmt;
use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ConfigValidationError>;

/// The configuration values checked before the client is initialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    /// Base URL of the Cryptr authority
    Issuer,
    /// Client ID of the application
    ClientId,
    /// Client secret of the application
    ClientSecret,
    /// Redirect URI registered for the application
    RedirectUri,
    /// Base URL of the consuming application
    AppBaseUrl,
}

impl ConfigField {
    /// Wording used for the field in "is missing" messages
    pub fn label(self) -> &'static str {
        match self {
            ConfigField::Issuer => "Cryptr URL issuer",
            ConfigField::ClientId => "client ID",
            ConfigField::ClientSecret => "client secret",
            ConfigField::RedirectUri => "redirect URI",
            ConfigField::AppBaseUrl => "appBaseUrl",
        }
    }

    /// Key of the field in `cryptr.config.json`
    pub fn key(self) -> &'static str {
        match self {
            ConfigField::Issuer => "issuer",
            ConfigField::ClientId => "clientId",
            ConfigField::ClientSecret => "clientSecret",
            ConfigField::RedirectUri => "redirectUri",
            ConfigField::AppBaseUrl => "appBaseUrl",
        }
    }

    /// Template token left behind when the field was never filled in
    pub fn placeholder(self) -> &'static str {
        match self {
            ConfigField::Issuer => "{yourCryptrDomain}",
            ConfigField::ClientId => "{client_id}",
            ConfigField::ClientSecret => "{clientSecret}",
            ConfigField::RedirectUri => "{redirectUri}",
            ConfigField::AppBaseUrl => "{appBaseUrl}",
        }
    }

    /// Whether the placeholder message repeats the raw value instead of the token.
    /// Only the client ID does; the secret must never be echoed.
    pub fn echoes_value(self) -> bool {
        matches!(self, ConfigField::ClientId)
    }

    fn replacement_hint(self) -> &'static str {
        match self {
            ConfigField::Issuer => "with your Cryptr domain.",
            ConfigField::ClientId => {
                "(client_id in cryptr.config.json) with the client ID of your Application."
            }
            ConfigField::ClientSecret => "with the client secret of your Application.",
            ConfigField::RedirectUri => "with the redirect URI of your Application.",
            ConfigField::AppBaseUrl => "with the base URL of your Application.",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A configuration value that must not be used to initialize the client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Value is absent or empty
    #[error("Your {0} is missing.")]
    Missing(ConfigField),

    /// Issuer does not use https while the HTTPS check is enabled
    #[error(
        "Your Cryptr URL issuer must start with https.Current value: {0}. You can copy your domain from the Cryptr Developer "
    )]
    InsecureIssuer(String),

    /// Value still contains the template placeholder
    #[error("Replace {found} {}", .field.replacement_hint())]
    Placeholder {
        /// Field holding the placeholder
        field: ConfigField,
        /// Text quoted back in the message
        found: String,
    },

    /// appBaseUrl has no `://`
    #[error("Your appBaseUrl must contain a protocol (e.g. https://). Current value: {0}.")]
    MissingProtocol(String),

    /// appBaseUrl ends with `/`
    #[error("Your appBaseUrl must not end in a '/'. Current value: {0}.")]
    TrailingSlash(String),
}

impl ConfigValidationError {
    /// Build a placeholder error, quoting the raw value only where the message calls for it
    pub fn placeholder(field: ConfigField, value: &str) -> Self {
        let found = if field.echoes_value() {
            value
        } else {
            field.placeholder()
        };
        ConfigValidationError::Placeholder {
            field,
            found: found.to_string(),
        }
    }

    /// The field this error is about
    pub fn field(&self) -> ConfigField {
        match self {
            ConfigValidationError::Missing(field) => *field,
            ConfigValidationError::InsecureIssuer(_) => ConfigField::Issuer,
            ConfigValidationError::Placeholder { field, .. } => *field,
            ConfigValidationError::MissingProtocol(_)
            | ConfigValidationError::TrailingSlash(_) => ConfigField::AppBaseUrl,
        }
    }

    /// Returns true if the value was an unedited template placeholder
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ConfigValidationError::Placeholder { .. })
    }
}

/// Failure to read a configuration record, before any validation runs
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// The document is not valid JSON for a Cryptr configuration
    #[error("Invalid Cryptr configuration: {0}")]
    Json(#[from] serde_json::Error),
}
