//! # Config Validation Library
//!
//! Pre-flight checks for the values a Cryptr authentication client is
//! initialized with: issuer URL, client ID, client secret, redirect URI and
//! the application's base URL.
//!
//! Each validator is a plain synchronous function returning
//! [`ValidationResult<()>`]. It stops at the first broken rule and reports it
//! with a message meant for the developer who has to fix the configuration,
//! e.g. a value copied from a template that still reads `{client_id}`.
//!
//! ```
//! use config_validation_rs::prelude::*;
//!
//! assert!(valid_app_base_url("https://example.com").is_ok());
//!
//! let err = valid_app_base_url("http://localhost/").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Your appBaseUrl must not end in a '/'. Current value: http://localhost/."
//! );
//! ```

mod builder;
mod config;
mod errors;
pub mod diagnostics;
pub mod validators;

pub use builder::ValidationBuilder;
pub use config::{CryptrConfig, TestingConfig, DEFAULT_TESTING_CONFIG};
pub use diagnostics::{Diagnostics, LogDiagnostics, RecordedDiagnostics};
pub use errors::{ConfigField, ConfigLoadError, ConfigValidationError, ValidationResult};
pub use validators::{
    valid_app_base_url, valid_client_id, valid_client_secret, valid_issuer, valid_issuer_with,
    valid_redirect_uri,
};

/// Re-export commonly used items for convenience
pub mod prelude {
    pub use crate::config::{CryptrConfig, TestingConfig, DEFAULT_TESTING_CONFIG};
    pub use crate::diagnostics::{Diagnostics, LogDiagnostics, RecordedDiagnostics};
    pub use crate::errors::{ConfigField, ConfigValidationError, ValidationResult};
    pub use crate::validators::{
        valid_app_base_url, valid_client_id, valid_client_secret, valid_issuer,
        valid_issuer_with, valid_redirect_uri,
    };
}

/// Version of the validation library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
