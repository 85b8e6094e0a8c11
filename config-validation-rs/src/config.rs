//! Configuration records checked by the validators

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::errors::{ConfigLoadError, ValidationResult};
use crate::validators::{
    valid_app_base_url, valid_client_id, valid_client_secret, valid_issuer_with,
    valid_redirect_uri,
};

/// Options that relax validation for local development and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestingConfig {
    /// Accept an issuer that does not start with `https://`
    pub disable_https_check: bool,
}

/// Strict settings: HTTPS is enforced on the issuer
pub const DEFAULT_TESTING_CONFIG: TestingConfig = TestingConfig {
    disable_https_check: false,
};

/// Client settings as found in `cryptr.config.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CryptrConfig {
    /// Base URL of the Cryptr authority
    pub issuer: Option<String>,
    /// Client ID of the application
    #[serde(alias = "client_id")]
    pub client_id: Option<String>,
    /// Client secret of the application
    #[serde(skip_serializing)]
    pub client_secret: Option<String>,
    /// Redirect URI registered for the application
    pub redirect_uri: Option<String>,
    /// Base URL of the consuming application
    pub app_base_url: Option<String>,
}

impl CryptrConfig {
    /// Parse a configuration document. Nothing is validated yet.
    pub fn from_json(json: &str) -> Result<Self, ConfigLoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every field, sending warnings to the `log` facade
    pub fn validate(&self, testing: &TestingConfig) -> ValidationResult<()> {
        self.validate_with(testing, &LogDiagnostics)
    }

    /// Validate every field and return the first failure
    ///
    /// Fields are checked in the order issuer, client ID, client secret,
    /// redirect URI, appBaseUrl.
    pub fn validate_with(
        &self,
        testing: &TestingConfig,
        diagnostics: &dyn Diagnostics,
    ) -> ValidationResult<()> {
        valid_issuer_with(self.issuer.as_deref(), testing, diagnostics)?;
        valid_client_id(self.client_id.as_deref())?;
        valid_client_secret(self.client_secret.as_deref())?;
        valid_redirect_uri(self.redirect_uri.as_deref())?;
        valid_app_base_url(self.app_base_url.as_deref())?;
        Ok(())
    }
}
