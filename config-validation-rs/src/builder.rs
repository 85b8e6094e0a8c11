//! Validation builder pattern
//!
//! Rules are chained over a single configuration value. The first rule that
//! fails is kept and every later rule is skipped, so a caller only ever sees
//! one error per value.

use regex::Regex;

use crate::diagnostics::LOG_TARGET;
use crate::errors::{ConfigField, ConfigValidationError, ValidationResult};

/// Builder for chaining validation rules over one configuration value
#[derive(Debug, Clone)]
pub struct ValidationBuilder<'a> {
    /// Field the value belongs to
    field: ConfigField,
    /// The value being validated, `None` when absent
    value: Option<&'a str>,
    /// First error encountered, if any
    error: Option<ConfigValidationError>,
}

impl<'a> ValidationBuilder<'a> {
    /// Create a new validation builder
    pub fn new(field: ConfigField, value: Option<&'a str>) -> Self {
        Self {
            field,
            value,
            error: None,
        }
    }

    /// Apply a validation function unless an earlier rule already failed
    pub fn validate<F>(mut self, validator: F) -> Self
    where
        F: FnOnce(&'a str) -> ValidationResult<()>,
    {
        if self.error.is_none() {
            if let Err(err) = validator(self.value.unwrap_or_default()) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Reject an absent or empty value
    pub fn required(self) -> Self {
        let field = self.field;
        self.validate(|value| {
            if value.is_empty() {
                Err(ConfigValidationError::Missing(field))
            } else {
                Ok(())
            }
        })
    }

    /// Reject a value that still contains the field's template token
    pub fn reject_placeholder(self) -> Self {
        let field = self.field;
        self.validate(|value| {
            if value.contains(field.placeholder()) {
                Err(ConfigValidationError::placeholder(field, value))
            } else {
                Ok(())
            }
        })
    }

    /// Require `pattern` to match somewhere in the value
    pub fn require_match<E>(self, pattern: &Regex, error: E) -> Self
    where
        E: FnOnce(&'a str) -> ConfigValidationError,
    {
        self.validate(|value| {
            if pattern.is_match(value) {
                Ok(())
            } else {
                Err(error(value))
            }
        })
    }

    /// Reject the value if `pattern` matches anywhere in it
    pub fn reject_match<E>(self, pattern: &Regex, error: E) -> Self
    where
        E: FnOnce(&'a str) -> ConfigValidationError,
    {
        self.validate(|value| {
            if pattern.is_match(value) {
                Err(error(value))
            } else {
                Ok(())
            }
        })
    }

    /// Apply `rule` only when `enabled` is true
    pub fn when<F>(self, enabled: bool, rule: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if enabled {
            rule(self)
        } else {
            self
        }
    }

    /// Get the error (if any)
    pub fn error(&self) -> Option<&ConfigValidationError> {
        self.error.as_ref()
    }

    /// Finish validation and return the result
    pub fn finish(self) -> ValidationResult<()> {
        match self.error {
            Some(err) => {
                // message may quote the value, keep it out of the log
                log::debug!(target: LOG_TARGET, "{} rejected", self.field.key());
                Err(err)
            }
            None => {
                log::debug!(target: LOG_TARGET, "{} accepted", self.field.key());
                Ok(())
            }
        }
    }
}
