//! Contact form validation

use crate::error::{Result, SiteError};
use crate::notify::Notification;

/// Shown after a valid submission
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// Shown when a required field is blank
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Class put on invalid inputs
pub const INVALID_CLASS: &str = "is-invalid";

/// A form control as read from the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Field name, for logging
    pub name: String,
    /// Current value
    pub value: String,
    /// Whether the control carries `required`
    pub required: bool,
}

impl FormField {
    /// Create a required field
    pub fn required(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: true,
        }
    }

    /// Create an optional field
    pub fn optional(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: false,
        }
    }
}

/// Validation outcome of one required field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVerdict {
    /// Filled in; drop the invalid marker
    Valid,
    /// Blank; mark it invalid
    Invalid,
    /// Not required; leave it alone
    Unchecked,
}

/// Result of validating a whole form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    verdicts: Vec<FieldVerdict>,
    invalid_names: Vec<String>,
}

impl FormReport {
    /// Verdict per field, in input order
    pub fn verdicts(&self) -> &[FieldVerdict] {
        &self.verdicts
    }

    /// Names of blank required fields
    pub fn invalid_fields(&self) -> &[String] {
        &self.invalid_names
    }

    /// Whether submission may proceed
    pub fn is_valid(&self) -> bool {
        self.invalid_names.is_empty()
    }

    /// Notification to show for this outcome
    pub fn notification(&self) -> Notification {
        if self.is_valid() {
            Notification::success(SUCCESS_MESSAGE)
        } else {
            Notification::error(MISSING_FIELDS_MESSAGE)
        }
    }

    /// Convert to a result, failing with the blank field names
    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SiteError::Validation(format!(
                "Required fields are empty: {}",
                self.invalid_names.join(", ")
            )))
        }
    }
}

/// Validator for submitted forms
#[derive(Debug, Clone, Default)]
pub struct FormValidator;

impl FormValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validate a single value of a required field
    pub fn validate_required(&self, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(SiteError::Validation("Field cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Validate every field of a form
    pub fn validate(&self, fields: &[FormField]) -> FormReport {
        let mut invalid_names = Vec::new();
        let verdicts = fields
            .iter()
            .map(|field| {
                if !field.required {
                    FieldVerdict::Unchecked
                } else if self.validate_required(&field.value).is_ok() {
                    FieldVerdict::Valid
                } else {
                    invalid_names.push(field.name.clone());
                    FieldVerdict::Invalid
                }
            })
            .collect();

        if !invalid_names.is_empty() {
            tracing::debug!(fields = ?invalid_names, "Form rejected");
        }

        FormReport {
            verdicts,
            invalid_names,
        }
    }
}
