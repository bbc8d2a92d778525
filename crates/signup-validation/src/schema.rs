//! Declarative rule schema for the sign-up form

use crate::email::is_valid_email;
use crate::error::FieldValidationFailure;
use crate::error_map::ErrorMap;
use crate::field::Field;
use crate::string::{validate_min_length, validate_non_empty};
use crate::values::FormValues;

/// Minimum password length in characters
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// A single predicate on a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    NonEmpty,
    Email,
    MinLength(usize),
}

impl Check {
    pub fn passes(self, value: &str) -> bool {
        match self {
            Check::NonEmpty => validate_non_empty(value).is_ok(),
            Check::Email => is_valid_email(value),
            Check::MinLength(min) => validate_min_length(value, min).is_ok(),
        }
    }
}

/// A check plus the message surfaced when it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(check: Check, message: &'static str) -> Self {
        Self { check, message }
    }
}

/// Ordered rules per field. Rules for a field short-circuit on the first failure.
#[derive(Debug, Clone, Copy)]
pub struct ValidationSchema {
    fields: &'static [(Field, &'static [Rule])],
}

/// The sign-up schema
pub static SIGNUP_SCHEMA: ValidationSchema = ValidationSchema {
    fields: &[
        (
            Field::FirstName,
            &[Rule::new(Check::NonEmpty, "First Name cannot be empty")],
        ),
        (
            Field::LastName,
            &[Rule::new(Check::NonEmpty, "Last Name cannot be empty")],
        ),
        (
            Field::Email,
            &[
                Rule::new(Check::NonEmpty, "Email cannot be empty"),
                Rule::new(Check::Email, "Looks like this is not an email"),
            ],
        ),
        (
            Field::Password,
            &[
                Rule::new(Check::NonEmpty, "Password cannot be empty"),
                Rule::new(
                    Check::MinLength(PASSWORD_MIN_LENGTH),
                    "Password must be atleast 8 characters",
                ),
            ],
        ),
    ],
};

impl ValidationSchema {
    /// Rules declared for a field, in evaluation order
    pub fn rules(&self, field: Field) -> &'static [Rule] {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rules)| *rules)
            .unwrap_or(&[])
    }

    /// Validate one value against its field's rules, stopping at the first failure
    pub fn validate_field(&self, field: Field, value: &str) -> Result<(), FieldValidationFailure> {
        match self.rules(field).iter().find(|rule| !rule.check.passes(value)) {
            Some(rule) => Err(FieldValidationFailure::new(field, rule.message)),
            None => Ok(()),
        }
    }

    /// Validate every field; the result holds only failing fields
    pub fn validate(&self, values: &FormValues) -> ErrorMap {
        self.fields
            .iter()
            .filter_map(|(field, _)| self.validate_field(*field, values.get(*field)).err())
            .collect()
    }
}

/// Validate all values against [`SIGNUP_SCHEMA`]
pub fn validate(values: &FormValues) -> ErrorMap {
    SIGNUP_SCHEMA.validate(values)
}

/// Validate one field against [`SIGNUP_SCHEMA`]
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldValidationFailure> {
    SIGNUP_SCHEMA.validate_field(field, value)
}
