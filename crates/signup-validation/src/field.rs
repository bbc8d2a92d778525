//! Field identity for the sign-up form

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SignupError;

/// One named input slot in the sign-up form.
///
/// Variants are declared in form order; `Ord` follows that order so maps
/// keyed by `Field` iterate top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
}

impl Field {
    /// All fields in declared order
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Password];

    /// Name used in form bodies, JSON and the error map
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// DOM id of the input, referenced by the label's `for` attribute
    pub fn input_id(self) -> &'static str {
        match self {
            Field::FirstName => "fname",
            Field::LastName => "lname",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email Address",
            Field::Password => "Password",
        }
    }

    /// HTML input type
    pub fn input_type(self) -> &'static str {
        match self {
            Field::FirstName | Field::LastName => "text",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = SignupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| SignupError::UnknownField(s.to_string()))
    }
}
