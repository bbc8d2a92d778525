//! Sign-up Validation
//!
//! The sign-up form's fields, their ordered rules and the pure
//! `validate(values) -> ErrorMap` function. Shared by the server-side
//! controller and the WASM client-side bindings.

pub mod email;
pub mod error;
pub mod error_map;
pub mod field;
pub mod schema;
pub mod string;
pub mod values;

pub use email::is_valid_email;
pub use error::{FieldValidationFailure, SignupError};
pub use error_map::ErrorMap;
pub use field::Field;
pub use schema::{validate, validate_field, Check, Rule, ValidationSchema, PASSWORD_MIN_LENGTH, SIGNUP_SCHEMA};
pub use values::FormValues;
