// Sign-up Form
// Controller, configuration and server-side rendering for the sign-up page

pub mod config;
pub mod controller;
pub mod mode;
pub mod render;

pub use config::Config;
pub use controller::{FieldState, FieldView, FormController, SubmitOutcome};
pub use mode::{FieldEvent, RevalidateMode, ValidationMode};
pub use render::{
    error_icon, hx_trigger, render_field, render_field_fragment, render_form, render_page,
    FIELD_EVENT_PATH,
};

// Re-export the schema so hosts depend on one crate
pub use signup_validation::{
    validate, validate_field, ErrorMap, Field, FieldValidationFailure, FormValues, SignupError,
};

// Re-export Maud for hosts
pub use maud::Markup;
