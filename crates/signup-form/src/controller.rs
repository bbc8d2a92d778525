// File: src/controller.rs
// Purpose: Form controller binding input events to values and the validation schema

use std::collections::BTreeSet;

use signup_validation::{validate, validate_field, ErrorMap, Field, FormValues};

use crate::mode::{FieldEvent, RevalidateMode, ValidationMode};

/// Presentation state of a field, mapped onto the input's CSS modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Default,
    Danger,
}

impl FieldState {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldState::Default => "default",
            FieldState::Danger => "danger",
        }
    }

    /// Full BEM class for the input element
    pub fn css_class(self) -> String {
        format!("form-signup__content__body--{}", self.as_str())
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values were valid and the callback ran
    Submitted,
    /// At least one field failed; the callback did not run
    Rejected(ErrorMap),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

/// Everything needed to render one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub field: Field,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub state: FieldState,
}

/// Owns one form's values and errors.
///
/// Events are delivered one at a time through `&mut self`; the controller
/// never shares its state.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    mode: ValidationMode,
    revalidate_mode: RevalidateMode,
    values: FormValues,
    errors: ErrorMap,
    touched: BTreeSet<Field>,
    submit_count: u32,
}

impl FormController {
    pub fn new(mode: ValidationMode, revalidate_mode: RevalidateMode) -> Self {
        Self {
            mode,
            revalidate_mode,
            ..Self::default()
        }
    }

    /// Seed the controller with existing values, e.g. a submitted request body
    pub fn with_values(mut self, values: FormValues) -> Self {
        self.values = values;
        self
    }

    /// Restore interaction history carried by the page between requests
    pub fn with_history(mut self, touched: impl IntoIterator<Item = Field>, submit_count: u32) -> Self {
        self.touched.extend(touched);
        self.submit_count = submit_count;
        self
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn revalidate_mode(&self) -> RevalidateMode {
        self.revalidate_mode
    }

    /// Keystroke into a field
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        if self.should_validate(field, FieldEvent::Change) {
            self.revalidate(field);
        }
    }

    /// Focus left a field
    pub fn blur(&mut self, field: Field) {
        let first_touch = self.touched.insert(field);
        if first_touch {
            tracing::trace!(field = %field, "field touched");
        }
        if self.should_validate(field, FieldEvent::Blur) {
            self.revalidate(field);
        }
    }

    /// Dispatch a field event to `change` or `blur`
    pub fn handle_event(&mut self, field: Field, event: FieldEvent, value: impl Into<String>) {
        match event {
            FieldEvent::Change => self.change(field, value),
            FieldEvent::Blur => {
                self.values.set(field, value);
                self.blur(field);
            }
        }
    }

    /// Events that would validate `field` in its current state
    pub fn field_triggers(&self, field: Field) -> Vec<FieldEvent> {
        FieldEvent::ALL
            .into_iter()
            .filter(|event| self.should_validate(field, *event))
            .collect()
    }

    /// Validate all values and call `on_valid` only when every field passes.
    ///
    /// The error map is replaced by the full validation result either way.
    pub fn handle_submit<F>(&mut self, on_valid: F) -> SubmitOutcome
    where
        F: FnOnce(&FormValues),
    {
        self.submit_count += 1;
        self.errors = validate(&self.values);

        if self.errors.is_empty() {
            on_valid(&self.values);
            SubmitOutcome::Submitted
        } else {
            tracing::debug!(
                fields = ?self.errors.fields(),
                submit_count = self.submit_count,
                "submit rejected"
            );
            SubmitOutcome::Rejected(self.errors.clone())
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn field_state(&self, field: Field) -> FieldState {
        if self.errors.contains(field) {
            FieldState::Danger
        } else {
            FieldState::Default
        }
    }

    pub fn field_view(&self, field: Field) -> FieldView<'_> {
        FieldView {
            field,
            value: self.values.get(field),
            error: self.errors.get(field),
            state: self.field_state(field),
        }
    }

    pub fn touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_submitted(&self) -> bool {
        self.submit_count > 0
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Back to empty values, no errors, nothing touched
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors = ErrorMap::new();
        self.touched.clear();
        self.submit_count = 0;
    }

    fn should_validate(&self, field: Field, event: FieldEvent) -> bool {
        if self.is_submitted() {
            self.revalidate_mode.validates(event)
        } else {
            self.mode.validates(event, self.touched(field))
        }
    }

    fn revalidate(&mut self, field: Field) {
        let outcome = validate_field(field, self.values.get(field));
        self.errors.apply(field, outcome);
    }
}
