// File: src/mode.rs
// Purpose: When the controller computes errors, before and after the first submit

use serde::{Deserialize, Serialize};

/// Trigger for validation before the form has been submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationMode {
    /// Only a submit attempt validates
    #[default]
    OnSubmit,
    /// Leaving a field validates it
    OnBlur,
    /// Every change validates the changed field
    OnChange,
    /// First blur validates, then every change of a touched field
    OnTouched,
    /// Both change and blur validate
    All,
}

/// Trigger for validation after the first submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RevalidateMode {
    #[default]
    OnChange,
    OnBlur,
    OnSubmit,
}

/// A field-level event reported by the input binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    Change,
    Blur,
}

impl FieldEvent {
    pub const ALL: [FieldEvent; 2] = [FieldEvent::Change, FieldEvent::Blur];

    /// Map a DOM event type onto a field event
    pub fn from_dom_event(event_type: &str) -> Option<Self> {
        match event_type {
            "input" | "change" => Some(FieldEvent::Change),
            "blur" | "focusout" => Some(FieldEvent::Blur),
            _ => None,
        }
    }

    /// `hx-trigger` spec for this event
    pub fn hx_trigger(self) -> &'static str {
        match self {
            FieldEvent::Change => "input changed",
            FieldEvent::Blur => "blur",
        }
    }
}

impl ValidationMode {
    pub(crate) fn validates(self, event: FieldEvent, touched: bool) -> bool {
        match (self, event) {
            (ValidationMode::OnSubmit, _) => false,
            (ValidationMode::OnBlur, FieldEvent::Blur) => true,
            (ValidationMode::OnBlur, FieldEvent::Change) => false,
            (ValidationMode::OnChange, FieldEvent::Change) => true,
            (ValidationMode::OnChange, FieldEvent::Blur) => false,
            (ValidationMode::OnTouched, FieldEvent::Blur) => true,
            (ValidationMode::OnTouched, FieldEvent::Change) => touched,
            (ValidationMode::All, _) => true,
        }
    }
}

impl RevalidateMode {
    pub(crate) fn validates(self, event: FieldEvent) -> bool {
        matches!(
            (self, event),
            (RevalidateMode::OnChange, FieldEvent::Change) | (RevalidateMode::OnBlur, FieldEvent::Blur)
        )
    }
}
