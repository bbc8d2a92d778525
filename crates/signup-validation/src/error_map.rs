//! Derived mapping from field to its current failure message

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FieldValidationFailure;
use crate::field::Field;

/// Field name to error message, holding only fields that fail.
///
/// Keys iterate in declared field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap {
    errors: BTreeMap<Field, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the message for a field
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Clear the entry for a field, returning the old message
    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.errors.remove(&field)
    }

    /// Store the outcome of validating a single field
    pub fn apply(&mut self, field: Field, outcome: Result<(), FieldValidationFailure>) {
        match outcome {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(failure) => {
                self.errors.insert(field, failure.message);
            }
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(|s| s.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Failing fields in declared order
    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    pub fn failures(&self) -> Vec<FieldValidationFailure> {
        self.iter()
            .map(|(field, message)| FieldValidationFailure::new(field, message))
            .collect()
    }
}

impl FromIterator<FieldValidationFailure> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = FieldValidationFailure>>(iter: I) -> Self {
        let mut map = ErrorMap::new();
        for failure in iter {
            map.insert(failure.field, failure.message);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_inserts_and_clears() {
        let mut map = ErrorMap::new();
        map.apply(
            Field::Email,
            Err(FieldValidationFailure::new(Field::Email, "Email cannot be empty")),
        );
        assert_eq!(map.get(Field::Email), Some("Email cannot be empty"));

        map.apply(Field::Email, Ok(()));
        assert!(map.is_empty());
    }

    #[test]
    fn test_iterates_in_field_order() {
        let map: ErrorMap = vec![
            FieldValidationFailure::new(Field::Password, "p"),
            FieldValidationFailure::new(Field::FirstName, "f"),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.fields(), vec![Field::FirstName, Field::Password]);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let mut map = ErrorMap::new();
        map.insert(Field::FirstName, "First Name cannot be empty");
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"firstName": "First Name cannot be empty"}));
    }
}
