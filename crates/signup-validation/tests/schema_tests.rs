//! Integration tests for the sign-up schema
//!
//! Covers the per-field rule tables and the whole-form scenarios.

use pretty_assertions::assert_eq;
use rstest::rstest;
use signup_validation::{validate, validate_field, ErrorMap, Field, FormValues};

fn valid_values() -> FormValues {
    FormValues::new("Ada", "Lovelace", "ada@example.com", "longenough")
}

#[rstest]
#[case(Field::FirstName, "First Name cannot be empty")]
#[case(Field::LastName, "Last Name cannot be empty")]
#[case(Field::Email, "Email cannot be empty")]
#[case(Field::Password, "Password cannot be empty")]
fn test_empty_value_yields_non_empty_error(#[case] field: Field, #[case] message: &str) {
    let mut values = valid_values();
    values.set(field, "");

    let errors = validate(&values);

    assert_eq!(errors.get(field), Some(message));
    assert_eq!(errors.len(), 1);
}

#[rstest]
#[case("bad")]
#[case("bad@")]
#[case("@example.com")]
#[case("a@b@c.com")]
#[case("a@b")]
#[case("a b@c.com")]
fn test_malformed_email_yields_format_error(#[case] email: &str) {
    let failure = validate_field(Field::Email, email).unwrap_err();
    assert_eq!(failure.message, "Looks like this is not an email");
}

#[rstest]
#[case("a@b.com")]
#[case("first.last@sub.example.org")]
#[case("x+y@example.io")]
fn test_well_formed_email_passes(#[case] email: &str) {
    assert!(validate_field(Field::Email, email).is_ok());
}

#[rstest]
#[case("a")]
#[case("1234567")]
#[case("       ")]
fn test_short_password_yields_length_error(#[case] password: &str) {
    let failure = validate_field(Field::Password, password).unwrap_err();
    assert_eq!(failure.message, "Password must be atleast 8 characters");
}

#[rstest]
#[case("12345678")]
#[case("longenough")]
#[case("a much longer passphrase")]
fn test_long_enough_password_passes(#[case] password: &str) {
    assert!(validate_field(Field::Password, password).is_ok());
}

#[test]
fn test_scenario_missing_first_name() {
    let values = FormValues::new("", "Doe", "a@b.com", "longenough");

    let mut expected = ErrorMap::new();
    expected.insert(Field::FirstName, "First Name cannot be empty");

    assert_eq!(validate(&values), expected);
}

#[test]
fn test_scenario_bad_email() {
    let values = FormValues::new("A", "B", "bad", "longenough");

    let mut expected = ErrorMap::new();
    expected.insert(Field::Email, "Looks like this is not an email");

    assert_eq!(validate(&values), expected);
}

#[test]
fn test_scenario_all_valid() {
    assert!(validate(&valid_values()).is_empty());
}

#[test]
fn test_every_invalid_field_reported() {
    let values = FormValues::new("", "", "nope", "short");
    let errors = validate(&values);

    assert_eq!(
        errors.iter().collect::<Vec<_>>(),
        vec![
            (Field::FirstName, "First Name cannot be empty"),
            (Field::LastName, "Last Name cannot be empty"),
            (Field::Email, "Looks like this is not an email"),
            (Field::Password, "Password must be atleast 8 characters"),
        ]
    );
}

#[test]
fn test_error_map_empty_iff_field_passes_all_rules() {
    let samples = ["", " ", "a", "bad", "a@b.com", "1234567", "longenough"];
    for field in Field::ALL {
        for sample in samples {
            let mut values = valid_values();
            values.set(field, sample);
            let passes = signup_validation::SIGNUP_SCHEMA
                .rules(field)
                .iter()
                .all(|rule| rule.check.passes(sample));
            assert_eq!(!validate(&values).contains(field), passes, "{field} = {sample:?}");
        }
    }
}
