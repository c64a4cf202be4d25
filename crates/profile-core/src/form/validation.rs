//! Field validators and live input filters.
//!
//! Validators run at submit time. Filters run on every edit and decide
//! whether the new value may enter the draft at all. The name filter admits
//! whitespace while the name validator does not, so "John Smith" can be typed
//! but not submitted.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::form::draft::FieldErrors;
use crate::profile::{Gender, Profile, ProfileField};

static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid name regex"));
static NAME_INPUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ]*$").expect("valid name input regex"));
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));
static PHONE_INPUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{0,10}$").expect("valid phone input regex"));

pub const INVALID_FIRST_NAME: &str = "First name should contain only letters";
pub const INVALID_LAST_NAME: &str = "Last name should contain only letters";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const INVALID_PHONE: &str = "Phone number must be exactly 10 digits";

/// Non-empty and ASCII letters only.
pub fn validate_name(s: &str) -> bool {
    NAME.is_match(s)
}

/// `local@domain.tld` shape: one `@`, no whitespace, a dot after the `@`.
pub fn validate_email(s: &str) -> bool {
    EMAIL.is_match(s)
}

/// Exactly ten ASCII digits.
pub fn validate_phone(s: &str) -> bool {
    PHONE.is_match(s)
}

/// Returns whether `value` may replace the current draft value of `field`.
///
/// Rejections are silent: the caller keeps the previous value and shows no
/// error.
pub fn accepts_input(field: ProfileField, value: &str) -> bool {
    match field {
        ProfileField::FirstName | ProfileField::LastName => NAME_INPUT.is_match(value),
        ProfileField::Phone => PHONE_INPUT.is_match(value),
        ProfileField::Gender => Gender::from_str(value).is_ok(),
        ProfileField::Email | ProfileField::Address => true,
    }
}

fn check_name(field: ProfileField, value: &str, invalid: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        Some(ValidationError::required(field))
    } else if !validate_name(value) {
        Some(ValidationError::invalid_format(field, invalid))
    } else {
        None
    }
}

/// Validates a whole profile and returns every failing field.
///
/// The result is computed from scratch; it never depends on earlier errors.
pub fn validate_profile(profile: &Profile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(check_name(
        ProfileField::FirstName,
        &profile.first_name,
        INVALID_FIRST_NAME,
    ));
    errors.extend(check_name(
        ProfileField::LastName,
        &profile.last_name,
        INVALID_LAST_NAME,
    ));

    if !profile.email.trim().is_empty() && !validate_email(&profile.email) {
        errors.push(ValidationError::invalid_format(ProfileField::Email, INVALID_EMAIL));
    }

    if profile.phone.trim().is_empty() {
        errors.push(ValidationError::required(ProfileField::Phone));
    } else if !validate_phone(&profile.phone) {
        errors.push(ValidationError::invalid_format(ProfileField::Phone, INVALID_PHONE));
    }

    errors
}

/// Same as [`validate_profile`], keyed by field for display.
pub fn field_errors(profile: &Profile) -> FieldErrors {
    validate_profile(profile).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first: &str, last: &str, email: &str, phone: &str) -> Profile {
        Profile {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Jane"));
        assert!(validate_name("x"));
        assert!(!validate_name(""));
        assert!(!validate_name("John Smith"));
        assert!(!validate_name("John3"));
        assert!(!validate_name("O'Neil"));
        assert!(!validate_name("Zoë"));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jane@example.com"));
        assert!(validate_email("a.b@mail.example.org"));
        assert!(!validate_email("jane@example"));
        assert!(!validate_email("jane@@example.com"));
        assert!(!validate_email("ja ne@example.com"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("jane@.com"));
        assert!(!validate_email("jane@example."));
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("5551234567"));
        assert!(!validate_phone("555123456"));
        assert!(!validate_phone("55512345678"));
        assert!(!validate_phone("555-123-45"));
        assert!(!validate_phone("٥٥٥١٢٣٤٥٦٧"));
    }

    #[test]
    fn test_name_filter_allows_spaces_but_not_digits() {
        assert!(accepts_input(ProfileField::FirstName, "John Smith"));
        assert!(accepts_input(ProfileField::LastName, ""));
        assert!(!accepts_input(ProfileField::FirstName, "John3"));
        assert!(!accepts_input(ProfileField::LastName, "Doe-Ray"));
    }

    #[test]
    fn test_name_filter_rejects_tabs_and_newlines() {
        assert!(!accepts_input(ProfileField::FirstName, "John\tSmith"));
        assert!(!accepts_input(ProfileField::LastName, "Doe\n"));
        assert!(!accepts_input(ProfileField::FirstName, "\u{a0}Ann"));
    }

    #[test]
    fn test_phone_filter_caps_at_ten_digits() {
        assert!(accepts_input(ProfileField::Phone, ""));
        assert!(accepts_input(ProfileField::Phone, "1234567890"));
        assert!(!accepts_input(ProfileField::Phone, "12345678901"));
        assert!(!accepts_input(ProfileField::Phone, "123-456"));
    }

    #[test]
    fn test_free_text_fields_accept_anything() {
        assert!(accepts_input(ProfileField::Email, "not an email !!"));
        assert!(accepts_input(ProfileField::Address, "221B Baker St\nLondon"));
    }

    #[test]
    fn test_gender_filter_is_closed_choice() {
        assert!(accepts_input(ProfileField::Gender, "male"));
        assert!(accepts_input(ProfileField::Gender, "prefer-not-to-say"));
        assert!(accepts_input(ProfileField::Gender, ""));
        assert!(!accepts_input(ProfileField::Gender, "unknown"));
    }

    #[test]
    fn test_missing_first_name_only() {
        let errors = field_errors(&profile("", "Doe", "", "1234567890"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(ProfileField::FirstName), Some("First name is required"));
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let errors = field_errors(&profile("   ", "Doe", "", " "));
        assert_eq!(errors.get(ProfileField::FirstName), Some("First name is required"));
        assert_eq!(errors.get(ProfileField::Phone), Some("Phone number is required"));
    }

    #[test]
    fn test_format_errors() {
        let errors = field_errors(&profile("John Smith", "Doe3", "bad@", "12345"));
        assert_eq!(errors.get(ProfileField::FirstName), Some(INVALID_FIRST_NAME));
        assert_eq!(errors.get(ProfileField::LastName), Some(INVALID_LAST_NAME));
        assert_eq!(errors.get(ProfileField::Email), Some(INVALID_EMAIL));
        assert_eq!(errors.get(ProfileField::Phone), Some(INVALID_PHONE));
    }

    #[test]
    fn test_valid_profile_has_no_errors() {
        assert!(validate_profile(&profile("Jane", "Doe", "", "5551234567")).is_empty());
        assert!(validate_profile(&profile("Jane", "Doe", "jane@doe.io", "5551234567")).is_empty());
    }
}
