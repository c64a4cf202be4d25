//! Draft and per-field error state.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::ValidationError;
use crate::form::validation::accepts_input;
use crate::profile::{Gender, Profile, ProfileField};

/// Working copy of the profile being edited.
///
/// Wrapping a [`Profile`] keeps all six fields defined at all times.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draft(Profile);

impl Draft {
    /// An all-empty draft.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_profile(profile: Profile) -> Self {
        Self(profile)
    }

    pub fn profile(&self) -> &Profile {
        &self.0
    }

    pub fn into_profile(self) -> Profile {
        self.0
    }

    pub fn value(&self, field: ProfileField) -> &str {
        self.0.value(field)
    }

    /// Applies a keystroke-level edit if the live filter admits it.
    ///
    /// Returns `false` and leaves the draft untouched when rejected.
    pub fn apply_edit(&mut self, field: ProfileField, value: &str) -> bool {
        if !accepts_input(field, value) {
            return false;
        }

        match field {
            ProfileField::FirstName => self.0.first_name = value.to_string(),
            ProfileField::LastName => self.0.last_name = value.to_string(),
            ProfileField::Email => self.0.email = value.to_string(),
            ProfileField::Phone => self.0.phone = value.to_string(),
            ProfileField::Address => self.0.address = value.to_string(),
            ProfileField::Gender => match Gender::from_str(value) {
                Ok(gender) => self.0.gender = gender,
                Err(_) => return false,
            },
        }
        true
    }

    /// Number of non-empty fields and the total field count.
    pub fn completion(&self) -> (usize, usize) {
        let filled = ProfileField::iter()
            .filter(|field| self.0.is_filled(*field))
            .count();
        (filled, ProfileField::count())
    }
}

/// Messages for fields that failed their most recent validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ProfileField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, error: &ValidationError) {
        self.0.insert(error.field(), error.to_string());
    }

    /// Drops the entry for `field`, returning whether one existed.
    pub fn clear_field(&mut self, field: ProfileField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl FromIterator<ValidationError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut errors = FieldErrors::new();
        for error in iter {
            errors.insert(&error);
        }
        errors
    }
}
