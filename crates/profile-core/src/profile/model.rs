//! Profile domain model.
//!
//! Represents the editable personal information of the current user.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Gender choice offered by the profile form.
///
/// `Unset` is the empty selection and renders as the empty string.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
    #[default]
    #[serde(rename = "")]
    #[strum(serialize = "")]
    Unset,
}

impl Gender {
    /// The selectable choices, excluding `Unset`.
    pub fn choices() -> impl Iterator<Item = Gender> {
        Gender::iter().filter(|g| !g.is_unset())
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Gender::Unset)
    }
}

/// Names of the six profile fields, in form order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    Gender,
}

impl ProfileField {
    /// Human-readable label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "First name",
            ProfileField::LastName => "Last name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone number",
            ProfileField::Address => "Address",
            ProfileField::Gender => "Gender",
        }
    }

    /// Total number of fields in the form.
    pub fn count() -> usize {
        ProfileField::iter().count()
    }
}

/// User profile domain model.
///
/// Every field is always present; "not set" is the empty string
/// (or `Gender::Unset`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub gender: Gender,
}

impl Profile {
    /// Returns the value of `field` in its text form.
    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Address => &self.address,
            ProfileField::Gender => self.gender.as_ref(),
        }
    }

    /// Whether `field` holds a non-empty value.
    pub fn is_filled(&self, field: ProfileField) -> bool {
        !self.value(field).is_empty()
    }

    /// Merges the provided fields of `update` into this profile.
    ///
    /// Fields left as `None` in the update are unchanged.
    pub fn merge(&mut self, update: ProfileUpdate) {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
    }
}

/// A partial profile: only the `Some` fields are applied by a store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<Profile> for ProfileUpdate {
    fn from(profile: Profile) -> Self {
        Self {
            first_name: Some(profile.first_name),
            last_name: Some(profile.last_name),
            email: Some(profile.email),
            phone: Some(profile.phone),
            address: Some(profile.address),
            gender: Some(profile.gender),
        }
    }
}
