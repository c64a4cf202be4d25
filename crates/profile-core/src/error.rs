//! Error types for the profile form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::ProfileField;

/// Field-level validation failure.
///
/// The `Display` output is the message shown next to the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// A required field was blank or whitespace-only.
    #[error("{} is required", .field.label())]
    RequiredFieldMissing { field: ProfileField },

    /// A field was present but did not match its expected format.
    #[error("{message}")]
    InvalidFormat {
        field: ProfileField,
        message: String,
    },
}

impl ValidationError {
    pub fn required(field: ProfileField) -> Self {
        Self::RequiredFieldMissing { field }
    }

    pub fn invalid_format(field: ProfileField, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            message: message.into(),
        }
    }

    /// The field this error belongs to.
    pub fn field(&self) -> ProfileField {
        match self {
            Self::RequiredFieldMissing { field } | Self::InvalidFormat { field, .. } => *field,
        }
    }
}

/// A shared error type for the profile form crates.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ProfileError {
    /// One or more fields failed validation
    #[error("Validation failed ({} field(s))", .0.len())]
    Validation(Vec<ValidationError>),

    /// The profile store rejected an update
    #[error("Store error: {0}")]
    Store(String),

    /// The persistence step after a commit failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// The operation was abandoned because the form was torn down
    #[error("Operation cancelled")]
    Cancelled,
}

impl ProfileError {
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<std::io::Error> for ProfileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for ProfileError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<ValidationError> for ProfileError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(vec![err])
    }
}

/// A type alias for `Result<T, ProfileError>`.
pub type Result<T> = std::result::Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message_uses_field_label() {
        let err = ValidationError::required(ProfileField::FirstName);
        assert_eq!(err.to_string(), "First name is required");
        assert_eq!(err.field(), ProfileField::FirstName);
    }

    #[test]
    fn test_invalid_format_message_is_verbatim() {
        let err = ValidationError::invalid_format(ProfileField::Email, "Please enter a valid email address");
        assert_eq!(err.to_string(), "Please enter a valid email address");
        assert_eq!(err.field(), ProfileField::Email);
    }

    #[test]
    fn test_io_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ProfileError = io.into();
        assert!(err.to_string().contains("NotFound"));
    }
}
