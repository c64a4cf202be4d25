pub mod config;
pub mod error;
pub mod form;
pub mod profile;

// Re-export common error type
pub use error::{ProfileError, ValidationError};
