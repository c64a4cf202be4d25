//! Form-level domain: draft, errors, validation and notifications.

mod draft;
mod notification;
pub mod validation;

pub use draft::{Draft, FieldErrors};
pub use notification::{
    Notification, NotificationKind, SUBMIT_REJECTED_MESSAGE, SUBMIT_SUCCESS_MESSAGE,
};
