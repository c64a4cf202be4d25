use profile_core::form::{Draft, FieldErrors, Notification};
use profile_core::profile::{Profile, ProfileField};
use serde::Serialize;

use super::notification_slot::NotificationSlot;

/// Where the form is in its submission workflow.
///
/// A rejected submission passes straight back to `Idle`; it is reported
/// through [`SubmitOutcome::Rejected`] rather than held as a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Committing,
}

/// Result of a submit trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight.
    Ignored,
    /// Validation failed; nothing was committed.
    Rejected(FieldErrors),
    /// The profile was applied to the store and persisted.
    Committed(Profile),
    /// The store or the persistence step failed.
    Failed(String),
    /// The form was torn down before the commit finished.
    Cancelled,
}

/// Transient editing state owned by a single controller.
#[derive(Debug, Default)]
pub(crate) struct FormState {
    pub(crate) draft: Draft,
    pub(crate) field_errors: FieldErrors,
    pub(crate) focused: Option<ProfileField>,
    pub(crate) phase: SubmissionPhase,
    pub(crate) notification: NotificationSlot,
}

impl FormState {
    pub(crate) fn new(draft: Draft) -> Self {
        Self {
            draft,
            ..Default::default()
        }
    }

    pub(crate) fn is_submitting(&self) -> bool {
        self.phase != SubmissionPhase::Idle
    }

    pub(crate) fn snapshot(&self) -> FormSnapshot {
        let (filled, total) = self.draft.completion();
        FormSnapshot {
            draft: self.draft.profile().clone(),
            field_errors: self.field_errors.clone(),
            focused: self.focused,
            phase: self.phase,
            is_submitting: self.is_submitting(),
            notification: self.notification.current().cloned(),
            completion: Completion { filled, total },
        }
    }
}

/// Count of non-empty draft fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub filled: usize,
    pub total: usize,
}

/// Owned, read-only view of the form for rendering layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot {
    pub draft: Profile,
    pub field_errors: FieldErrors,
    pub focused: Option<ProfileField>,
    pub phase: SubmissionPhase,
    pub is_submitting: bool,
    pub notification: Option<Notification>,
    pub completion: Completion,
}
