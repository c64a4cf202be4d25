mod controller;
mod notification_slot;
mod state;

pub use controller::ProfileFormController;
pub use state::{Completion, FormSnapshot, SubmissionPhase, SubmitOutcome};
