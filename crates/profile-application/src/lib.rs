pub mod form;

pub use form::{FormSnapshot, ProfileFormController, SubmissionPhase, SubmitOutcome};
