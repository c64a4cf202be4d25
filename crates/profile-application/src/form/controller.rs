use std::sync::Arc;

use profile_core::config::FormSettings;
use profile_core::error::{ProfileError, Result};
use profile_core::form::validation::validate_profile;
use profile_core::form::{
    Draft, FieldErrors, Notification, SUBMIT_REJECTED_MESSAGE, SUBMIT_SUCCESS_MESSAGE,
};
use profile_core::profile::{
    PersistenceGateway, Profile, ProfileField, ProfileStore, ProfileUpdate,
};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use super::state::{FormSnapshot, FormState, SubmissionPhase, SubmitOutcome};

/// Everything a background commit needs, detached from the controller's
/// lifetime.
#[derive(Clone)]
struct FormContext {
    state: Arc<Mutex<FormState>>,
    store: Arc<dyn ProfileStore>,
    gateway: Arc<dyn PersistenceGateway>,
    settings: FormSettings,
    shutdown: CancellationToken,
}

/// Drives a profile editing form.
///
/// `ProfileFormController` is responsible for:
/// - Seeding the draft from the profile store on mount
/// - Filtering field edits and clearing stale field errors
/// - Tracking the focused field
/// - Validating and committing submissions, ignoring re-entrant ones
/// - Showing a single auto-dismissing notification
///
/// It holds no rendering concerns; callers read state back through
/// [`snapshot`](Self::snapshot).
pub struct ProfileFormController {
    ctx: FormContext,
}

impl ProfileFormController {
    /// Mounts a new form, initializing the draft from the store.
    ///
    /// # Arguments
    ///
    /// * `store` - The shared profile store, owned by the application root
    /// * `gateway` - The persistence step awaited after each commit
    /// * `settings` - Notification and latency timings
    pub async fn mount(
        store: Arc<dyn ProfileStore>,
        gateway: Arc<dyn PersistenceGateway>,
        settings: FormSettings,
    ) -> Self {
        let draft = Draft::from_profile(store.read().await);
        tracing::debug!("[ProfileForm] Mounted with {:?} fields filled", draft.completion());

        Self {
            ctx: FormContext {
                state: Arc::new(Mutex::new(FormState::new(draft))),
                store,
                gateway,
                settings,
                shutdown: CancellationToken::new(),
            },
        }
    }

    /// Applies an edit to `field`.
    ///
    /// Returns `false` when the live filter rejects the value; the draft and
    /// errors are then left as they were. An accepted edit clears the
    /// field's error entry.
    pub async fn on_field_change(&self, field: ProfileField, value: &str) -> bool {
        let mut state = self.ctx.state.lock().await;

        if !state.draft.apply_edit(field, value) {
            tracing::debug!("[ProfileForm] Rejected input for {}", field);
            return false;
        }

        if state.field_errors.clear_field(field) {
            tracing::debug!("[ProfileForm] Cleared error for {}", field);
        }
        true
    }

    pub async fn on_focus(&self, field: ProfileField) {
        self.ctx.state.lock().await.focused = Some(field);
    }

    pub async fn on_blur(&self) {
        self.ctx.state.lock().await.focused = None;
    }

    /// Validates the draft and, if it passes, commits it to the store.
    ///
    /// Ignored while another submission is in flight. The commit runs on its
    /// own task: the state lock is not held meanwhile, and dropping the
    /// returned future does not abandon the commit, so the form always
    /// returns to `Idle`.
    pub async fn on_submit(&self) -> SubmitOutcome {
        let profile = {
            let mut state = self.ctx.state.lock().await;

            if self.ctx.shutdown.is_cancelled() {
                return SubmitOutcome::Cancelled;
            }
            if state.is_submitting() {
                tracing::debug!("[ProfileForm] Submit ignored, {:?} in progress", state.phase);
                return SubmitOutcome::Ignored;
            }

            state.phase = SubmissionPhase::Validating;
            let errors = validate_profile(state.draft.profile());

            if !errors.is_empty() {
                let field_errors: FieldErrors = errors.into_iter().collect();
                tracing::info!(
                    "[ProfileForm] Submission rejected with {} field error(s)",
                    field_errors.len()
                );
                state.field_errors = field_errors.clone();
                state.phase = SubmissionPhase::Idle;
                self.ctx
                    .show_notification(&mut state, Notification::error(SUBMIT_REJECTED_MESSAGE));
                return SubmitOutcome::Rejected(field_errors);
            }

            state.phase = SubmissionPhase::Committing;
            state.draft.profile().clone()
        };

        let ctx = self.ctx.clone();
        let task = tokio::spawn(async move { ctx.commit_and_settle(profile).await });

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("[ProfileForm] Commit task failed: {}", e);
                let mut state = self.ctx.state.lock().await;
                state.phase = SubmissionPhase::Idle;
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }

    /// Hides the visible notification, if any, and cancels its timer.
    pub async fn dismiss_notification(&self) -> bool {
        self.ctx.state.lock().await.notification.dismiss()
    }

    pub async fn snapshot(&self) -> FormSnapshot {
        self.ctx.state.lock().await.snapshot()
    }

    pub async fn draft(&self) -> Profile {
        self.ctx.state.lock().await.draft.profile().clone()
    }

    pub async fn field_errors(&self) -> FieldErrors {
        self.ctx.state.lock().await.field_errors.clone()
    }

    pub async fn notification(&self) -> Option<Notification> {
        self.ctx.state.lock().await.notification.current().cloned()
    }

    pub async fn focused(&self) -> Option<ProfileField> {
        self.ctx.state.lock().await.focused
    }

    pub async fn is_submitting(&self) -> bool {
        self.ctx.state.lock().await.is_submitting()
    }

    pub fn settings(&self) -> &FormSettings {
        &self.ctx.settings
    }

    /// Cancels the notification timer and any in-flight commit.
    ///
    /// After teardown no timer or commit touches the form state again.
    pub async fn teardown(&self) {
        self.ctx.shutdown.cancel();
        self.ctx.state.lock().await.notification.cancel_timer();
        tracing::debug!("[ProfileForm] Torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.ctx.shutdown.is_cancelled()
    }
}

impl FormContext {
    /// Runs the commit and applies its result to the form state.
    async fn commit_and_settle(&self, profile: Profile) -> SubmitOutcome {
        let result = self.commit(&profile).await;

        let mut state = self.state.lock().await;
        if self.shutdown.is_cancelled() {
            tracing::debug!("[ProfileForm] Commit abandoned on teardown");
            return SubmitOutcome::Cancelled;
        }

        match result {
            Ok(()) => {
                tracing::info!("[ProfileForm] Profile committed");
                state.draft = Draft::empty();
                state.field_errors.clear();
                state.phase = SubmissionPhase::Idle;
                self.show_notification(&mut state, Notification::success(SUBMIT_SUCCESS_MESSAGE));
                SubmitOutcome::Committed(profile)
            }
            Err(ProfileError::Cancelled) => SubmitOutcome::Cancelled,
            Err(e) => {
                tracing::warn!("[ProfileForm] Commit failed: {}", e);
                state.phase = SubmissionPhase::Idle;
                let message = e.to_string();
                self.show_notification(&mut state, Notification::error(message.clone()));
                SubmitOutcome::Failed(message)
            }
        }
    }

    async fn commit(&self, profile: &Profile) -> Result<()> {
        self.store.apply(ProfileUpdate::from(profile.clone())).await?;

        tokio::select! {
            _ = self.shutdown.cancelled() => Err(ProfileError::Cancelled),
            result = self.gateway.persist(profile) => result,
        }
    }

    fn show_notification(&self, state: &mut FormState, notification: Notification) {
        if self.shutdown.is_cancelled() {
            return;
        }

        let ticket = state.notification.show(notification);
        let timeout = self.settings.notification_timeout();
        let weak_state = Arc::downgrade(&self.state);
        let shutdown = self.shutdown.child_token();

        let timer = tokio::spawn(async move {
            tokio::select! {
                _ = shutdown.cancelled() => {}
                _ = tokio::time::sleep(timeout) => {
                    if let Some(state) = weak_state.upgrade() {
                        if state.lock().await.notification.expire(ticket) {
                            tracing::debug!("[ProfileForm] Notification dismissed after {:?}", timeout);
                        }
                    }
                }
            }
        });
        state.notification.attach_timer(timer);
    }
}

impl Drop for ProfileFormController {
    fn drop(&mut self) {
        self.ctx.shutdown.cancel();
    }
}
