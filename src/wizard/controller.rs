//! OnboardingWizard — owns the wizard state and performs the final submission.

use std::sync::Arc;
use std::time::Duration;

use crate::api::{SchoolCreated, SchoolPayload, SchoolsApi};
use crate::credentials;
use crate::error::{SubmissionError, ValidationError};
use crate::session::SessionContext;

use super::state::{Action, WizardState, reduce};
use super::step::{WizardPhase, WizardStep};
use super::validate::validate_step;

/// What the caller needs after a successful submission.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub created: SchoolCreated,
    /// Delay before the front-end navigates back to the school list.
    pub redirect_after: Duration,
}

/// Drives one onboarding session.
///
/// Every method takes `&mut self`, so nothing else can touch the wizard while
/// a submission is awaiting the API.
pub struct OnboardingWizard {
    state: WizardState,
    api: Arc<dyn SchoolsApi>,
    session: Arc<dyn SessionContext>,
    redirect_delay: Duration,
}

impl OnboardingWizard {
    pub fn new(
        api: Arc<dyn SchoolsApi>,
        session: Arc<dyn SessionContext>,
        redirect_delay: Duration,
    ) -> Self {
        Self {
            state: WizardState::new(),
            api,
            session,
            redirect_delay,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Apply an action and log any phase change.
    pub fn dispatch(&mut self, action: Action) -> &WizardState {
        let before = self.state.phase;
        let is_next = action == Action::Next;

        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);

        if before != self.state.phase {
            tracing::info!(from = %before, to = %self.state.phase, "Wizard transition");
        } else if is_next {
            if let Some(error) = self.state.error() {
                tracing::warn!(step = %before, error, "Step validation failed");
            }
        }
        &self.state
    }

    /// Try to advance; returns the step now shown or the blocking error.
    ///
    /// Ignored once submission has started, which only happens from `Review`.
    pub fn next(&mut self) -> Result<WizardStep, ValidationError> {
        let Some(step) = self.state.step() else {
            return Ok(WizardStep::Review);
        };
        let verdict = validate_step(step, &self.state.form);
        self.dispatch(Action::Next);
        verdict.map(|()| step.next())
    }

    pub fn previous(&mut self) {
        self.dispatch(Action::Previous);
    }

    /// Generate a fresh admin password and put it in both password fields.
    pub fn generate_password(&mut self) -> &str {
        let password = credentials::generate();
        self.dispatch(Action::ApplyGeneratedPassword(password));
        &self.state.form.admin_password
    }

    /// Submit the aggregate payload from the review step.
    ///
    /// Earlier steps are not re-validated. On failure the wizard returns to
    /// the review step with the error message and may be submitted again.
    pub async fn submit(&mut self) -> Result<SubmissionOutcome, SubmissionError> {
        if self.state.phase != WizardPhase::Editing(WizardStep::Review) {
            return Err(SubmissionError::NotReady {
                phase: self.state.phase,
            });
        }

        self.dispatch(Action::SubmitStarted);

        let result = match self.session.bearer_token() {
            Some(token) => {
                let payload = SchoolPayload::from_form(&self.state.form, self.session.group_id());
                tracing::info!(
                    school_code = %payload.school_code,
                    group_id = ?payload.group_id,
                    "Submitting new school"
                );
                self.api.create_school(token, &payload).await
            }
            None => Err(SubmissionError::MissingToken),
        };

        match result {
            Ok(created) => {
                self.dispatch(Action::SubmitSucceeded(created.clone()));
                Ok(SubmissionOutcome {
                    created,
                    redirect_after: self.redirect_delay,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "School submission failed");
                self.dispatch(Action::SubmitFailed(e.to_string()));
                Err(e)
            }
        }
    }
}
