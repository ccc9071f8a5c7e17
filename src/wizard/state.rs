//! Wizard state and its transition function.
//!
//! All user interaction is expressed as an [`Action`] applied through
//! [`reduce`]. The reducer is pure: the only I/O (the create-school request)
//! lives in the controller, which feeds `SubmitStarted` / `SubmitSucceeded` /
//! `SubmitFailed` back in.

use crate::api::SchoolCreated;
use crate::credentials::{self, PasswordStrength};

use super::form::{Field, FileRef, MultiField, SchoolForm};
use super::step::{WizardPhase, WizardStep};
use super::validate::validate_step;

/// Derived presentation state. Never submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransientUi {
    /// The single message shown above the form.
    pub error: Option<String>,
    pub password_visible: bool,
    /// Set after the generated password was copied; the front-end clears it.
    pub copy_acknowledged: bool,
    pub strength: PasswordStrength,
}

/// Full wizard state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub phase: WizardPhase,
    pub form: SchoolForm,
    pub ui: TransientUi,
    /// Present once the school was created.
    pub created: Option<SchoolCreated>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step, or `None` while submitting or after success.
    pub fn step(&self) -> Option<WizardStep> {
        self.phase.step()
    }

    pub fn error(&self) -> Option<&str> {
        self.ui.error.as_deref()
    }
}

/// Something the user (or the submit round-trip) did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetField(Field, String),
    ToggleOption(MultiField, String),
    AttachLogo(Option<FileRef>),
    /// Fill both password fields with a freshly generated password.
    ApplyGeneratedPassword(String),
    TogglePasswordVisibility,
    CopyAcknowledged,
    CopyAckExpired,
    Next,
    Previous,
    /// "Edit" link on the review step.
    JumpToStep(WizardStep),
    SubmitStarted,
    SubmitSucceeded(SchoolCreated),
    SubmitFailed(String),
}

/// Apply one action.
pub fn reduce(mut state: WizardState, action: Action) -> WizardState {
    match state.phase {
        WizardPhase::Editing(step) => {
            apply_editing(&mut state, step, action);
        }
        WizardPhase::Submitting => match action {
            Action::SubmitSucceeded(created) => {
                state.phase = WizardPhase::Succeeded;
                state.created = Some(created);
            }
            Action::SubmitFailed(message) => {
                state.phase = WizardPhase::Editing(WizardStep::Review);
                state.ui.error = Some(message);
            }
            // Controls are disabled while the request is in flight.
            _ => {}
        },
        WizardPhase::Succeeded => {}
    }
    state
}

fn apply_editing(state: &mut WizardState, step: WizardStep, action: Action) {
    match action {
        Action::SetField(field, value) => {
            if field == Field::PrimaryContactEmail {
                // The admin login follows the contact email until edited separately.
                let admin = &state.form.admin_email;
                if admin.is_empty() || *admin == state.form.primary_contact_email {
                    state.form.admin_email = value.clone();
                }
            }
            state.form.set(field, value);
            state.ui.error = None;
            refresh_strength(state);
        }
        Action::ToggleOption(field, value) => {
            state.form.toggle(field, &value);
        }
        Action::AttachLogo(logo) => {
            state.form.logo = logo;
        }
        Action::ApplyGeneratedPassword(password) => {
            state.form.confirm_password = password.clone();
            state.form.admin_password = password;
            refresh_strength(state);
        }
        Action::TogglePasswordVisibility => {
            state.ui.password_visible = !state.ui.password_visible;
        }
        Action::CopyAcknowledged => state.ui.copy_acknowledged = true,
        Action::CopyAckExpired => state.ui.copy_acknowledged = false,
        Action::Next => match validate_step(step, &state.form) {
            Ok(()) => {
                state.phase = WizardPhase::Editing(step.next());
                state.ui.error = None;
            }
            Err(e) => {
                state.ui.error = Some(e.to_string());
            }
        },
        Action::Previous => {
            state.phase = WizardPhase::Editing(step.previous());
            state.ui.error = None;
        }
        Action::JumpToStep(target) => {
            if step == WizardStep::Review {
                state.phase = WizardPhase::Editing(target);
            }
        }
        Action::SubmitStarted => {
            if step == WizardStep::Review {
                state.phase = WizardPhase::Submitting;
                state.ui.error = None;
            }
        }
        Action::SubmitSucceeded(_) | Action::SubmitFailed(_) => {}
    }
}

fn refresh_strength(state: &mut WizardState) {
    state.ui.strength = credentials::score(&state.form.admin_password);
}
