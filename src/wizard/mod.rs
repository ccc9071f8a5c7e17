//! School onboarding wizard.
//!
//! Seven steps (Basic Details → Address → Contact → Admin Credentials →
//! Academic Setup → Finance → Review) collect one aggregate [`SchoolForm`].
//! Moving forward is gated by each step's validation rule; moving back is
//! always allowed. From the review step the form is submitted once to the
//! schools API.

pub mod catalog;
pub mod controller;
pub mod form;
pub mod review;
pub mod state;
pub mod step;
pub mod validate;

pub use controller::{OnboardingWizard, SubmissionOutcome};
pub use form::{Field, FileRef, MultiField, SchoolForm};
pub use review::{ReviewRow, ReviewSection, review_sections};
pub use state::{Action, TransientUi, WizardState, reduce};
pub use step::{WizardPhase, WizardStep};
pub use validate::validate_step;
