//! REST API collaborator used at the end of onboarding.

pub mod client;
pub mod types;

pub use client::{DEFAULT_REJECTION_MESSAGE, HttpSchoolsApi, SchoolsApi};
pub use types::{AdminCredentials, CreateSchoolResponse, SchoolCreated, SchoolPayload};
