//! Error types for CampusGrid.

use crate::wizard::WizardPhase;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors reading the persisted session snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to read session storage {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed session storage: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A step's validation gate rejected the current fields.
///
/// The `Display` output is the single message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill all required fields")]
    MissingBasicDetails,

    #[error("Please fill all required address fields")]
    MissingAddress,

    #[error("Please fill all required contact fields")]
    MissingContact,

    #[error("Please provide admin email and password")]
    MissingAdminCredentials,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Password must contain uppercase, lowercase, number, and special character")]
    PasswordMissingClasses,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please fill all required academic fields")]
    MissingAcademic,

    #[error("Please fill all required finance fields")]
    MissingFinance,
}

/// Failure creating the school through the schools API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The API answered but reported `success: false`.
    #[error("{message}")]
    Rejected { message: String },

    #[error("{0}")]
    Transport(String),

    #[error("Invalid response from schools API: {0}")]
    InvalidResponse(String),

    #[error("Not signed in: no session token available")]
    MissingToken,

    #[error("Cannot submit while wizard is in {phase}")]
    NotReady { phase: WizardPhase },
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
