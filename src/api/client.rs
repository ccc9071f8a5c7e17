//! Schools API client.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::config::ClientConfig;
use crate::error::SubmissionError;

use super::types::{CreateSchoolResponse, SchoolCreated, SchoolPayload};

/// Message shown when the API rejects a school without saying why.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Failed to create school";

/// The backend collaborator that creates schools.
#[async_trait]
pub trait SchoolsApi: Send + Sync {
    /// Create a school from the aggregate payload.
    async fn create_school(
        &self,
        token: &SecretString,
        payload: &SchoolPayload,
    ) -> Result<SchoolCreated, SubmissionError>;
}

/// `SchoolsApi` over HTTP via reqwest.
pub struct HttpSchoolsApi {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSchoolsApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            endpoint: config.schools_endpoint(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SchoolsApi for HttpSchoolsApi {
    async fn create_school(
        &self,
        token: &SecretString,
        payload: &SchoolPayload,
    ) -> Result<SchoolCreated, SubmissionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token.expose_secret())
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        // The API reports failures in the JSON envelope, whatever the status.
        let parsed: CreateSchoolResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) if status.is_success() => {
                return Err(SubmissionError::InvalidResponse(e.to_string()));
            }
            Err(_) => {
                return Err(SubmissionError::Transport(format!(
                    "Schools API returned {status}"
                )));
            }
        };

        if !parsed.success {
            let message = parsed
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
            tracing::warn!(status = %status, message = %message, "School creation rejected");
            return Err(SubmissionError::Rejected { message });
        }

        Ok(SchoolCreated {
            admin_credentials: parsed.data.and_then(|d| d.admin_credentials),
            created_at: chrono::Utc::now(),
        })
    }
}
