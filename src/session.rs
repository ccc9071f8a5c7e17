//! Session context — the signed-in group admin's token and group.
//!
//! The portal persists the session as two local-storage entries:
//! `groupAdmin_token` (the bearer token) and `groupAdmin_info` (a JSON string
//! describing the admin and their school group). The wizard only needs the
//! token and group id, so it depends on the [`SessionContext`] trait rather
//! than on the storage itself.

use std::collections::HashMap;
use std::path::Path;

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SessionError;

/// Local-storage keys written at login.
pub mod storage_keys {
    /// Bearer token issued by the auth endpoint.
    pub const TOKEN: &str = "groupAdmin_token";
    /// JSON-encoded [`GroupAdminInfo`](super::GroupAdminInfo).
    pub const INFO: &str = "groupAdmin_info";
}

/// Read access to the ambient session.
pub trait SessionContext: Send + Sync {
    /// Bearer token for API calls, if signed in.
    fn bearer_token(&self) -> Option<&SecretString>;

    /// Identifier of the school group the admin manages.
    fn group_id(&self) -> Option<&str>;
}

/// Cached details about the signed-in group admin.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupAdminInfo {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub group_id: Option<String>,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub subdomain: Option<String>,
    #[serde(default)]
    pub db_name: Option<String>,
}

/// Ids are issued as either numbers or strings depending on the backend store.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// In-memory session.
#[derive(Debug, Default)]
pub struct Session {
    token: Option<SecretString>,
    info: Option<GroupAdminInfo>,
}

impl Session {
    pub fn new(token: impl Into<String>, info: GroupAdminInfo) -> Self {
        Self {
            token: Some(SecretString::from(token.into())),
            info: Some(info),
        }
    }

    /// A session with nobody signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn info(&self) -> Option<&GroupAdminInfo> {
        self.info.as_ref()
    }

    /// Build a session from a local-storage snapshot (string keys to string values).
    pub fn from_storage(entries: &HashMap<String, String>) -> Result<Self, SessionError> {
        let token = entries
            .get(storage_keys::TOKEN)
            .filter(|t| !t.is_empty())
            .map(|t| SecretString::from(t.clone()));

        let info = match entries.get(storage_keys::INFO) {
            Some(raw) => Some(serde_json::from_str::<GroupAdminInfo>(raw)?),
            None => None,
        };

        Ok(Self { token, info })
    }

    /// Load a local-storage snapshot file. A missing file is an anonymous session.
    pub async fn load(path: &Path) -> Result<Self, SessionError> {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No session storage found");
                return Ok(Self::anonymous());
            }
            Err(e) => {
                return Err(SessionError::Io {
                    path: path.display().to_string(),
                    source: e,
                });
            }
        };

        let entries: HashMap<String, String> = serde_json::from_str(&raw)?;
        Self::from_storage(&entries)
    }
}

impl SessionContext for Session {
    fn bearer_token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    fn group_id(&self) -> Option<&str> {
        self.info.as_ref().and_then(|i| i.group_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    fn storage(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn from_storage_reads_token_and_group() {
        let entries = storage(&[
            (storage_keys::TOKEN, "tok-123"),
            (
                storage_keys::INFO,
                r#"{"id":"a1","name":"Priya","groupId":"grp-9","groupName":"Sunrise Group"}"#,
            ),
        ]);
        let session = Session::from_storage(&entries).unwrap();
        assert_eq!(session.bearer_token().unwrap().expose_secret(), "tok-123");
        assert_eq!(session.group_id(), Some("grp-9"));
        assert_eq!(
            session.info().unwrap().group_name.as_deref(),
            Some("Sunrise Group")
        );
    }

    #[test]
    fn numeric_group_id_is_accepted() {
        let entries = storage(&[(storage_keys::INFO, r#"{"id":7,"groupId":42}"#)]);
        let session = Session::from_storage(&entries).unwrap();
        assert_eq!(session.group_id(), Some("42"));
        assert_eq!(session.info().unwrap().id.as_deref(), Some("7"));
    }

    #[test]
    fn missing_info_means_no_group() {
        let entries = storage(&[(storage_keys::TOKEN, "tok")]);
        let session = Session::from_storage(&entries).unwrap();
        assert!(session.bearer_token().is_some());
        assert_eq!(session.group_id(), None);
    }

    #[test]
    fn empty_token_is_treated_as_signed_out() {
        let entries = storage(&[(storage_keys::TOKEN, "")]);
        let session = Session::from_storage(&entries).unwrap();
        assert!(session.bearer_token().is_none());
    }

    #[test]
    fn malformed_info_is_an_error() {
        let entries = storage(&[(storage_keys::INFO, "{not json")]);
        assert!(matches!(
            Session::from_storage(&entries),
            Err(SessionError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn load_missing_file_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::load(&dir.path().join("absent.json")).await.unwrap();
        assert!(session.bearer_token().is_none());
        assert!(session.group_id().is_none());
    }

    #[tokio::test]
    async fn load_reads_snapshot_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let snapshot = serde_json::json!({
            "groupAdmin_token": "abc",
            "groupAdmin_info": serde_json::json!({"groupId": "g-1"}).to_string(),
        });
        tokio::fs::write(&path, snapshot.to_string()).await.unwrap();

        let session = Session::load(&path).await.unwrap();
        assert_eq!(session.bearer_token().unwrap().expose_secret(), "abc");
        assert_eq!(session.group_id(), Some("g-1"));
    }
}
