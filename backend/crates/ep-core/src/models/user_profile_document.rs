use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire and storage shape of a user profile.
///
/// Used for backend JSON payloads and `users/{uid}` documents. `profile` stays
/// untyped here; [`crate::UserProfile`] decodes it against `role`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDocument {
    pub uid: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub profile: Value,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Set on fallback copies written by the client instead of the backend.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub client_only: bool,
}
