use crate::Role;

use serde::Serialize;

/// Outcome of a successful registration. The user is signed out afterwards
/// and must verify their email before the first login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationReceipt {
    pub uid: String,
    pub email: String,
    pub role: Role,
    pub email_sent: bool,
    pub backend_profile_created: bool,
    pub fallback_profile_written: bool,
}
