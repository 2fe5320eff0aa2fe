use serde::{Deserialize, Serialize};

/// Principal authenticated by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Opaque subject id assigned by the provider
    pub uid: String,
    pub email: String,
    pub email_verified: bool,
}
