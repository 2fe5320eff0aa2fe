use serde::{Deserialize, Serialize};

/// Entry of the `institutions` collection, as far as registration cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_email: Option<String>,
}

impl Institution {
    /// Whether some user already registered as this institution's admin.
    pub fn is_claimed(&self) -> bool {
        self.admin_uid.is_some()
    }
}
