use crate::{CoreError, CoreResult, Role, RoleProfile, UserProfileDocument};

use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Application-level user record, one per identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "UserProfileDocument")]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
    pub profile: RoleProfile,
    pub email_verified: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn new(
        uid: impl Into<String>,
        email: impl Into<String>,
        profile: RoleProfile,
        email_verified: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            uid: uid.into(),
            email: email.into(),
            profile,
            email_verified,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    pub fn role(&self) -> Role {
        self.profile.role()
    }

    /// Convert to the stored document shape.
    pub fn to_document(&self, client_only: bool) -> CoreResult<UserProfileDocument> {
        Ok(UserProfileDocument {
            uid: self.uid.clone(),
            email: self.email.clone(),
            role: self.role(),
            profile: self.profile.to_value()?,
            email_verified: self.email_verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
            client_only,
        })
    }
}

impl TryFrom<UserProfileDocument> for UserProfile {
    type Error = CoreError;

    fn try_from(doc: UserProfileDocument) -> CoreResult<Self> {
        let profile = RoleProfile::from_value(doc.role, doc.profile)?;
        Ok(Self {
            uid: doc.uid,
            email: doc.email,
            profile,
            email_verified: doc.email_verified,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}

impl Serialize for UserProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("UserProfile", 7)?;
        state.serialize_field("uid", &self.uid)?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("role", &self.role())?;
        state.serialize_field("profile", &self.profile)?;
        state.serialize_field("emailVerified", &self.email_verified)?;
        state.serialize_field("createdAt", &self.created_at)?;
        state.serialize_field("updatedAt", &self.updated_at)?;
        state.end()
    }
}
