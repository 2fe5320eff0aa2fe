use crate::SessionResult;

use ep_core::{IdToken, UserProfile};

use async_trait::async_trait;

/// Primary REST backend. Treated as optional: every failure is survivable.
#[async_trait]
pub trait ProfileBackend: Send + Sync {
    /// `GET /api/health`, bounded by the configured health timeout.
    async fn health(&self) -> SessionResult<()>;

    /// `POST /api/auth/login`: exchange a verified ID token for a profile.
    async fn login(&self, token: &IdToken) -> SessionResult<UserProfile>;

    /// `POST /api/auth/create-profile`.
    async fn create_profile(&self, token: &IdToken, profile: &UserProfile) -> SessionResult<()>;
}
