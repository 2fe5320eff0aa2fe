use crate::SessionResult;

use ep_core::{IdToken, Identity};

use async_trait::async_trait;
use tokio::sync::watch;

/// Email/password identity provider.
///
/// Implementations hold at most one signed-in identity and publish every
/// change of it (sign-in, sign-up, sign-out) on the channel returned by
/// [`IdentityProvider::subscribe`].
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> SessionResult<Identity>;

    /// Creates the credential and signs the new identity in.
    async fn sign_up(&self, email: &str, password: &str) -> SessionResult<Identity>;

    async fn sign_out(&self) -> SessionResult<()>;

    /// Sends a verification link to the signed-in identity's email.
    async fn send_email_verification(&self) -> SessionResult<()>;

    async fn send_password_reset(&self, email: &str) -> SessionResult<()>;

    /// Current ID token; `force_refresh` always mints a new one.
    async fn id_token(&self, force_refresh: bool) -> SessionResult<IdToken>;

    fn current_identity(&self) -> Option<Identity>;

    fn subscribe(&self) -> watch::Receiver<Option<Identity>>;
}
