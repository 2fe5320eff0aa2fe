use crate::SessionResult;

use ep_core::{IdToken, Institution, UserProfileDocument};

use async_trait::async_trait;

pub const USERS_COLLECTION: &str = "users";
pub const INSTITUTIONS_COLLECTION: &str = "institutions";

/// Remote document database holding `users` and `institutions`.
///
/// `token` authenticates the caller where the store's rules require it;
/// `None` performs an anonymous read.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// `users/{uid}`, or `None` when absent.
    async fn get_user_profile(
        &self,
        uid: &str,
        token: Option<&IdToken>,
    ) -> SessionResult<Option<UserProfileDocument>>;

    /// Creates or replaces `users/{doc.uid}`.
    async fn put_user_profile(
        &self,
        doc: &UserProfileDocument,
        token: Option<&IdToken>,
    ) -> SessionResult<()>;

    async fn list_institutions(&self, token: Option<&IdToken>) -> SessionResult<Vec<Institution>>;

    async fn get_institution(
        &self,
        institution_id: &str,
        token: Option<&IdToken>,
    ) -> SessionResult<Option<Institution>>;

    /// Records `admin_uid` as the institution's admin. Unconditional: a
    /// concurrent claim is overwritten.
    async fn claim_institution(
        &self,
        institution_id: &str,
        admin_uid: &str,
        admin_email: &str,
        token: Option<&IdToken>,
    ) -> SessionResult<()>;
}
