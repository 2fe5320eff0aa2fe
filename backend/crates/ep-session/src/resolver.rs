//! Session resolution: who is signed in, which role they have, and where
//! their profile comes from.
//!
//! The backend is the preferred source of profiles but is allowed to be
//! down. Every profile read falls back once to the document store, and every
//! registration writes a client-side copy there as well.

use crate::{
    DocumentStore, IdentityProvider, ProfileBackend, SessionError, SessionHandle, SessionResult,
};

use ep_core::{
    IdToken, Identity, Institution, RegistrationReceipt, RegistrationRequest, Role, UserProfile,
};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, error, info, warn};
use tokio::task::JoinHandle;

const REGISTRATION_SUCCESS_MESSAGE: &str =
    "Registration successful! Please check your email to verify your account before logging in.";

pub struct SessionResolver {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn DocumentStore>,
    backend: Arc<dyn ProfileBackend>,
    session: SessionHandle,
    registering: AtomicBool,
}

/// Holds the "registration in progress" flag for as long as it lives.
pub(crate) struct RegistrationGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> RegistrationGuard<'a> {
    fn engage(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag }
    }
}

impl Drop for RegistrationGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

impl SessionResolver {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn DocumentStore>,
        backend: Arc<dyn ProfileBackend>,
    ) -> Self {
        Self {
            identity,
            store,
            backend,
            session: SessionHandle::new(),
            registering: AtomicBool::new(false),
        }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub fn is_registering(&self) -> bool {
        self.registering.load(Ordering::SeqCst)
    }

    pub(crate) fn registration_guard(&self) -> RegistrationGuard<'_> {
        RegistrationGuard::engage(&self.registering)
    }

    /// Health-checks the backend and records the result. Never fails.
    pub async fn probe_backend(&self) -> bool {
        let reachable = match self.backend.health().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Backend health check failed, using document store fallback: {e}");
                false
            }
        };

        self.session.set_backend_reachable(reachable);
        reachable
    }

    /// Finds the profile for a verified identity: backend first (if it is
    /// believed reachable), then the document store.
    pub async fn resolve_profile(
        &self,
        identity: &Identity,
        token: &IdToken,
    ) -> SessionResult<UserProfile> {
        if self.session.is_backend_reachable() {
            match self.backend.login(token).await {
                Ok(profile) => {
                    debug!("Profile for {} resolved from backend", identity.uid);
                    return Ok(profile);
                }
                Err(e) => {
                    warn!("Backend login failed for {}, falling back: {e}", identity.uid);
                    if e.is_unreachable() {
                        self.session.set_backend_reachable(false);
                    }
                }
            }
        }

        match self.store.get_user_profile(&identity.uid, Some(token)).await? {
            Some(doc) => {
                debug!(
                    "Profile for {} resolved from document store (client_only={})",
                    identity.uid, doc.client_only
                );
                Ok(UserProfile::try_from(doc)?)
            }
            None => Err(SessionError::profile_not_found(&identity.uid)),
        }
    }

    /// Signs in through a role-specific portal.
    ///
    /// Terminal failures (absent profile, wrong portal, unverified email)
    /// sign the identity out again before returning.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        expected_role: Option<Role>,
    ) -> SessionResult<UserProfile> {
        self.session.begin_authentication();

        match self.authenticate(email, password, expected_role).await {
            Ok(profile) => {
                info!("{} signed in as {}", profile.uid, profile.role());
                self.session.authenticated(profile.clone());
                Ok(profile)
            }
            Err(e) => {
                warn!("Login failed: {e}");
                self.session.fail(e.user_message());
                Err(e)
            }
        }
    }

    /// Any failure after a successful sign-in leaves the identity signed out.
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
        expected_role: Option<Role>,
    ) -> SessionResult<UserProfile> {
        let identity = self.identity.sign_in(email, password).await?;

        match self.admit(&identity, expected_role).await {
            Ok(profile) => Ok(profile),
            Err(e) => {
                self.force_sign_out().await;
                Err(e)
            }
        }
    }

    async fn admit(&self, identity: &Identity, expected_role: Option<Role>) -> SessionResult<UserProfile> {
        let token = self.identity.id_token(true).await?;
        let profile = self.resolve_profile(identity, &token).await?;

        if let Some(expected) = expected_role
            && profile.role() != expected
        {
            return Err(SessionError::wrong_role_portal(expected, profile.role()));
        }

        if !identity.email_verified {
            return Err(SessionError::email_not_verified(&identity.email));
        }

        Ok(profile)
    }

    /// Creates an account. The new user ends up signed out with a
    /// verification email on the way; nothing is set as current user.
    pub async fn register(&self, request: RegistrationRequest) -> SessionResult<RegistrationReceipt> {
        let _guard = self.registration_guard();

        match self.create_account(&request).await {
            Ok(receipt) => {
                info!(
                    "Registered {} as {} (backend={}, fallback={})",
                    receipt.uid,
                    receipt.role,
                    receipt.backend_profile_created,
                    receipt.fallback_profile_written
                );
                self.session
                    .clear_with_message(REGISTRATION_SUCCESS_MESSAGE.to_string());
                Ok(receipt)
            }
            Err(e) => {
                warn!("Registration failed for {}: {e}", request.email);
                self.session.set_message(e.user_message());
                Err(e)
            }
        }
    }

    async fn create_account(&self, request: &RegistrationRequest) -> SessionResult<RegistrationReceipt> {
        request.validate()?;

        let identity = self.identity.sign_up(&request.email, &request.password).await?;
        let outcome = self.provision(&identity, request).await;

        // The credential stays behind even when provisioning failed.
        if let Err(e) = self.identity.sign_out().await {
            warn!("Sign-out after registration failed: {e}");
        }

        outcome
    }

    async fn provision(
        &self,
        identity: &Identity,
        request: &RegistrationRequest,
    ) -> SessionResult<RegistrationReceipt> {
        self.identity.send_email_verification().await?;
        let token = self.identity.id_token(false).await?;

        if let Some(institution_id) = request.profile.institution_id() {
            self.claim_institution(institution_id, identity, &token).await?;
        }

        let profile = UserProfile::new(
            identity.uid.clone(),
            identity.email.clone(),
            request.profile.clone(),
            false,
        );

        let backend_profile_created = if self.session.is_backend_reachable() {
            match self.backend.create_profile(&token, &profile).await {
                Ok(()) => true,
                Err(e) => {
                    warn!("Backend profile creation failed for {}: {e}", identity.uid);
                    if e.is_unreachable() {
                        self.session.set_backend_reachable(false);
                    }
                    false
                }
            }
        } else {
            debug!("Backend unreachable, skipping backend profile for {}", identity.uid);
            false
        };

        let doc = profile.to_document(true)?;
        let fallback_profile_written = match self.store.put_user_profile(&doc, Some(&token)).await {
            Ok(()) => true,
            Err(e) if backend_profile_created => {
                warn!("Fallback profile write failed for {}: {e}", identity.uid);
                false
            }
            Err(e) => {
                error!("No profile stored for {}: {e}", identity.uid);
                return Err(SessionError::profile_write_failed(e.to_string()));
            }
        };

        Ok(RegistrationReceipt {
            uid: identity.uid.clone(),
            email: identity.email.clone(),
            role: request.role(),
            email_sent: true,
            backend_profile_created,
            fallback_profile_written,
        })
    }

    /// Last writer wins: an already-claimed institution is re-claimed.
    async fn claim_institution(
        &self,
        institution_id: &str,
        identity: &Identity,
        token: &IdToken,
    ) -> SessionResult<()> {
        let institution = self
            .store
            .get_institution(institution_id, Some(token))
            .await?
            .ok_or_else(|| SessionError::institution_not_found(institution_id))?;

        if let Some(previous) = &institution.admin_uid {
            warn!(
                "Institution {} already claimed by {previous}, overwriting with {}",
                institution.id, identity.uid
            );
        }

        self.store
            .claim_institution(institution_id, &identity.uid, &identity.email, Some(token))
            .await
    }

    /// Always leaves the session cleared, even if the provider errors.
    pub async fn logout(&self) {
        if let Err(e) = self.identity.sign_out().await {
            warn!("Sign-out failed, clearing session anyway: {e}");
        }
        self.session.clear();
    }

    pub async fn send_password_reset(&self, email: &str) -> SessionResult<()> {
        match self.identity.send_password_reset(email).await {
            Ok(()) => {
                self.session.set_message(format!("Password reset email sent to {email}."));
                Ok(())
            }
            Err(e) => {
                self.session.set_message(e.user_message());
                Err(e)
            }
        }
    }

    /// Institutions for the registration dropdown: unclaimed first, then by
    /// name.
    pub async fn list_institutions(&self) -> SessionResult<Vec<Institution>> {
        let mut institutions = self.store.list_institutions(None).await?;
        institutions.sort_by(|a, b| {
            a.is_claimed()
                .cmp(&b.is_claimed())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(institutions)
    }

    /// Reacts to the identity provider's sign-in state.
    pub async fn handle_auth_state_change(&self, identity: Option<Identity>) {
        if self.is_registering() {
            debug!("Ignoring auth state change during registration");
            return;
        }

        let Some(identity) = identity else {
            self.session.signed_out();
            return;
        };

        if !identity.email_verified {
            debug!("Identity {} is not verified, no current user", identity.uid);
            self.session.signed_out();
            return;
        }

        self.session.restoring();

        let resolved = match self.identity.id_token(false).await {
            Ok(token) => self.resolve_profile(&identity, &token).await,
            Err(e) => Err(e),
        };

        let still_current = self
            .identity
            .current_identity()
            .is_some_and(|current| current.uid == identity.uid);
        if !still_current {
            debug!("Identity {} changed while resolving, dropping result", identity.uid);
            return;
        }

        match resolved {
            Ok(profile) => self.session.authenticated(profile),
            Err(e) => {
                warn!("Could not restore session for {}: {e}", identity.uid);
                if matches!(e, SessionError::ProfileNotFound { .. }) {
                    self.force_sign_out().await;
                }
                self.session.fail(e.user_message());
            }
        }
    }

    /// Feeds identity changes into [`Self::handle_auth_state_change`] until
    /// the identity provider goes away.
    pub fn spawn_auth_listener(self: &Arc<Self>) -> JoinHandle<()> {
        let resolver = Arc::clone(self);
        let mut rx = resolver.identity.subscribe();

        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let identity = rx.borrow_and_update().clone();
                resolver.handle_auth_state_change(identity).await;
            }
            debug!("Auth listener stopped");
        })
    }

    async fn force_sign_out(&self) {
        if let Err(e) = self.identity.sign_out().await {
            warn!("Forced sign-out failed: {e}");
        }
    }
}
