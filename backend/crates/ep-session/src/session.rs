//! Observable session state.
//!
//! One [`SessionHandle`] is owned by the resolver and cloned into whatever
//! needs to read or watch the session. Changes are published on a
//! `tokio::sync::watch` channel, so subscribers always see the latest state
//! (intermediate states may be coalesced).

use crate::AuthPhase;

use ep_core::{Role, UserProfile};

use std::sync::Arc;

use log::debug;
use serde::Serialize;
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Set only for a verified identity whose profile was resolved
    pub current_user: Option<UserProfile>,
    pub backend_reachable: bool,
    pub phase: AuthPhase,
    /// Last user-visible message (error or confirmation)
    pub message: Option<String>,
}

impl Session {
    pub fn role(&self) -> Option<Role> {
        self.current_user.as_ref().map(UserProfile::role)
    }

    /// Where a signed-in user should land; `None` when signed out.
    pub fn dashboard_path(&self) -> Option<&'static str> {
        self.role().map(|role| role.dashboard_path())
    }
}

#[derive(Debug, Clone)]
pub struct SessionHandle {
    sender: Arc<watch::Sender<Session>>,
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionHandle {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Session::default());
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.sender.subscribe()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.sender.borrow().current_user.clone()
    }

    pub fn is_backend_reachable(&self) -> bool {
        self.sender.borrow().backend_reachable
    }

    pub fn phase(&self) -> AuthPhase {
        self.sender.borrow().phase
    }

    pub(crate) fn set_backend_reachable(&self, reachable: bool) {
        self.sender.send_if_modified(|session| {
            if session.backend_reachable == reachable {
                return false;
            }
            debug!("Backend reachability: {} -> {}", session.backend_reachable, reachable);
            session.backend_reachable = reachable;
            true
        });
    }

    pub(crate) fn begin_authentication(&self) {
        self.sender.send_modify(|session| {
            Self::move_to(session, AuthPhase::Authenticating);
            session.message = None;
        });
    }

    pub(crate) fn authenticated(&self, profile: UserProfile) {
        self.sender.send_modify(|session| {
            Self::move_to(session, AuthPhase::Authenticated);
            session.current_user = Some(profile);
            session.message = None;
        });
    }

    /// Restoring a session picked up by the auth listener. Leaves any
    /// message from a concurrent login attempt in place.
    pub(crate) fn restoring(&self) {
        self.sender.send_modify(|session| Self::move_to(session, AuthPhase::Authenticating));
    }

    /// Publishes the failure, then drops back to `Unauthenticated`. The
    /// message stays until the next attempt starts.
    pub(crate) fn fail(&self, message: String) {
        self.sender.send_modify(|session| {
            Self::move_to(session, AuthPhase::AuthenticationFailed);
            session.current_user = None;
            session.message = Some(message);
        });
        self.sender.send_modify(|session| {
            Self::move_to(session, AuthPhase::Unauthenticated);
        });
    }

    /// Identity went away. The last message survives so a failed login can
    /// still explain why it signed the user out.
    pub(crate) fn signed_out(&self) {
        self.sender.send_if_modified(|session| {
            if session.phase == AuthPhase::Unauthenticated && session.current_user.is_none() {
                return false;
            }
            Self::move_to(session, AuthPhase::Unauthenticated);
            session.current_user = None;
            true
        });
    }

    /// Signed out: no user, no message.
    pub(crate) fn clear(&self) {
        self.sender.send_modify(|session| {
            Self::move_to(session, AuthPhase::Unauthenticated);
            session.current_user = None;
            session.message = None;
        });
    }

    /// Signed out with a message worth keeping (e.g. after registration).
    pub(crate) fn clear_with_message(&self, message: String) {
        self.sender.send_modify(|session| {
            Self::move_to(session, AuthPhase::Unauthenticated);
            session.current_user = None;
            session.message = Some(message);
        });
    }

    pub(crate) fn set_message(&self, message: String) {
        self.sender.send_modify(|session| session.message = Some(message));
    }

    fn move_to(session: &mut Session, next: AuthPhase) {
        if !session.phase.can_transition_to(next) {
            debug!(
                "Out-of-order session transition {} -> {} (late response)",
                session.phase, next
            );
        }
        session.phase = next;
    }
}
