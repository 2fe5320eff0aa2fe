use serde::Serialize;

/// Where the current page load is in the authentication flow.
///
/// ```text
/// Unauthenticated -> Authenticating -> Authenticated
///                                   -> AuthenticationFailed -> Unauthenticated
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthPhase {
    #[default]
    Unauthenticated,
    Authenticating,
    Authenticated,
    AuthenticationFailed,
}

impl AuthPhase {
    /// Nominal transitions. Logins are never cancelled, so a late response
    /// from a superseded attempt can still land outside this table; the
    /// session applies it anyway and only logs it.
    pub fn can_transition_to(self, next: AuthPhase) -> bool {
        use AuthPhase::*;

        match (self, next) {
            (_, Unauthenticated) => true,
            (_, Authenticating) => true,
            (Authenticating, Authenticated) | (Authenticating, AuthenticationFailed) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticating => "authenticating",
            Self::Authenticated => "authenticated",
            Self::AuthenticationFailed => "authentication_failed",
        }
    }
}

impl std::fmt::Display for AuthPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
