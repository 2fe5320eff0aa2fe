use crate::{CoreError, CoreResult, MIN_PASSWORD_LENGTH, Role, RoleProfile};

use std::fmt;

/// Everything needed to create an account in one of the portals.
#[derive(Clone)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    pub profile: RoleProfile,
}

impl RegistrationRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>, profile: RoleProfile) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            profile,
        }
    }

    pub fn role(&self) -> Role {
        self.profile.role()
    }

    /// Form-level checks, run before anything touches the network.
    pub fn validate(&self) -> CoreResult<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(CoreError::validation("email", "is required"));
        }
        if !email.contains('@') {
            return Err(CoreError::validation("email", "must be a valid email address"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::validation(
                "password",
                format!("must be at least {MIN_PASSWORD_LENGTH} characters"),
            ));
        }
        self.profile.validate()
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("profile", &self.profile)
            .finish()
    }
}
