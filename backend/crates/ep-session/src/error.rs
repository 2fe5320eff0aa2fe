use crate::IdentityErrorCode;

use ep_config::ConfigError;
use ep_core::{CoreError, Role};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Everything that can end a session operation.
///
/// Callers never see these as panics: the resolver turns each one into a
/// single user-facing message via [`SessionError::user_message`].
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Backend unreachable: {message} {location}")]
    BackendUnreachable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Backend returned {status}: {message} (code: {code}) {location}")]
    Backend {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("No profile found for user {uid} {location}")]
    ProfileNotFound { uid: String, location: ErrorLocation },

    #[error("Account is registered as {actual}, not {expected} {location}")]
    WrongRolePortal {
        expected: Role,
        actual: Role,
        location: ErrorLocation,
    },

    #[error("Email {email} is not verified {location}")]
    EmailNotVerified {
        email: String,
        location: ErrorLocation,
    },

    #[error("Identity provider error: {raw} {location}")]
    IdentityProvider {
        code: IdentityErrorCode,
        raw: String,
        location: ErrorLocation,
    },

    #[error("No user is signed in with the identity provider {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Institution {institution_id} does not exist {location}")]
    InstitutionNotFound {
        institution_id: String,
        location: ErrorLocation,
    },

    #[error("Document store error: {message} {location}")]
    DocumentStore {
        message: String,
        location: ErrorLocation,
    },

    #[error("Profile could not be written anywhere: {message} {location}")]
    ProfileWriteFailed {
        message: String,
        location: ErrorLocation,
    },

    #[error("{source} {location}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("{source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("HTTP error: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Backend could not be contacted at all (connect failure or timeout).
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::BackendUnreachable { .. })
    }

    /// Whether repeating the same action later could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::BackendUnreachable { .. } | Self::Http { .. } | Self::DocumentStore { .. } => true,
            Self::Backend { status, .. } => *status >= 500,
            Self::IdentityProvider { code, .. } => matches!(
                code,
                IdentityErrorCode::TooManyAttempts | IdentityErrorCode::NetworkRequestFailed
            ),
            _ => false,
        }
    }

    /// Message for the session's user-visible message field.
    pub fn user_message(&self) -> String {
        match self {
            Self::BackendUnreachable { .. } | Self::Backend { .. } => {
                "The server is currently unavailable. Please try again later.".to_string()
            }
            Self::ProfileNotFound { .. } => {
                "User profile not found. Please register again or contact support.".to_string()
            }
            Self::WrongRolePortal { actual, .. } => format!(
                "This account is registered as {}. Please use the {} login portal.",
                actual.portal_name(),
                actual.portal_name()
            ),
            Self::EmailNotVerified { .. } => {
                "Please verify your email before logging in. Check your inbox for the verification link."
                    .to_string()
            }
            Self::IdentityProvider { code, .. } => code.user_message().to_string(),
            Self::NotSignedIn { .. } => "Please log in to continue.".to_string(),
            Self::InstitutionNotFound { .. } => {
                "The selected institution does not exist. Please choose another one.".to_string()
            }
            Self::DocumentStore { .. } | Self::ProfileWriteFailed { .. } => {
                "Unable to save or load your profile. Please try again.".to_string()
            }
            Self::Core {
                source: CoreError::Validation { field, message, .. },
                ..
            } => format!("{field} {message}."),
            Self::Core { .. } => "Your profile data is invalid. Please contact support.".to_string(),
            Self::Config { .. } => "The portal is not configured correctly.".to_string(),
            Self::Http { .. } | Self::Json { .. } => {
                "Network error. Please check your connection and try again.".to_string()
            }
        }
    }

    /// Portal the user should be sent to after a wrong-portal login.
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            Self::WrongRolePortal { actual, .. } => Some(actual.login_path()),
            _ => None,
        }
    }

    #[track_caller]
    pub fn backend_unreachable(message: impl Into<String>) -> Self {
        Self::BackendUnreachable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_not_found(uid: impl Into<String>) -> Self {
        Self::ProfileNotFound {
            uid: uid.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn wrong_role_portal(expected: Role, actual: Role) -> Self {
        Self::WrongRolePortal {
            expected,
            actual,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn email_not_verified(email: impl Into<String>) -> Self {
        Self::EmailNotVerified {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn identity_provider(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self::IdentityProvider {
            code: IdentityErrorCode::parse(&raw),
            raw,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        Self::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn institution_not_found(institution_id: impl Into<String>) -> Self {
        Self::InstitutionNotFound {
            institution_id: institution_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn document_store(message: impl Into<String>) -> Self {
        Self::DocumentStore {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_write_failed(message: impl Into<String>) -> Self {
        Self::ProfileWriteFailed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for SessionError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for SessionError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for SessionError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for SessionError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
