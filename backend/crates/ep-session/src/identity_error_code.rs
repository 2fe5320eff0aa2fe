//! Identity-provider error codes and the messages shown for them.
//!
//! The REST API reports codes such as `EMAIL_EXISTS` or
//! `WEAK_PASSWORD : Password should be at least 6 characters`; client SDKs
//! report `auth/email-already-in-use`. Both spellings are recognised.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityErrorCode {
    EmailExists,
    EmailNotFound,
    InvalidPassword,
    InvalidCredentials,
    UserDisabled,
    TooManyAttempts,
    WeakPassword,
    InvalidEmail,
    OperationNotAllowed,
    TokenExpired,
    InvalidIdToken,
    CredentialTooOld,
    MissingPassword,
    NetworkRequestFailed,
    Unknown,
}

impl IdentityErrorCode {
    pub fn parse(raw: &str) -> Self {
        let code = raw.split(':').next().unwrap_or_default().trim();

        match code {
            "EMAIL_EXISTS" | "auth/email-already-in-use" => Self::EmailExists,
            "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" | "auth/user-not-found" => Self::EmailNotFound,
            "INVALID_PASSWORD" | "auth/wrong-password" => Self::InvalidPassword,
            "INVALID_LOGIN_CREDENTIALS" | "auth/invalid-credential" => Self::InvalidCredentials,
            "USER_DISABLED" | "auth/user-disabled" => Self::UserDisabled,
            "TOO_MANY_ATTEMPTS_TRY_LATER" | "auth/too-many-requests" => Self::TooManyAttempts,
            "WEAK_PASSWORD" | "auth/weak-password" => Self::WeakPassword,
            "INVALID_EMAIL" | "auth/invalid-email" => Self::InvalidEmail,
            "OPERATION_NOT_ALLOWED" | "auth/operation-not-allowed" => Self::OperationNotAllowed,
            "TOKEN_EXPIRED" | "auth/user-token-expired" => Self::TokenExpired,
            "INVALID_ID_TOKEN" | "INVALID_REFRESH_TOKEN" | "auth/invalid-user-token" => {
                Self::InvalidIdToken
            }
            "CREDENTIAL_TOO_OLD_LOGIN_AGAIN" | "auth/requires-recent-login" => {
                Self::CredentialTooOld
            }
            "MISSING_PASSWORD" | "auth/missing-password" => Self::MissingPassword,
            "auth/network-request-failed" => Self::NetworkRequestFailed,
            _ => Self::Unknown,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmailExists => "This email is already registered. Please log in instead.",
            Self::EmailNotFound => "No account found with this email.",
            Self::InvalidPassword => "Incorrect password. Please try again.",
            Self::InvalidCredentials => "Invalid email or password.",
            Self::UserDisabled => "This account has been disabled. Please contact support.",
            Self::TooManyAttempts => "Too many failed attempts. Please try again later.",
            Self::WeakPassword => "Password should be at least 6 characters.",
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::OperationNotAllowed => "Email/password sign-in is not enabled.",
            Self::TokenExpired | Self::InvalidIdToken | Self::CredentialTooOld => {
                "Your session has expired. Please log in again."
            }
            Self::MissingPassword => "Please enter your password.",
            Self::NetworkRequestFailed => "Network error. Please check your connection.",
            Self::Unknown => "Authentication failed. Please try again.",
        }
    }
}
