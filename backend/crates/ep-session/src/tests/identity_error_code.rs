use crate::{IdentityErrorCode, SessionError};

use googletest::assert_that;
use googletest::prelude::*;

#[test]
fn given_rest_codes_when_parsed_then_known_variants() {
    let cases = [
        ("EMAIL_EXISTS", IdentityErrorCode::EmailExists),
        ("EMAIL_NOT_FOUND", IdentityErrorCode::EmailNotFound),
        ("USER_NOT_FOUND", IdentityErrorCode::EmailNotFound),
        ("INVALID_PASSWORD", IdentityErrorCode::InvalidPassword),
        ("INVALID_LOGIN_CREDENTIALS", IdentityErrorCode::InvalidCredentials),
        ("USER_DISABLED", IdentityErrorCode::UserDisabled),
        ("TOO_MANY_ATTEMPTS_TRY_LATER", IdentityErrorCode::TooManyAttempts),
        ("INVALID_EMAIL", IdentityErrorCode::InvalidEmail),
        ("OPERATION_NOT_ALLOWED", IdentityErrorCode::OperationNotAllowed),
        ("TOKEN_EXPIRED", IdentityErrorCode::TokenExpired),
        ("INVALID_ID_TOKEN", IdentityErrorCode::InvalidIdToken),
        ("CREDENTIAL_TOO_OLD_LOGIN_AGAIN", IdentityErrorCode::CredentialTooOld),
        ("MISSING_PASSWORD", IdentityErrorCode::MissingPassword),
    ];

    for (raw, expected) in cases {
        assert_that!(IdentityErrorCode::parse(raw), eq(expected));
    }
}

#[test]
fn given_code_with_detail_when_parsed_then_detail_ignored() {
    let code =
        IdentityErrorCode::parse("WEAK_PASSWORD : Password should be at least 6 characters");

    assert_that!(code, eq(IdentityErrorCode::WeakPassword));
}

#[test]
fn given_sdk_style_code_when_parsed_then_same_variant() {
    assert_that!(
        IdentityErrorCode::parse("auth/email-already-in-use"),
        eq(IdentityErrorCode::EmailExists)
    );
    assert_that!(
        IdentityErrorCode::parse("auth/network-request-failed"),
        eq(IdentityErrorCode::NetworkRequestFailed)
    );
}

#[test]
fn given_unrecognised_code_when_parsed_then_unknown_with_generic_message() {
    let code = IdentityErrorCode::parse("SOMETHING_NEW");

    assert_that!(code, eq(IdentityErrorCode::Unknown));
    assert_that!(code.user_message(), not(eq("")));
}

#[test]
fn given_identity_provider_error_then_user_message_follows_code() {
    let err = SessionError::identity_provider("EMAIL_EXISTS");

    assert_that!(
        err.user_message(),
        contains_substring("already registered")
    );
    assert_that!(err.is_transient(), eq(false));
}

#[test]
fn given_rate_limit_error_then_transient() {
    let err = SessionError::identity_provider("TOO_MANY_ATTEMPTS_TRY_LATER");

    assert_that!(err.is_transient(), eq(true));
}
