use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Identity Provider
// =========================================================================

#[test]
#[serial]
fn given_blank_api_key_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _key = EnvGuard::set("EP_IDENTITY_API_KEY", "   ");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_missing_api_key_when_required_then_error() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.identity.require_api_key(), err(anything()));
}

#[test]
#[serial]
fn given_api_key_when_required_then_returned() {
    // Given
    let _temp = setup_config_dir();
    let _key = EnvGuard::set("EP_IDENTITY_API_KEY", "abc123");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.identity.require_api_key(), ok(eq(&"abc123")));
}

#[test]
#[serial]
fn given_relative_token_url_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("EP_IDENTITY_TOKEN_URL", "securetoken.googleapis.com");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
