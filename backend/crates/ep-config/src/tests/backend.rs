use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Backend
// =========================================================================

#[test]
#[serial]
fn given_non_http_backend_url_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("EP_BACKEND_URL", "ftp://backend");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("backend.base_url"));
}

#[test]
#[serial]
fn given_health_timeout_below_min_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("EP_BACKEND_HEALTH_TIMEOUT_MS", "99");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_health_timeout_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("EP_BACKEND_HEALTH_TIMEOUT_MS", "30001");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_request_timeout_zero_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("EP_BACKEND_REQUEST_TIMEOUT_SECS", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_boundary_timeouts_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _health = EnvGuard::set("EP_BACKEND_HEALTH_TIMEOUT_MS", "100");
    let _request = EnvGuard::set("EP_BACKEND_REQUEST_TIMEOUT_SECS", "120");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
    assert_that!(config.backend.health_timeout(), eq(Duration::from_millis(100)));
    assert_that!(config.backend.request_timeout(), eq(Duration::from_secs(120)));
}
