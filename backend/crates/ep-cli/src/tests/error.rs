use crate::CliError;

use ep_core::Role;
use ep_session::SessionError;

use googletest::assert_that;
use googletest::prelude::*;

#[test]
fn given_session_error_then_user_message_is_portal_wording() {
    let err = CliError::from(SessionError::wrong_role_portal(Role::Admin, Role::Company));

    assert_that!(err.user_message(), contains_substring("Company login portal"));
}

#[test]
fn given_logger_error_then_message_includes_cause() {
    let err = CliError::logger("Failed to open log file /nope");

    assert_that!(err.user_message(), contains_substring("/nope"));
}
