use crate::{CoreError, Role};

use std::str::FromStr;

use proptest::prelude::*;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Student.as_str(), "student");
    assert_eq!(Role::Institution.as_str(), "institution");
    assert_eq!(Role::Company.as_str(), "company");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("student").unwrap(), Role::Student);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert!(matches!(
        Role::from_str("Admin"),
        Err(CoreError::InvalidRole { .. })
    ));
}

#[test]
fn test_role_dashboard_paths_are_distinct() {
    let mut paths: Vec<_> = Role::ALL.iter().map(Role::dashboard_path).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), Role::ALL.len());
}

#[test]
fn test_role_serde_uses_snake_case() {
    assert_eq!(
        serde_json::to_string(&Role::Institution).unwrap(),
        "\"institution\""
    );
    let role: Role = serde_json::from_str("\"company\"").unwrap();
    assert_eq!(role, Role::Company);
}

proptest! {
    #[test]
    fn given_known_role_when_parsed_then_round_trips(role in prop::sample::select(Role::ALL.to_vec())) {
        prop_assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
        let prefix = format!("/{}", role.as_str());
        prop_assert!(role.dashboard_path().starts_with(&prefix));
        prop_assert!(role.login_path().ends_with(role.as_str()));
    }

    #[test]
    fn given_random_word_when_parsed_then_rejected_unless_known(word in "[a-z]{3,12}") {
        let known = Role::ALL.iter().any(|r| r.as_str() == word);
        prop_assert_eq!(Role::from_str(&word).is_ok(), known);
    }
}
