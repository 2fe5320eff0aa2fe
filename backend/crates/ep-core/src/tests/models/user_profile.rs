use crate::{CoreError, Role, RoleProfile, StudentProfile, UserProfile, UserProfileDocument};

use serde_json::json;

fn student() -> UserProfile {
    UserProfile::new(
        "uid-1",
        "a@x.com",
        RoleProfile::from(StudentProfile::new("Ada", "Lovelace")),
        true,
    )
}

#[test]
fn given_profile_then_role_follows_variant() {
    assert_eq!(student().role(), Role::Student);
}

#[test]
fn given_profile_when_converted_to_document_then_carries_marker() {
    let doc = student().to_document(true).unwrap();

    assert_eq!(doc.role, Role::Student);
    assert!(doc.client_only);
    assert_eq!(doc.profile["firstName"], "Ada");
}

#[test]
fn given_document_when_converted_then_profile_restored() {
    let original = student();
    let doc = original.to_document(false).unwrap();

    let restored = UserProfile::try_from(doc).unwrap();

    assert_eq!(restored, original);
}

#[test]
fn given_backend_json_when_deserialized_then_profile_decoded() {
    let body = json!({
        "uid": "uid-9",
        "email": "hr@acme.test",
        "role": "company",
        "profile": { "companyName": "Acme", "contactPerson": "Wile" },
        "emailVerified": true,
        "createdAt": "2024-01-01T00:00:00Z"
    });

    let profile: UserProfile = serde_json::from_value(body).unwrap();

    assert_eq!(profile.role(), Role::Company);
    assert!(profile.email_verified);
    assert!(profile.updated_at.is_none());
}

#[test]
fn given_mismatched_bag_when_converted_then_invalid_profile() {
    let doc = UserProfileDocument {
        uid: "uid-2".to_string(),
        email: "b@x.com".to_string(),
        role: Role::Admin,
        profile: json!({ "companyName": "Acme" }),
        email_verified: true,
        created_at: None,
        updated_at: None,
        client_only: false,
    };

    assert!(matches!(
        UserProfile::try_from(doc),
        Err(CoreError::InvalidProfile { .. })
    ));
}

#[test]
fn given_profile_when_serialized_then_role_included() {
    let value = serde_json::to_value(student()).unwrap();

    assert_eq!(value["role"], "student");
    assert_eq!(value["profile"]["lastName"], "Lovelace");
    assert_eq!(value["emailVerified"], true);
}

#[test]
fn given_server_document_when_serialized_then_client_only_omitted() {
    let doc = student().to_document(false).unwrap();

    let value = serde_json::to_value(doc).unwrap();

    assert!(value.get("clientOnly").is_none());
}
