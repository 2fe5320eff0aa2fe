use crate::{
    CoreError, InstitutionProfile, RegistrationRequest, Role, RoleProfile, StudentProfile,
};

fn student_request(email: &str, password: &str) -> RegistrationRequest {
    RegistrationRequest::new(
        email,
        password,
        RoleProfile::from(StudentProfile::new("Ada", "Lovelace")),
    )
}

#[test]
fn given_valid_request_when_validated_then_ok() {
    assert!(student_request("a@x.com", "secret1").validate().is_ok());
}

#[test]
fn given_short_password_when_validated_then_password_error() {
    let result = student_request("a@x.com", "12345").validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation {
            field: "password",
            ..
        })
    ));
}

#[test]
fn given_email_without_at_when_validated_then_email_error() {
    let result = student_request("not-an-email", "secret1").validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: "email", .. })
    ));
}

#[test]
fn given_institution_without_id_when_validated_then_error() {
    let request = RegistrationRequest::new(
        "reg@uni.test",
        "secret1",
        RoleProfile::from(InstitutionProfile {
            institution_id: String::new(),
            institution_name: "Uni".to_string(),
            contact_person: "Registrar".to_string(),
            phone: None,
        }),
    );

    assert_eq!(request.role(), Role::Institution);
    assert!(matches!(
        request.validate(),
        Err(CoreError::Validation {
            field: "institutionId",
            ..
        })
    ));
}

#[test]
fn given_request_when_debug_printed_then_password_redacted() {
    let printed = format!("{:?}", student_request("a@x.com", "secret1"));

    assert!(!printed.contains("secret1"));
    assert!(printed.contains("<redacted>"));
}
