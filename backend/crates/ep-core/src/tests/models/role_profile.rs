use crate::{
    AdminProfile, CompanyProfile, CoreError, InstitutionProfile, Role, RoleProfile,
    StudentProfile,
};

use serde_json::json;

#[test]
fn given_student_bag_when_decoded_as_student_then_student_variant() {
    let value = json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "dateOfBirth": "2005-03-14"
    });

    let profile = RoleProfile::from_value(Role::Student, value).unwrap();

    assert_eq!(profile.role(), Role::Student);
    match profile {
        RoleProfile::Student(p) => {
            assert_eq!(p.first_name, "Ada");
            assert_eq!(p.date_of_birth.unwrap().to_string(), "2005-03-14");
        }
        other => panic!("unexpected variant {other:?}"),
    }
}

#[test]
fn given_student_bag_when_decoded_as_company_then_invalid_profile() {
    let value = json!({ "firstName": "Ada", "lastName": "Lovelace" });

    let result = RoleProfile::from_value(Role::Company, value);

    assert!(matches!(result, Err(CoreError::InvalidProfile { role, .. }) if role == "company"));
}

#[test]
fn given_profile_when_encoded_then_no_role_tag_in_bag() {
    let profile = RoleProfile::from(AdminProfile {
        full_name: "Root Admin".to_string(),
    });

    let value = profile.to_value().unwrap();

    assert_eq!(value, json!({ "fullName": "Root Admin" }));
}

#[test]
fn given_optional_fields_absent_when_encoded_then_omitted() {
    let profile = RoleProfile::from(CompanyProfile {
        company_name: "Acme".to_string(),
        contact_person: "Wile".to_string(),
        industry: None,
        phone: None,
        address: None,
    });

    let value = profile.to_value().unwrap();

    assert_eq!(
        value,
        json!({ "companyName": "Acme", "contactPerson": "Wile" })
    );
}

#[test]
fn given_institution_profile_then_institution_id_exposed() {
    let profile = RoleProfile::from(InstitutionProfile {
        institution_id: "inst-1".to_string(),
        institution_name: "Limkokwing".to_string(),
        contact_person: "Registrar".to_string(),
        phone: None,
    });

    assert_eq!(profile.institution_id(), Some("inst-1"));
    assert_eq!(
        RoleProfile::from(StudentProfile::new("A", "B")).institution_id(),
        None
    );
}

#[test]
fn given_blank_required_attribute_when_validated_then_error_names_field() {
    let profile = RoleProfile::from(StudentProfile::new("Ada", "   "));

    let result = profile.validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation {
            field: "lastName",
            ..
        })
    ));
}
