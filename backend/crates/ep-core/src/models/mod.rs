pub mod admin_profile;
pub mod company_profile;
pub mod id_token;
pub mod identity;
pub mod institution;
pub mod institution_profile;
pub mod registration_receipt;
pub mod registration_request;
pub mod role;
pub mod role_profile;
pub mod student_profile;
pub mod user_profile;
pub mod user_profile_document;

pub(crate) mod required;
