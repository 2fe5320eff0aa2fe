pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::admin_profile::AdminProfile;
pub use models::company_profile::CompanyProfile;
pub use models::id_token::IdToken;
pub use models::identity::Identity;
pub use models::institution::Institution;
pub use models::institution_profile::InstitutionProfile;
pub use models::registration_receipt::RegistrationReceipt;
pub use models::registration_request::RegistrationRequest;
pub use models::role::Role;
pub use models::role_profile::RoleProfile;
pub use models::student_profile::StudentProfile;
pub use models::user_profile::UserProfile;
pub use models::user_profile_document::UserProfileDocument;

/// Minimum password length accepted by the identity provider.
pub const MIN_PASSWORD_LENGTH: usize = 6;
