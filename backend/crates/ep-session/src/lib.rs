//! Session resolution for the education portal: identity provider, profile
//! backend and document store behind async ports, with concrete HTTP
//! adapters for each.

pub mod adapters;
pub mod auth_phase;
pub mod error;
pub mod identity_error_code;
pub mod ports;
pub mod resolver;
pub mod session;

#[cfg(test)]
mod tests;

pub use adapters::backend_client::BackendClient;
pub use adapters::firebase_auth::FirebaseAuthClient;
pub use adapters::firestore_client::FirestoreClient;
pub use auth_phase::AuthPhase;
pub use error::{Result as SessionResult, SessionError};
pub use identity_error_code::IdentityErrorCode;
pub use ports::document_store::{DocumentStore, INSTITUTIONS_COLLECTION, USERS_COLLECTION};
pub use ports::identity_provider::IdentityProvider;
pub use ports::profile_backend::ProfileBackend;
pub use resolver::SessionResolver;
pub use session::{Session, SessionHandle};
