//! Seams between the session resolver and the services it talks to.

pub mod document_store;
pub mod identity_provider;
pub mod profile_backend;
