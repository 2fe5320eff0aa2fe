//! HTTP implementations of the ports.

pub mod backend_client;
pub mod firebase_auth;
pub mod firestore_client;
pub mod firestore_value;
