mod registration_request;
mod role;
mod role_profile;
mod user_profile;
