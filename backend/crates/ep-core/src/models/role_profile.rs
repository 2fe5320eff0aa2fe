//! Role-shaped profile attributes.
//!
//! The stored `profile` bag has a different shape per role. Instead of an
//! untyped map, each role gets its own struct and the enum variant *is* the
//! role, so a profile can never disagree with its discriminant.

use crate::{
    AdminProfile, CompanyProfile, CoreError, CoreResult, InstitutionProfile, Role, StudentProfile,
};

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RoleProfile {
    Student(StudentProfile),
    Institution(InstitutionProfile),
    Company(CompanyProfile),
    Admin(AdminProfile),
}

impl RoleProfile {
    pub fn role(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Institution(_) => Role::Institution,
            Self::Company(_) => Role::Company,
            Self::Admin(_) => Role::Admin,
        }
    }

    /// Decode a stored attribute bag using `role` to pick the variant.
    #[track_caller]
    pub fn from_value(role: Role, value: Value) -> CoreResult<Self> {
        let decoded = match role {
            Role::Student => serde_json::from_value(value).map(Self::Student),
            Role::Institution => serde_json::from_value(value).map(Self::Institution),
            Role::Company => serde_json::from_value(value).map(Self::Company),
            Role::Admin => serde_json::from_value(value).map(Self::Admin),
        };

        decoded.map_err(|e| CoreError::invalid_profile(role.as_str(), e.to_string()))
    }

    /// Encode the attribute bag without the role discriminant.
    pub fn to_value(&self) -> CoreResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn validate(&self) -> CoreResult<()> {
        match self {
            Self::Student(p) => p.validate(),
            Self::Institution(p) => p.validate(),
            Self::Company(p) => p.validate(),
            Self::Admin(p) => p.validate(),
        }
    }

    /// Institution this profile administers, if any.
    pub fn institution_id(&self) -> Option<&str> {
        match self {
            Self::Institution(p) => Some(p.institution_id.as_str()),
            _ => None,
        }
    }
}

impl From<StudentProfile> for RoleProfile {
    fn from(profile: StudentProfile) -> Self {
        Self::Student(profile)
    }
}

impl From<InstitutionProfile> for RoleProfile {
    fn from(profile: InstitutionProfile) -> Self {
        Self::Institution(profile)
    }
}

impl From<CompanyProfile> for RoleProfile {
    fn from(profile: CompanyProfile) -> Self {
        Self::Company(profile)
    }
}

impl From<AdminProfile> for RoleProfile {
    fn from(profile: AdminProfile) -> Self {
        Self::Admin(profile)
    }
}
