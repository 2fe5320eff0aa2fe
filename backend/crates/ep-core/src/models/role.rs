use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Portal a user belongs to. Fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Institution,
    Company,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Self::Student, Self::Institution, Self::Company, Self::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Institution => "institution",
            Self::Company => "company",
            Self::Admin => "admin",
        }
    }

    /// Human-readable portal name used in user-facing messages.
    pub fn portal_name(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Institution => "Institution",
            Self::Company => "Company",
            Self::Admin => "Admin",
        }
    }

    /// Landing page after a successful login.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Self::Student => "/student/dashboard",
            Self::Institution => "/institution/dashboard",
            Self::Company => "/company/dashboard",
            Self::Admin => "/admin/dashboard",
        }
    }

    /// Login page of this role's portal.
    pub fn login_path(&self) -> &'static str {
        match self {
            Self::Student => "/login/student",
            Self::Institution => "/login/institution",
            Self::Company => "/login/company",
            Self::Admin => "/login/admin",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "student" => Ok(Self::Student),
            "institution" => Ok(Self::Institution),
            "company" => Ok(Self::Company),
            "admin" => Ok(Self::Admin),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
