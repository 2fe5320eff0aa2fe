use crate::CoreResult;
use crate::models::required::non_empty;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub full_name: String,
}

impl AdminProfile {
    pub fn validate(&self) -> CoreResult<()> {
        non_empty("fullName", &self.full_name)
    }
}
