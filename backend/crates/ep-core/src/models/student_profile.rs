use crate::CoreResult;
use crate::models::required::non_empty;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_school: Option<String>,
}

impl StudentProfile {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: None,
            date_of_birth: None,
            high_school: None,
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        non_empty("firstName", &self.first_name)?;
        non_empty("lastName", &self.last_name)
    }
}
