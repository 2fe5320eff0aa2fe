use crate::CoreResult;
use crate::models::required::non_empty;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub company_name: String,
    pub contact_person: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl CompanyProfile {
    pub fn validate(&self) -> CoreResult<()> {
        non_empty("companyName", &self.company_name)?;
        non_empty("contactPerson", &self.contact_person)
    }
}
