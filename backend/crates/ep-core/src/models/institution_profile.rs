use crate::CoreResult;
use crate::models::required::non_empty;

use serde::{Deserialize, Serialize};

/// Attributes of an institution administrator.
///
/// `institution_id` references a document in the `institutions` collection
/// that the registering user claims as its admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionProfile {
    pub institution_id: String,
    pub institution_name: String,
    pub contact_person: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl InstitutionProfile {
    pub fn validate(&self) -> CoreResult<()> {
        non_empty("institutionId", &self.institution_id)?;
        non_empty("institutionName", &self.institution_name)?;
        non_empty("contactPerson", &self.contact_person)
    }
}
