use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Offices, travel, and sponsorship (`company_logistics`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyLogistics {
    pub id: String,
    pub company_id: String,
    pub office_locations: Option<Vec<String>>,
    pub relocation_support: Option<bool>,
    pub visa_sponsorship: Option<bool>,
    pub travel_requirements: Option<String>,
    pub work_hours: Option<String>,
    pub timezone: Option<String>,
    pub created_at: DateTime<Utc>,
}
