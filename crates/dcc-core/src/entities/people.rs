use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Leadership and headcount (`company_people`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyPeople {
    pub id: String,
    pub company_id: String,
    pub ceo_name: Option<String>,
    pub leadership_team: Option<Vec<String>>,
    pub employee_count: Option<i64>,
    pub hiring_rate: Option<String>,
    pub attrition_rate: Option<String>,
    pub average_tenure: Option<String>,
    pub created_at: DateTime<Utc>,
}
