use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Work environment and values (`company_culture`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyCulture {
    pub id: String,
    pub company_id: String,
    pub work_environment: Option<String>,
    pub remote_policy: Option<String>,
    pub dress_code: Option<String>,
    pub work_life_balance: Option<String>,
    pub core_values: Option<Vec<String>>,
    pub team_activities: Option<Vec<String>>,
    pub diversity_initiatives: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}
