use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Engineering stack and practices (`company_technologies`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyTechnology {
    pub id: String,
    pub company_id: String,
    pub tech_stack: Option<Vec<String>>,
    pub development_methodology: Option<String>,
    pub cloud_providers: Option<Vec<String>>,
    pub engineering_practices: Option<Vec<String>>,
    pub innovation_focus: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}
