use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Training, mentorship, and career progression (`company_talent_growth`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyTalentGrowth {
    pub id: String,
    pub company_id: String,
    pub training_programs: Option<Vec<String>>,
    pub mentorship_available: Option<bool>,
    pub promotion_frequency: Option<String>,
    pub learning_budget: Option<String>,
    pub career_paths: Option<Vec<String>>,
    pub certification_support: Option<bool>,
    pub created_at: DateTime<Utc>,
}
