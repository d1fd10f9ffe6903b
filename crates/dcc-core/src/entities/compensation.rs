use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pay and benefits (`company_compensation`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyCompensation {
    pub id: String,
    pub company_id: String,
    pub salary_range_min: Option<i64>,
    pub salary_range_max: Option<i64>,
    pub bonus_structure: Option<String>,
    pub equity_options: Option<bool>,
    pub pay_frequency: Option<String>,
    pub benefits: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}
