use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Business model and strategy (`company_business`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyBusiness {
    pub id: String,
    pub company_id: String,
    pub business_model: Option<String>,
    pub competitive_advantage: Option<String>,
    pub growth_strategy: Option<String>,
    pub revenue_streams: Option<Vec<String>>,
    pub target_markets: Option<Vec<String>>,
    pub strategic_partnerships: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}
