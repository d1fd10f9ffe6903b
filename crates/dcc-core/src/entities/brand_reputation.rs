use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Public and employer brand signals (`company_brand_reputation`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyBrandReputation {
    pub id: String,
    pub company_id: String,
    pub brand_recognition: Option<String>,
    pub employer_brand_rating: Option<String>,
    pub social_media_presence: Option<String>,
    pub industry_awards: Option<Vec<String>>,
    pub media_mentions: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}
