use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Revenue, funding, and listing status (`company_financials`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyFinancials {
    pub id: String,
    pub company_id: String,
    pub annual_revenue: Option<String>,
    pub funding_stage: Option<String>,
    pub total_funding: Option<String>,
    pub profitability_status: Option<String>,
    pub public_or_private: Option<String>,
    pub stock_symbol: Option<String>,
    pub fiscal_year_end: Option<String>,
    pub created_at: DateTime<Utc>,
}
