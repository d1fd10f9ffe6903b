use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The primary company record. Every satellite hangs off `id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub company_type: Option<String>,
    pub category: Option<String>,
    pub employee_size: Option<String>,
    pub headquarters_address: Option<String>,
    pub founded_year: Option<i32>,
    pub operating_countries: Option<Vec<String>>,
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column subset fetched for the company list and its filters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanySummary {
    pub id: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub company_type: Option<String>,
    pub category: Option<String>,
    pub employee_size: Option<String>,
    pub headquarters_address: Option<String>,
    pub operating_countries: Option<Vec<String>>,
}

impl From<Company> for CompanySummary {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            logo_url: company.logo_url,
            company_type: company.company_type,
            category: company.category,
            employee_size: company.employee_size,
            headquarters_address: company.headquarters_address,
            operating_countries: company.operating_countries,
        }
    }
}

/// Column subset fetched for the "recently added" dashboard card.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecentCompany {
    pub id: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub company_type: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}
