use anyhow::bail;
use schemars::{Schema, schema_for};

use dcc_core::entities::{
    Company, CompanyBrandReputation, CompanyBusiness, CompanyCompensation, CompanyCulture,
    CompanyFinancials, CompanyLogistics, CompanyPeople, CompanySummary, CompanyTalentGrowth,
    CompanyTechnology, RecentCompany,
};
use dcc_core::responses::{
    AnalyticsResponse, CompanyListResponse, CompanyProfileResponse, DashboardResponse,
    EmptyState,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `dcc schema`.
pub const SCHEMA_TYPES: [&str; 17] = [
    "company",
    "company_summary",
    "recent_company",
    "business",
    "technology",
    "people",
    "culture",
    "talent_growth",
    "compensation",
    "logistics",
    "financials",
    "brand_reputation",
    "dashboard",
    "analytics",
    "company_list",
    "company_profile",
    "empty_state",
];

fn schema_of(type_name: &str) -> Option<Schema> {
    let schema = match type_name {
        "company" => schema_for!(Company),
        "company_summary" => schema_for!(CompanySummary),
        "recent_company" => schema_for!(RecentCompany),
        "business" => schema_for!(CompanyBusiness),
        "technology" => schema_for!(CompanyTechnology),
        "people" => schema_for!(CompanyPeople),
        "culture" => schema_for!(CompanyCulture),
        "talent_growth" => schema_for!(CompanyTalentGrowth),
        "compensation" => schema_for!(CompanyCompensation),
        "logistics" => schema_for!(CompanyLogistics),
        "financials" => schema_for!(CompanyFinancials),
        "brand_reputation" => schema_for!(CompanyBrandReputation),
        "dashboard" => schema_for!(DashboardResponse),
        "analytics" => schema_for!(AnalyticsResponse),
        "company_list" => schema_for!(CompanyListResponse),
        "company_profile" => schema_for!(CompanyProfileResponse),
        "empty_state" => schema_for!(EmptyState),
        _ => return None,
    };
    Some(schema)
}

/// Handle `dcc schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let type_name = args.type_name.replace('-', "_");
    let Some(schema) = schema_of(&type_name) else {
        bail!(
            "unknown schema type '{}' (expected one of: {})",
            args.type_name,
            SCHEMA_TYPES.join(", ")
        );
    };
    output(&schema.to_value(), flags.format)
}

#[cfg(test)]
mod tests {
    use super::{SCHEMA_TYPES, schema_of};

    #[test]
    fn every_listed_type_has_a_schema() {
        for name in SCHEMA_TYPES {
            let schema = schema_of(name).unwrap_or_else(|| panic!("no schema for {name}"));
            assert!(schema.to_value().is_object(), "{name}");
        }
    }

    #[test]
    fn company_schema_names_its_fields() {
        let value = schema_of("company").expect("company schema").to_value();
        let properties = value["properties"].as_object().expect("properties");
        assert!(properties.contains_key("company_type"));
        assert!(properties.contains_key("operating_countries"));
    }

    #[test]
    fn unknown_type_has_no_schema() {
        assert!(schema_of("session").is_none());
    }
}
