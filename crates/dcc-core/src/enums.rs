//! Profile tabs, satellite kinds, and categorical filter fields.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and round-trip through `as_str()` / `FromStr`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

fn expected_list<T: Copy>(all: &[T], as_str: fn(T) -> &'static str) -> String {
    all.iter().map(|v| as_str(*v)).collect::<Vec<_>>().join(", ")
}

// ---------------------------------------------------------------------------
// Satellite
// ---------------------------------------------------------------------------

/// One of the nine optional 1:1 extension records of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Satellite {
    Business,
    Technology,
    People,
    Culture,
    TalentGrowth,
    Compensation,
    Logistics,
    Financials,
    BrandReputation,
}

impl Satellite {
    pub const ALL: [Self; 9] = [
        Self::Business,
        Self::Technology,
        Self::People,
        Self::Culture,
        Self::TalentGrowth,
        Self::Compensation,
        Self::Logistics,
        Self::Financials,
        Self::BrandReputation,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Technology => "technology",
            Self::People => "people",
            Self::Culture => "culture",
            Self::TalentGrowth => "talent_growth",
            Self::Compensation => "compensation",
            Self::Logistics => "logistics",
            Self::Financials => "financials",
            Self::BrandReputation => "brand_reputation",
        }
    }

    /// Empty-state text shown when the company has no row for this satellite.
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::Business => "No business data available",
            Self::Technology => "No technology data available",
            Self::People => "No people data available",
            Self::Culture => "No culture data available",
            Self::TalentGrowth => "No talent growth data available",
            Self::Compensation => "No compensation data available",
            Self::Logistics => "No logistics data available",
            Self::Financials => "No financial data available",
            Self::BrandReputation => "No brand reputation data available",
        }
    }

    /// Section heading used when a tab shows more than one satellite.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Business => "Business",
            Self::Technology => "Technology",
            Self::People => "People",
            Self::Culture => "Culture",
            Self::TalentGrowth => "Talent & Growth",
            Self::Compensation => "Compensation",
            Self::Logistics => "Logistics",
            Self::Financials => "Financials",
            Self::BrandReputation => "Brand Reputation",
        }
    }
}

impl fmt::Display for Satellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProfileTab
// ---------------------------------------------------------------------------

/// Tabs of the company profile page.
///
/// ```text
/// overview │ business │ technology │ people │ culture │ growth │ compensation │ financials
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProfileTab {
    #[default]
    Overview,
    Business,
    Technology,
    People,
    Culture,
    Growth,
    Compensation,
    Financials,
}

impl ProfileTab {
    pub const ALL: [Self; 8] = [
        Self::Overview,
        Self::Business,
        Self::Technology,
        Self::People,
        Self::Culture,
        Self::Growth,
        Self::Compensation,
        Self::Financials,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Business => "business",
            Self::Technology => "technology",
            Self::People => "people",
            Self::Culture => "culture",
            Self::Growth => "growth",
            Self::Compensation => "compensation",
            Self::Financials => "financials",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Business => "Business & Strategy",
            Self::Technology => "Technology",
            Self::People => "People & Leadership",
            Self::Culture => "Culture",
            Self::Growth => "Talent & Growth",
            Self::Compensation => "Compensation & Logistics",
            Self::Financials => "Financials & Brand",
        }
    }

    /// Satellites whose data this tab displays. Overview reads only the company row.
    #[must_use]
    pub const fn satellites(self) -> &'static [Satellite] {
        match self {
            Self::Overview => &[],
            Self::Business => &[Satellite::Business],
            Self::Technology => &[Satellite::Technology],
            Self::People => &[Satellite::People],
            Self::Culture => &[Satellite::Culture],
            Self::Growth => &[Satellite::TalentGrowth],
            Self::Compensation => &[Satellite::Compensation, Satellite::Logistics],
            Self::Financials => &[Satellite::Financials, Satellite::BrandReputation],
        }
    }
}

impl fmt::Display for ProfileTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileTab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "tab",
                value: s.to_string(),
                expected: expected_list(&Self::ALL, Self::as_str),
            })
    }
}

// ---------------------------------------------------------------------------
// FilterField
// ---------------------------------------------------------------------------

/// Categorical fields of the company list that carry single-select filter chips.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    CompanyType,
    Category,
    EmployeeSize,
}

impl FilterField {
    pub const ALL: [Self; 3] = [Self::CompanyType, Self::Category, Self::EmployeeSize];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompanyType => "company_type",
            Self::Category => "category",
            Self::EmployeeSize => "employee_size",
        }
    }

    /// Chip row label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CompanyType => "Type",
            Self::Category => "Category",
            Self::EmployeeSize => "Size",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = CoreError;

    /// Accepts the column name or the short chip keyword (`type`, `size`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company_type" | "type" => Ok(Self::CompanyType),
            "category" => Ok(Self::Category),
            "employee_size" | "size" => Ok(Self::EmployeeSize),
            other => Err(CoreError::UnknownVariant {
                kind: "filter field",
                value: other.to_string(),
                expected: expected_list(&Self::ALL, Self::as_str),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn profile_tab_roundtrips_through_str() {
        for tab in ProfileTab::ALL {
            assert_eq!(tab.as_str().parse::<ProfileTab>().unwrap(), tab);
            let json = serde_json::to_string(&tab).unwrap();
            assert_eq!(json, format!("\"{}\"", tab.as_str()));
        }
    }

    #[test]
    fn unknown_tab_lists_expected_values() {
        let err = "salary".parse::<ProfileTab>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Unknown tab 'salary'"));
        assert!(msg.contains("overview"));
        assert!(msg.contains("financials"));
    }

    #[test]
    fn every_satellite_is_shown_by_exactly_one_tab() {
        for satellite in Satellite::ALL {
            let owners = ProfileTab::ALL
                .into_iter()
                .filter(|tab| tab.satellites().contains(&satellite))
                .count();
            assert_eq!(owners, 1, "{satellite} should belong to one tab");
        }
    }

    #[test]
    fn filter_field_accepts_short_keywords() {
        assert_eq!("type".parse::<FilterField>().unwrap(), FilterField::CompanyType);
        assert_eq!("size".parse::<FilterField>().unwrap(), FilterField::EmployeeSize);
        assert_eq!("category".parse::<FilterField>().unwrap(), FilterField::Category);
        assert!("region".parse::<FilterField>().is_err());
    }

    #[test]
    fn financials_empty_message() {
        assert_eq!(
            Satellite::Financials.empty_message(),
            "No financial data available"
        );
    }
}
