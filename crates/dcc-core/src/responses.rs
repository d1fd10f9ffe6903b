//! Response types produced by `dcc-engine` and rendered by `dcc` commands.
//!
//! These structs define the JSON shape of `dcc dashboard`, `dcc analytics`,
//! `dcc companies list`, and `dcc companies show`.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::CompanySummary;
use crate::enums::{FilterField, ProfileTab};

/// Placeholder text for a data field with no value.
pub const NOT_AVAILABLE: &str = "Not available";

/// One `{key, count}` pair of a frequency table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Bucket {
    pub key: String,
    pub count: u64,
}

/// A bucket together with its share of the table total.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ShareBucket {
    pub key: String,
    pub count: u64,
    /// `count / total * 100`; `0.0` when the table total is zero.
    pub percentage: f64,
}

/// What a card, list, or tab shows when it has nothing to show.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EmptyState {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EmptyState {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
        }
    }
}

/// A headline number on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatCard {
    pub label: String,
    pub value: u64,
}

/// A titled frequency table, ready to render as bars or rows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DistributionCard {
    pub title: String,
    /// Sum of all bucket counts before any top-K truncation.
    pub total: u64,
    pub buckets: Vec<ShareBucket>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

/// One line of the "Recently Added Companies" card.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecentCompanyLine {
    pub id: String,
    pub name: String,
    pub logo_url: Option<String>,
    /// `"{type} · {category}"`, with `—` standing in for a missing value.
    pub subtitle: String,
}

/// Response from `dcc dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardResponse {
    pub stats: Vec<StatCard>,
    pub by_type: DistributionCard,
    pub by_category: DistributionCard,
    pub recent: Vec<RecentCompanyLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_empty_state: Option<EmptyState>,
}

/// Response from `dcc analytics`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnalyticsResponse {
    pub total_companies: u64,
    pub type_distribution: DistributionCard,
    pub tech_stack: DistributionCard,
    pub remote_policy: DistributionCard,
    pub work_environment: DistributionCard,
}

/// One selectable value of a filter chip row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FilterChip {
    pub value: String,
    pub selected: bool,
}

/// The chips offered for one categorical field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FilterChipRow {
    pub field: FilterField,
    pub label: String,
    pub chips: Vec<FilterChip>,
}

/// Response from `dcc companies list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyListResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub active_filters: BTreeMap<FilterField, String>,
    pub has_active_filters: bool,
    /// `"1 company"` or `"N companies"`.
    pub result_label: String,
    pub companies: Vec<CompanySummary>,
    pub filters: Vec<FilterChipRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

/// A rendered attribute value.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Missing,
    Text(String),
    List(Vec<String>),
    Flag(bool),
}

impl FieldValue {
    /// Build from an optional string; empty strings count as missing.
    #[must_use]
    pub fn text(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self::Text(v.to_string()),
            _ => Self::Missing,
        }
    }

    /// Build from an optional list; an empty list counts as missing.
    #[must_use]
    pub fn list(value: Option<&[String]>) -> Self {
        match value {
            Some(items) if !items.is_empty() => Self::List(items.to_vec()),
            _ => Self::Missing,
        }
    }

    #[must_use]
    pub const fn flag(value: Option<bool>) -> Self {
        match value {
            Some(v) => Self::Flag(v),
            None => Self::Missing,
        }
    }

    #[must_use]
    pub fn number<N: ToString>(value: Option<N>) -> Self {
        value.map_or(Self::Missing, |v| Self::Text(v.to_string()))
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str(NOT_AVAILABLE),
            Self::Text(v) => f.write_str(v),
            Self::List(items) => f.write_str(&items.join(", ")),
            Self::Flag(true) => f.write_str("Yes"),
            Self::Flag(false) => f.write_str("No"),
        }
    }
}

/// A labelled attribute on a profile tab.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DataField {
    pub label: String,
    pub value: FieldValue,
}

impl DataField {
    #[must_use]
    pub fn new(label: &str, value: FieldValue) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// One block of a profile tab. Exactly one of `fields`, `empty_state`, or
/// `error` carries the content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProfileSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<DataField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
    /// Set when this section's fetch failed; sibling sections are unaffected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Header card of the company profile page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyHeader {
    pub id: String,
    pub name: String,
    pub logo_url: Option<String>,
    /// Type, category, and size, in that order, when present.
    pub badges: Vec<String>,
    pub headquarters: Option<String>,
    /// `"Founded {year}"` when the year is known.
    pub founded: Option<String>,
    pub website_url: Option<String>,
}

/// One rendered tab of the company profile.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TabResponse {
    pub tab: ProfileTab,
    pub label: String,
    pub sections: Vec<ProfileSection>,
}

/// Response from `dcc companies show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyProfileResponse {
    pub header: CompanyHeader,
    pub tabs: Vec<TabResponse>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn field_value_display() {
        assert_eq!(FieldValue::Missing.to_string(), "Not available");
        assert_eq!(FieldValue::Flag(true).to_string(), "Yes");
        assert_eq!(FieldValue::Flag(false).to_string(), "No");
        assert_eq!(
            FieldValue::List(vec!["Rust".into(), "Go".into()]).to_string(),
            "Rust, Go"
        );
    }

    #[test]
    fn empty_text_and_list_are_missing() {
        assert!(FieldValue::text(Some("")).is_missing());
        assert!(FieldValue::text(None).is_missing());
        assert!(FieldValue::list(Some(&[])).is_missing());
        assert!(FieldValue::flag(None).is_missing());
        assert_eq!(FieldValue::number(Some(1999)), FieldValue::Text("1999".into()));
    }

    #[test]
    fn list_keeps_duplicates_and_order() {
        let items = vec!["Rust".to_string(), "Go".to_string(), "Rust".to_string()];
        assert_eq!(FieldValue::list(Some(&items)), FieldValue::List(items));
    }

    #[test]
    fn field_value_serializes_tagged() {
        let json = serde_json::to_value(FieldValue::Flag(true)).unwrap();
        assert_eq!(json["kind"], "flag");
        assert_eq!(json["value"], true);
        let json = serde_json::to_value(FieldValue::Missing).unwrap();
        assert_eq!(json["kind"], "missing");
    }
}
