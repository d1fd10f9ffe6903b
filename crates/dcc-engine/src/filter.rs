//! Free-text search plus categorical equality filters over company rows.
//!
//! A [`FilterState`] is the ephemeral UI state of one list view: the search
//! text and at most one selected value per [`FilterField`]. It is owned by a
//! single command invocation or browse session and never persisted.
//!
//! The final predicate is the AND of the search match and every criterion.
//! Available options are always computed over the unfiltered dataset so the
//! chip rows do not shrink as filters are applied.

use std::collections::{BTreeMap, HashSet};

use dcc_core::entities::{Company, CompanySummary};
use dcc_core::enums::FilterField;
use dcc_core::responses::{CompanyListResponse, EmptyState, FilterChip, FilterChipRow};
use serde::{Deserialize, Serialize};

pub const NO_COMPANIES_FOUND: &str = "No companies found";
pub const ADJUST_FILTERS: &str = "Try adjusting your filters";
pub const NO_COMPANIES_YET: &str = "No companies have been added yet";

/// A record the filter engine can match against.
pub trait Filterable {
    fn name(&self) -> &str;

    /// Value of a categorical field; `None` when null.
    fn field(&self, field: FilterField) -> Option<&str>;
}

impl Filterable for CompanySummary {
    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::CompanyType => self.company_type.as_deref(),
            FilterField::Category => self.category.as_deref(),
            FilterField::EmployeeSize => self.employee_size.as_deref(),
        }
    }
}

impl Filterable for Company {
    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::CompanyType => self.company_type.as_deref(),
            FilterField::Category => self.category.as_deref(),
            FilterField::EmployeeSize => self.employee_size.as_deref(),
        }
    }
}

/// Search text and selected filter values of one list view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    search: String,
    criteria: BTreeMap<FilterField, String>,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Currently selected value of `field`.
    #[must_use]
    pub fn selected(&self, field: FilterField) -> Option<&str> {
        self.criteria.get(&field).map(String::as_str)
    }

    #[must_use]
    pub const fn criteria(&self) -> &BTreeMap<FilterField, String> {
        &self.criteria
    }

    /// Select `value` for `field`, replacing any previous selection.
    pub fn select(&mut self, field: FilterField, value: impl Into<String>) {
        self.criteria.insert(field, value.into());
    }

    /// Select `value`, or clear the field if `value` is already selected.
    pub fn toggle(&mut self, field: FilterField, value: &str) {
        if self.selected(field) == Some(value) {
            self.criteria.remove(&field);
        } else {
            self.select(field, value);
        }
    }

    pub fn clear(&mut self, field: FilterField) {
        self.criteria.remove(&field);
    }

    /// Reset every criterion and the search text.
    pub fn clear_all(&mut self) {
        self.search.clear();
        self.criteria.clear();
    }

    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || !self.criteria.is_empty()
    }

    /// Case-insensitive substring match on name or category.
    #[must_use]
    pub fn matches_search<T: Filterable>(&self, record: &T) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.name().to_lowercase().contains(&needle)
            || record
                .field(FilterField::Category)
                .is_some_and(|c| c.to_lowercase().contains(&needle))
    }

    #[must_use]
    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        self.matches_search(record)
            && self
                .criteria
                .iter()
                .all(|(field, value)| record.field(*field) == Some(value.as_str()))
    }

    /// Records that satisfy every active filter, in input order.
    pub fn apply<'a, T: Filterable>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

/// Distinct non-empty values of each field, in first-seen order.
pub fn available_options<T: Filterable>(
    records: &[T],
    fields: &[FilterField],
) -> BTreeMap<FilterField, Vec<String>> {
    fields
        .iter()
        .map(|&field| {
            let mut seen = HashSet::new();
            let values = records
                .iter()
                .filter_map(|r| r.field(field))
                .filter(|value| !value.is_empty() && seen.insert(*value))
                .map(str::to_string)
                .collect();
            (field, values)
        })
        .collect()
}

/// `"1 company"` or `"N companies"`.
#[must_use]
pub fn result_label(count: usize) -> String {
    if count == 1 {
        "1 company".to_string()
    } else {
        format!("{count} companies")
    }
}

/// What the list shows when nothing matches.
#[must_use]
pub fn empty_state(has_active_filters: bool) -> EmptyState {
    let description = if has_active_filters {
        ADJUST_FILTERS
    } else {
        NO_COMPANIES_YET
    };
    EmptyState::with_description(NO_COMPANIES_FOUND, description)
}

/// Chip rows for every filter field with options, marking the selected value.
///
/// A field without any value gets no row. The category row is cut to
/// `category_limit` chips.
#[must_use]
pub fn chip_rows(
    options: &BTreeMap<FilterField, Vec<String>>,
    state: &FilterState,
    category_limit: usize,
) -> Vec<FilterChipRow> {
    FilterField::ALL
        .into_iter()
        .filter_map(|field| {
            let values = options.get(&field).filter(|values| !values.is_empty())?;
            let limit = if field == FilterField::Category {
                category_limit
            } else {
                values.len()
            };
            let chips = values
                .iter()
                .take(limit)
                .map(|value| FilterChip {
                    value: value.clone(),
                    selected: state.selected(field) == Some(value.as_str()),
                })
                .collect();
            Some(FilterChipRow {
                field,
                label: field.label().to_string(),
                chips,
            })
        })
        .collect()
}

/// The company list view: filtered rows, chips, labels, and empty state.
#[must_use]
pub fn company_list(
    companies: &[CompanySummary],
    state: &FilterState,
    category_limit: usize,
) -> CompanyListResponse {
    let options = available_options(companies, &FilterField::ALL);
    let matched: Vec<CompanySummary> = state.apply(companies).into_iter().cloned().collect();
    let has_active_filters = state.has_active_filters();
    tracing::debug!(
        total = companies.len(),
        matched = matched.len(),
        has_active_filters,
        "filtered company list"
    );
    CompanyListResponse {
        search: (!state.search().is_empty()).then(|| state.search().to_string()),
        active_filters: state.criteria().clone(),
        has_active_filters,
        result_label: result_label(matched.len()),
        empty_state: matched.is_empty().then(|| empty_state(has_active_filters)),
        filters: chip_rows(&options, state, category_limit),
        companies: matched,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn summary(
        name: &str,
        ty: Option<&str>,
        cat: Option<&str>,
        size: Option<&str>,
    ) -> CompanySummary {
        CompanySummary {
            id: format!("id-{name}"),
            name: name.to_string(),
            logo_url: None,
            company_type: ty.map(str::to_string),
            category: cat.map(str::to_string),
            employee_size: size.map(str::to_string),
            headquarters_address: None,
            operating_countries: None,
        }
    }

    fn names<'a>(rows: &[&'a CompanySummary]) -> Vec<&'a str> {
        rows.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn acme_search_matches_name_and_category() {
        let rows = vec![
            summary("Acme Corp", None, None, None),
            summary("Globex", None, Some("ACME Tools"), None),
            summary("Initech", None, None, None),
        ];
        let mut state = FilterState::new();
        state.set_search("acme");
        assert_eq!(names(&state.apply(&rows)), vec!["Acme Corp", "Globex"]);
    }

    #[test]
    fn null_category_never_matches_search() {
        let rows = vec![summary("Initech", None, None, None)];
        let mut state = FilterState::new();
        state.set_search("fin");
        assert!(state.apply(&rows).is_empty());
    }

    #[rstest]
    #[case::type_only(Some("Startup"), None, vec!["A", "C"])]
    #[case::type_and_category(Some("Startup"), Some("Fintech"), vec!["A"])]
    #[case::category_only(None, Some("Retail"), vec!["B", "C"])]
    #[case::no_match(Some("Agency"), None, vec![])]
    fn criteria_combine_with_and(
        #[case] ty: Option<&str>,
        #[case] cat: Option<&str>,
        #[case] expected: Vec<&str>,
    ) {
        let rows = vec![
            summary("A", Some("Startup"), Some("Fintech"), Some("1-10")),
            summary("B", Some("Enterprise"), Some("Retail"), None),
            summary("C", Some("Startup"), Some("Retail"), None),
        ];
        let mut state = FilterState::new();
        if let Some(ty) = ty {
            state.select(FilterField::CompanyType, ty);
        }
        if let Some(cat) = cat {
            state.select(FilterField::Category, cat);
        }
        assert_eq!(names(&state.apply(&rows)), expected);
    }

    #[test]
    fn filtering_is_idempotent() {
        let rows = vec![
            summary("Acme", Some("Startup"), Some("Fintech"), None),
            summary("Globex", Some("Startup"), None, None),
        ];
        let mut state = FilterState::new();
        state.set_search("a");
        state.select(FilterField::CompanyType, "Startup");
        let once: Vec<CompanySummary> = state.apply(&rows).into_iter().cloned().collect();
        let twice: Vec<CompanySummary> = state.apply(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn toggle_law() {
        let mut state = FilterState::new();
        state.toggle(FilterField::EmployeeSize, "51-200");
        assert_eq!(state.selected(FilterField::EmployeeSize), Some("51-200"));
        state.toggle(FilterField::EmployeeSize, "51-200");
        assert_eq!(state.selected(FilterField::EmployeeSize), None);

        state.toggle(FilterField::EmployeeSize, "1-10");
        state.toggle(FilterField::EmployeeSize, "11-50");
        assert_eq!(state.selected(FilterField::EmployeeSize), Some("11-50"));
    }

    #[test]
    fn clear_all_resets_search_and_criteria() {
        let mut state = FilterState::new();
        state.set_search("x");
        state.select(FilterField::Category, "Fintech");
        assert!(state.has_active_filters());
        state.clear_all();
        assert!(!state.has_active_filters());
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn options_ignore_filters_and_skip_empty() {
        let rows = vec![
            summary("A", Some("Startup"), Some("Fintech"), None),
            summary("B", Some(""), Some("Retail"), None),
            summary("C", Some("Enterprise"), Some("Fintech"), None),
            summary("D", Some("Startup"), None, None),
        ];
        let options = available_options(&rows, &FilterField::ALL);
        assert_eq!(options[&FilterField::CompanyType], vec!["Startup", "Enterprise"]);
        assert_eq!(options[&FilterField::Category], vec!["Fintech", "Retail"]);
        assert!(options[&FilterField::EmployeeSize].is_empty());

        let mut state = FilterState::new();
        state.select(FilterField::CompanyType, "Enterprise");
        let before = company_list(&rows, &FilterState::new(), 5).filters;
        let after = company_list(&rows, &state, 5).filters;
        let values = |rows: &[FilterChipRow]| -> Vec<Vec<String>> {
            rows.iter()
                .map(|r| r.chips.iter().map(|c| c.value.clone()).collect())
                .collect()
        };
        assert_eq!(values(&before), values(&after));
    }

    #[test]
    fn fields_without_options_get_no_chip_row() {
        let rows = vec![
            summary("A", Some("Startup"), None, None),
            summary("B", Some(""), None, None),
        ];
        let view = company_list(&rows, &FilterState::new(), 5);
        let fields: Vec<FilterField> = view.filters.iter().map(|r| r.field).collect();
        assert_eq!(fields, vec![FilterField::CompanyType]);

        assert!(company_list(&[], &FilterState::new(), 5).filters.is_empty());
    }

    #[test]
    fn options_dedupe_repeated_values_in_first_seen_order() {
        let rows: Vec<CompanySummary> = ["Retail", "Fintech", "Retail", "Health", "Fintech"]
            .into_iter()
            .enumerate()
            .map(|(i, cat)| summary(&format!("C{i}"), None, Some(cat), None))
            .collect();
        let options = available_options(&rows, &[FilterField::Category]);
        assert_eq!(options[&FilterField::Category], vec!["Retail", "Fintech", "Health"]);
    }

    #[rstest]
    #[case(0, "0 companies")]
    #[case(1, "1 company")]
    #[case(2, "2 companies")]
    fn result_labels(#[case] count: usize, #[case] expected: &str) {
        assert_eq!(result_label(count), expected);
    }

    #[test]
    fn empty_list_messages() {
        let empty = company_list(&[], &FilterState::new(), 5);
        assert_eq!(
            empty.empty_state,
            Some(EmptyState::with_description(
                "No companies found",
                "No companies have been added yet"
            ))
        );

        let rows = vec![summary("Acme", None, None, None)];
        let mut state = FilterState::new();
        state.set_search("zzz");
        let filtered = company_list(&rows, &state, 5);
        assert_eq!(
            filtered.empty_state.and_then(|e| e.description).as_deref(),
            Some("Try adjusting your filters")
        );
        assert_eq!(filtered.result_label, "0 companies");
    }

    #[test]
    fn category_chips_are_capped_and_marked() {
        let rows: Vec<CompanySummary> = (1..=7)
            .map(|i| {
                let category = format!("Cat{i}");
                summary(&format!("C{i}"), None, Some(category.as_str()), None)
            })
            .collect();
        let mut state = FilterState::new();
        state.select(FilterField::Category, "Cat2");
        let view = company_list(&rows, &state, 5);
        let row = view
            .filters
            .iter()
            .find(|r| r.field == FilterField::Category)
            .unwrap();
        assert_eq!(row.chips.len(), 5);
        assert!(row.chips.iter().any(|c| c.value == "Cat2" && c.selected));
        assert_eq!(view.result_label, "1 company");
    }
}
