//! Aggregated insights over company and culture data.

use dcc_core::responses::AnalyticsResponse;

use crate::aggregate::{
    NOT_SPECIFIED, UNSPECIFIED, aggregate, aggregate_list, distribution_card,
};

#[derive(Debug, Clone, Default)]
pub struct AnalyticsRows {
    pub company_types: Vec<Option<String>>,
    pub tech_stacks: Vec<Option<Vec<String>>>,
    pub remote_policies: Vec<Option<String>>,
    pub work_environments: Vec<Option<String>>,
}

#[must_use]
pub fn analytics(rows: &AnalyticsRows, tech_stack_top: usize) -> AnalyticsResponse {
    let type_distribution = distribution_card(
        "Company Distribution by Type",
        aggregate(&rows.company_types, |v| v.as_deref(), UNSPECIFIED),
        None,
    );
    let tech_stack = distribution_card(
        "Tech Stack Frequency",
        aggregate_list(&rows.tech_stacks, |v| v.as_deref()),
        Some(tech_stack_top),
    );
    let remote_policy = distribution_card(
        "Remote Policy Distribution",
        aggregate(&rows.remote_policies, |v| v.as_deref(), NOT_SPECIFIED),
        None,
    );
    let work_environment = distribution_card(
        "Work Environment Indicators",
        aggregate(&rows.work_environments, |v| v.as_deref(), NOT_SPECIFIED),
        None,
    );

    AnalyticsResponse {
        total_companies: type_distribution.total,
        type_distribution,
        tech_stack,
        remote_policy,
        work_environment,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn owned(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(|v| (*v).to_string()).collect())
    }

    #[test]
    fn type_shares_and_total() {
        let rows = AnalyticsRows {
            company_types: vec![Some("Startup".into()), Some("Startup".into()), None],
            ..AnalyticsRows::default()
        };
        let view = analytics(&rows, 10);
        assert_eq!(view.total_companies, 3);
        let shares: Vec<(String, i64)> = view
            .type_distribution
            .buckets
            .iter()
            .map(|b| (b.key.clone(), b.percentage.round() as i64))
            .collect();
        assert_eq!(
            shares,
            vec![("Startup".to_string(), 67), ("Unspecified".to_string(), 33)]
        );
    }

    #[test]
    fn tech_stack_counts_elements_and_keeps_top_ten() {
        let mut tech_stacks = vec![owned(&["Rust", "Go"]), None, owned(&["Rust"])];
        tech_stacks.push(owned(&[
            "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K",
        ]));
        let rows = AnalyticsRows {
            tech_stacks,
            ..AnalyticsRows::default()
        };
        let view = analytics(&rows, 10);
        assert_eq!(view.tech_stack.buckets.len(), 10);
        assert_eq!(view.tech_stack.buckets[0].key, "Rust");
        assert_eq!(view.tech_stack.buckets[0].count, 2);
        assert_eq!(view.tech_stack.total, 14);
    }

    #[test]
    fn culture_uses_not_specified_sentinel() {
        let rows = AnalyticsRows {
            remote_policies: vec![Some("Hybrid".into()), None, Some(String::new())],
            work_environments: vec![None],
            ..AnalyticsRows::default()
        };
        let view = analytics(&rows, 10);
        assert_eq!(view.remote_policy.buckets[0].key, "Not specified");
        assert_eq!(view.remote_policy.buckets[0].count, 2);
        assert_eq!(view.work_environment.buckets[0].key, "Not specified");
    }

    #[test]
    fn empty_tables_render_no_data() {
        let view = analytics(&AnalyticsRows::default(), 10);
        assert_eq!(view.total_companies, 0);
        for card in [
            &view.type_distribution,
            &view.tech_stack,
            &view.remote_policy,
            &view.work_environment,
        ] {
            assert!(card.buckets.is_empty());
            assert!(card.empty_state.is_some(), "{}", card.title);
        }
    }
}
