//! Table layouts for each page response.

use dcc_core::responses::{
    AnalyticsResponse, CompanyListResponse, CompanyProfileResponse, DashboardResponse,
    DistributionCard, EmptyState, FilterChipRow, ProfileSection,
};

use super::TableRender;
use super::table::TableSection;

fn empty_text(state: Option<&EmptyState>) -> Option<String> {
    state.map(|s| match &s.description {
        Some(description) => format!("{}: {description}", s.title),
        None => s.title.clone(),
    })
}

/// Whole-number share; halves round up.
fn share(percentage: f64) -> String {
    format!("{}%", percentage.round())
}

fn distribution(card: &DistributionCard, key_header: &str) -> TableSection {
    TableSection::new(&card.title, &[key_header, "count", "share"])
        .with_rows(
            card.buckets
                .iter()
                .map(|b| vec![b.key.clone(), b.count.to_string(), share(b.percentage)])
                .collect(),
        )
        .or_empty(empty_text(card.empty_state.as_ref()))
}

fn chips(rows: &[FilterChipRow]) -> TableSection {
    TableSection::new("Filters", &["field", "options"]).with_rows(
        rows.iter()
            .map(|row| {
                let values = row
                    .chips
                    .iter()
                    .map(|chip| {
                        if chip.selected {
                            format!("[{}]", chip.value)
                        } else {
                            chip.value.clone()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![row.label.clone(), values]
            })
            .collect(),
    )
}

impl TableRender for Vec<FilterChipRow> {
    fn sections(&self) -> Vec<TableSection> {
        vec![chips(self)]
    }
}

impl TableRender for EmptyState {
    fn sections(&self) -> Vec<TableSection> {
        vec![TableSection {
            title: Some(self.title.clone()),
            empty: self.description.clone().or_else(|| Some(String::new())),
            ..TableSection::default()
        }]
    }
}

impl TableRender for DashboardResponse {
    fn sections(&self) -> Vec<TableSection> {
        let stats = TableSection::new("Overview", &["metric", "value"]).with_rows(
            self.stats
                .iter()
                .map(|s| vec![s.label.clone(), s.value.to_string()])
                .collect(),
        );
        let recent = TableSection::new("Recently Added Companies", &["id", "name", "details"])
            .with_rows(
                self.recent
                    .iter()
                    .map(|r| vec![r.id.clone(), r.name.clone(), r.subtitle.clone()])
                    .collect(),
            )
            .or_empty(empty_text(self.recent_empty_state.as_ref()));

        vec![
            stats,
            distribution(&self.by_type, "type"),
            distribution(&self.by_category, "category"),
            recent,
        ]
    }
}

impl TableRender for AnalyticsResponse {
    fn sections(&self) -> Vec<TableSection> {
        vec![
            TableSection::new("Analytics", &["metric", "value"]).with_rows(vec![vec![
                "Total Companies".to_string(),
                self.total_companies.to_string(),
            ]]),
            distribution(&self.type_distribution, "type"),
            distribution(&self.tech_stack, "technology"),
            distribution(&self.remote_policy, "policy"),
            distribution(&self.work_environment, "environment"),
        ]
    }
}

impl TableRender for CompanyListResponse {
    fn sections(&self) -> Vec<TableSection> {
        let dash = |v: Option<&String>| v.cloned().unwrap_or_else(|| "-".to_string());
        let companies = TableSection::new(
            &self.result_label,
            &["id", "name", "type", "category", "size", "headquarters"],
        )
        .with_rows(
            self.companies
                .iter()
                .map(|c| {
                    vec![
                        c.id.clone(),
                        c.name.clone(),
                        dash(c.company_type.as_ref()),
                        dash(c.category.as_ref()),
                        dash(c.employee_size.as_ref()),
                        dash(c.headquarters_address.as_ref()),
                    ]
                })
                .collect(),
        )
        .or_empty(empty_text(self.empty_state.as_ref()));

        vec![companies, chips(&self.filters)]
    }
}

fn profile_section(tab_label: &str, section: &ProfileSection) -> TableSection {
    let title = match &section.heading {
        Some(heading) => format!("{tab_label} / {heading}"),
        None => tab_label.to_string(),
    };
    let mut rows: Vec<Vec<String>> = section
        .fields
        .iter()
        .map(|f| vec![f.label.clone(), f.value.to_string()])
        .collect();
    if let Some(about) = &section.about {
        rows.push(vec!["About".to_string(), about.clone()]);
    }
    let empty = section
        .error
        .as_ref()
        .map(|e| format!("error: {e}"))
        .or_else(|| empty_text(section.empty_state.as_ref()));

    TableSection::new(title, &["field", "value"])
        .with_rows(rows)
        .or_empty(empty)
}

impl TableRender for CompanyProfileResponse {
    fn sections(&self) -> Vec<TableSection> {
        let h = &self.header;
        let mut header_rows = vec![vec!["ID".to_string(), h.id.clone()]];
        if !h.badges.is_empty() {
            header_rows.push(vec!["Badges".to_string(), h.badges.join(" · ")]);
        }
        for (label, value) in [
            ("Headquarters", &h.headquarters),
            ("Founded", &h.founded),
            ("Website", &h.website_url),
        ] {
            if let Some(value) = value {
                header_rows.push(vec![label.to_string(), value.clone()]);
            }
        }

        let mut sections =
            vec![TableSection::new(&h.name, &["field", "value"]).with_rows(header_rows)];
        for tab in &self.tabs {
            sections.extend(tab.sections.iter().map(|s| profile_section(&tab.label, s)));
        }
        sections
    }
}
