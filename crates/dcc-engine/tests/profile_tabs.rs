use chrono::{TimeZone, Utc};
use dcc_core::entities::{Company, CompanyCompensation, CompanyLogistics};
use dcc_core::enums::ProfileTab;
use dcc_core::fetch::{ProfileBundle, SectionState};
use dcc_core::responses::{EmptyState, FieldValue, ProfileSection};
use dcc_engine::TabView;
use dcc_engine::profile::{company_profile, header, not_found};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn company() -> Company {
    let ts = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    Company {
        id: "c-1".into(),
        name: "Acme".into(),
        logo_url: None,
        company_type: Some("Startup".into()),
        category: Some("Fintech".into()),
        employee_size: None,
        headquarters_address: Some("Bengaluru".into()),
        founded_year: Some(2015),
        operating_countries: Some(vec![]),
        website_url: Some("https://acme.example".into()),
        description: Some("Payments infrastructure.".into()),
        created_at: ts,
        updated_at: ts,
    }
}

fn field<'a>(section: &'a ProfileSection, label: &str) -> &'a FieldValue {
    &section
        .fields
        .iter()
        .find(|f| f.label == label)
        .unwrap_or_else(|| panic!("no field {label}"))
        .value
}

#[test]
fn missing_financials_renders_empty_state() {
    let bundle = ProfileBundle::unprofiled(company());
    let tab = TabView::select(&bundle, ProfileTab::Financials).render();
    assert_eq!(tab.label, "Financials & Brand");
    assert_eq!(tab.sections.len(), 2);
    assert_eq!(tab.sections[0].heading.as_deref(), Some("Financials"));
    assert_eq!(
        tab.sections[0].empty_state,
        Some(EmptyState::titled("No financial data available"))
    );
    assert_eq!(
        tab.sections[1].empty_state,
        Some(EmptyState::titled("No brand reputation data available"))
    );
}

#[rstest]
#[case(ProfileTab::Business, "No business data available")]
#[case(ProfileTab::Technology, "No technology data available")]
#[case(ProfileTab::People, "No people data available")]
#[case(ProfileTab::Culture, "No culture data available")]
#[case(ProfileTab::Growth, "No talent growth data available")]
fn single_satellite_tabs_have_no_heading(#[case] tab: ProfileTab, #[case] message: &str) {
    let bundle = ProfileBundle::unprofiled(company());
    let rendered = TabView::select(&bundle, tab).render();
    assert_eq!(rendered.tab, tab);
    assert_eq!(rendered.sections.len(), 1);
    assert_eq!(rendered.sections[0].heading, None);
    assert_eq!(
        rendered.sections[0].empty_state,
        Some(EmptyState::titled(message))
    );
}

#[test]
fn overview_fields_and_about() {
    let bundle = ProfileBundle::unprofiled(company());
    let tab = TabView::select(&bundle, ProfileTab::Overview).render();
    let section = &tab.sections[0];
    assert_eq!(section.about.as_deref(), Some("Payments infrastructure."));
    let labels: Vec<&str> = section.fields.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Company Type",
            "Category",
            "Employee Size",
            "Headquarters",
            "Founded",
            "Operating Countries",
        ]
    );
    assert_eq!(field(section, "Employee Size").to_string(), "Not available");
    assert_eq!(field(section, "Founded").to_string(), "2015");
    assert_eq!(field(section, "Operating Countries").to_string(), "Not available");
}

#[test]
fn overview_without_description_has_no_about() {
    let mut c = company();
    c.description = Some(String::new());
    let bundle = ProfileBundle::unprofiled(c);
    let tab = TabView::select(&bundle, ProfileTab::Overview).render();
    assert_eq!(tab.sections[0].about, None);
}

#[test]
fn compensation_and_logistics_render_independently() {
    let ts = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    let mut bundle = ProfileBundle::unprofiled(company());
    bundle.compensation = SectionState::Loaded(Some(CompanyCompensation {
        id: "comp-1".into(),
        company_id: "c-1".into(),
        salary_range_min: Some(1_200_000),
        salary_range_max: Some(2_500_000),
        bonus_structure: None,
        equity_options: Some(false),
        pay_frequency: Some(String::new()),
        benefits: Some(vec!["Health".into(), "Health".into()]),
        created_at: ts,
    }));
    bundle.logistics = SectionState::Failed("libSQL error: stream expired".into());

    let tab = TabView::select(&bundle, ProfileTab::Compensation).render();
    let comp = &tab.sections[0];
    assert_eq!(field(comp, "Salary Range").to_string(), "$1,200,000 - $2,500,000");
    assert_eq!(field(comp, "Equity Options").to_string(), "No");
    assert_eq!(field(comp, "Pay Frequency").to_string(), "Not available");
    assert_eq!(field(comp, "Bonus Structure").to_string(), "Not available");
    assert_eq!(field(comp, "Benefits").to_string(), "Health, Health");

    let logistics = &tab.sections[1];
    assert_eq!(logistics.heading.as_deref(), Some("Logistics"));
    assert!(logistics.fields.is_empty());
    assert_eq!(
        logistics.error.as_deref(),
        Some("libSQL error: stream expired")
    );
}

#[test]
fn logistics_flags_render_yes() {
    let ts = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    let mut bundle = ProfileBundle::unprofiled(company());
    bundle.logistics = SectionState::Loaded(Some(CompanyLogistics {
        id: "log-1".into(),
        company_id: "c-1".into(),
        office_locations: None,
        relocation_support: Some(true),
        visa_sponsorship: None,
        travel_requirements: None,
        work_hours: Some("9-6".into()),
        timezone: None,
        created_at: ts,
    }));
    let tab = TabView::select(&bundle, ProfileTab::Compensation).render();
    assert_eq!(field(&tab.sections[1], "Relocation Support").to_string(), "Yes");
    assert_eq!(field(&tab.sections[1], "Visa Sponsorship").to_string(), "Not available");
}

#[test]
fn header_badges_skip_missing() {
    let h = header(&company());
    assert_eq!(h.badges, vec!["Startup", "Fintech"]);
    assert_eq!(h.founded.as_deref(), Some("Founded 2015"));
    assert_eq!(h.headquarters.as_deref(), Some("Bengaluru"));
}

#[test]
fn full_profile_renders_requested_tabs_in_order() {
    let bundle = ProfileBundle::unprofiled(company());
    let profile = company_profile(&bundle, &ProfileTab::ALL);
    let tabs: Vec<ProfileTab> = profile.tabs.iter().map(|t| t.tab).collect();
    assert_eq!(tabs, ProfileTab::ALL.to_vec());
    assert_eq!(profile.header.name, "Acme");
}

#[test]
fn unknown_company_message() {
    let state = not_found();
    assert_eq!(state.title, "Company not found");
    assert_eq!(
        state.description.as_deref(),
        Some("The company you're looking for doesn't exist")
    );
}
