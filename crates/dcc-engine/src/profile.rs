//! Company profile page: header card and the eight tabs.
//!
//! Each tab is a [`TabView`] variant borrowing exactly the satellite states it
//! displays, so a tab cannot reach data it does not render. Rendering turns
//! each satellite state into a [`ProfileSection`]:
//!
//! - loaded row: labelled data fields
//! - no row: the satellite's "No ... data available" empty state
//! - failed fetch: an error for that section only

use dcc_core::entities::{
    Company, CompanyBrandReputation, CompanyBusiness, CompanyCompensation, CompanyCulture,
    CompanyFinancials, CompanyLogistics, CompanyPeople, CompanyTalentGrowth, CompanyTechnology,
};
use dcc_core::enums::{ProfileTab, Satellite};
use dcc_core::fetch::{ProfileBundle, SectionState};
use dcc_core::responses::{
    CompanyHeader, CompanyProfileResponse, DataField, EmptyState, FieldValue, ProfileSection,
    TabResponse,
};

pub const COMPANY_NOT_FOUND: &str = "Company not found";
pub const COMPANY_NOT_FOUND_DESCRIPTION: &str = "The company you're looking for doesn't exist";

/// Empty state for an unknown company id.
#[must_use]
pub fn not_found() -> EmptyState {
    EmptyState::with_description(COMPANY_NOT_FOUND, COMPANY_NOT_FOUND_DESCRIPTION)
}

/// One profile tab and the data it needs.
#[derive(Debug, Clone, Copy)]
pub enum TabView<'a> {
    Overview(&'a Company),
    Business(&'a SectionState<CompanyBusiness>),
    Technology(&'a SectionState<CompanyTechnology>),
    People(&'a SectionState<CompanyPeople>),
    Culture(&'a SectionState<CompanyCulture>),
    Growth(&'a SectionState<CompanyTalentGrowth>),
    Compensation {
        compensation: &'a SectionState<CompanyCompensation>,
        logistics: &'a SectionState<CompanyLogistics>,
    },
    Financials {
        financials: &'a SectionState<CompanyFinancials>,
        brand_reputation: &'a SectionState<CompanyBrandReputation>,
    },
}

impl<'a> TabView<'a> {
    /// Pick the data for `tab` out of a fetched profile.
    #[must_use]
    pub const fn select(bundle: &'a ProfileBundle, tab: ProfileTab) -> Self {
        match tab {
            ProfileTab::Overview => Self::Overview(&bundle.company),
            ProfileTab::Business => Self::Business(&bundle.business),
            ProfileTab::Technology => Self::Technology(&bundle.technology),
            ProfileTab::People => Self::People(&bundle.people),
            ProfileTab::Culture => Self::Culture(&bundle.culture),
            ProfileTab::Growth => Self::Growth(&bundle.talent_growth),
            ProfileTab::Compensation => Self::Compensation {
                compensation: &bundle.compensation,
                logistics: &bundle.logistics,
            },
            ProfileTab::Financials => Self::Financials {
                financials: &bundle.financials,
                brand_reputation: &bundle.brand_reputation,
            },
        }
    }

    #[must_use]
    pub const fn tab(&self) -> ProfileTab {
        match self {
            Self::Overview(_) => ProfileTab::Overview,
            Self::Business(_) => ProfileTab::Business,
            Self::Technology(_) => ProfileTab::Technology,
            Self::People(_) => ProfileTab::People,
            Self::Culture(_) => ProfileTab::Culture,
            Self::Growth(_) => ProfileTab::Growth,
            Self::Compensation { .. } => ProfileTab::Compensation,
            Self::Financials { .. } => ProfileTab::Financials,
        }
    }

    #[must_use]
    pub fn render(&self) -> TabResponse {
        let sections = match *self {
            Self::Overview(company) => vec![overview_section(company)],
            Self::Business(state) => {
                vec![section(Satellite::Business, state, false, business_fields)]
            }
            Self::Technology(state) => {
                vec![section(Satellite::Technology, state, false, technology_fields)]
            }
            Self::People(state) => vec![section(Satellite::People, state, false, people_fields)],
            Self::Culture(state) => vec![section(Satellite::Culture, state, false, culture_fields)],
            Self::Growth(state) => {
                vec![section(Satellite::TalentGrowth, state, false, talent_growth_fields)]
            }
            Self::Compensation {
                compensation,
                logistics,
            } => vec![
                section(Satellite::Compensation, compensation, true, compensation_fields),
                section(Satellite::Logistics, logistics, true, logistics_fields),
            ],
            Self::Financials {
                financials,
                brand_reputation,
            } => vec![
                section(Satellite::Financials, financials, true, financials_fields),
                section(
                    Satellite::BrandReputation,
                    brand_reputation,
                    true,
                    brand_reputation_fields,
                ),
            ],
        };
        let tab = self.tab();
        TabResponse {
            tab,
            label: tab.label().to_string(),
            sections,
        }
    }
}

/// Render the header and the requested tabs of a fetched profile.
#[must_use]
pub fn company_profile(bundle: &ProfileBundle, tabs: &[ProfileTab]) -> CompanyProfileResponse {
    CompanyProfileResponse {
        header: header(&bundle.company),
        tabs: tabs
            .iter()
            .map(|&tab| TabView::select(bundle, tab).render())
            .collect(),
    }
}

#[must_use]
pub fn header(company: &Company) -> CompanyHeader {
    let badges = [
        company.company_type.as_deref(),
        company.category.as_deref(),
        company.employee_size.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|b| !b.is_empty())
    .map(str::to_string)
    .collect();
    CompanyHeader {
        id: company.id.clone(),
        name: company.name.clone(),
        logo_url: company.logo_url.clone(),
        badges,
        headquarters: company
            .headquarters_address
            .clone()
            .filter(|h| !h.is_empty()),
        founded: company.founded_year.map(|y| format!("Founded {y}")),
        website_url: company.website_url.clone().filter(|w| !w.is_empty()),
    }
}

fn section<T>(
    satellite: Satellite,
    state: &SectionState<T>,
    with_heading: bool,
    fields: fn(&T) -> Vec<DataField>,
) -> ProfileSection {
    let heading = with_heading.then(|| satellite.heading().to_string());
    match state {
        SectionState::Loaded(Some(row)) => ProfileSection {
            heading,
            fields: fields(row),
            ..ProfileSection::default()
        },
        SectionState::Loaded(None) => ProfileSection {
            heading,
            empty_state: Some(EmptyState::titled(satellite.empty_message())),
            ..ProfileSection::default()
        },
        SectionState::Failed(message) => ProfileSection {
            heading,
            error: Some(message.clone()),
            ..ProfileSection::default()
        },
    }
}

fn overview_section(company: &Company) -> ProfileSection {
    ProfileSection {
        about: company.description.clone().filter(|d| !d.is_empty()),
        fields: vec![
            DataField::new("Company Type", FieldValue::text(company.company_type.as_deref())),
            DataField::new("Category", FieldValue::text(company.category.as_deref())),
            DataField::new("Employee Size", FieldValue::text(company.employee_size.as_deref())),
            DataField::new(
                "Headquarters",
                FieldValue::text(company.headquarters_address.as_deref()),
            ),
            DataField::new("Founded", FieldValue::number(company.founded_year)),
            DataField::new(
                "Operating Countries",
                FieldValue::list(company.operating_countries.as_deref()),
            ),
        ],
        ..ProfileSection::default()
    }
}

fn business_fields(b: &CompanyBusiness) -> Vec<DataField> {
    vec![
        DataField::new("Business Model", FieldValue::text(b.business_model.as_deref())),
        DataField::new(
            "Competitive Advantage",
            FieldValue::text(b.competitive_advantage.as_deref()),
        ),
        DataField::new("Growth Strategy", FieldValue::text(b.growth_strategy.as_deref())),
        DataField::new("Revenue Streams", FieldValue::list(b.revenue_streams.as_deref())),
        DataField::new("Target Markets", FieldValue::list(b.target_markets.as_deref())),
        DataField::new(
            "Strategic Partnerships",
            FieldValue::list(b.strategic_partnerships.as_deref()),
        ),
    ]
}

fn technology_fields(t: &CompanyTechnology) -> Vec<DataField> {
    vec![
        DataField::new("Tech Stack", FieldValue::list(t.tech_stack.as_deref())),
        DataField::new(
            "Development Methodology",
            FieldValue::text(t.development_methodology.as_deref()),
        ),
        DataField::new("Cloud Providers", FieldValue::list(t.cloud_providers.as_deref())),
        DataField::new(
            "Engineering Practices",
            FieldValue::list(t.engineering_practices.as_deref()),
        ),
        DataField::new("Innovation Focus", FieldValue::list(t.innovation_focus.as_deref())),
    ]
}

fn people_fields(p: &CompanyPeople) -> Vec<DataField> {
    vec![
        DataField::new("CEO", FieldValue::text(p.ceo_name.as_deref())),
        DataField::new("Leadership Team", FieldValue::list(p.leadership_team.as_deref())),
        DataField::new("Employee Count", FieldValue::number(p.employee_count)),
        DataField::new("Hiring Rate", FieldValue::text(p.hiring_rate.as_deref())),
        DataField::new("Attrition Rate", FieldValue::text(p.attrition_rate.as_deref())),
        DataField::new("Average Tenure", FieldValue::text(p.average_tenure.as_deref())),
    ]
}

fn culture_fields(c: &CompanyCulture) -> Vec<DataField> {
    vec![
        DataField::new("Work Environment", FieldValue::text(c.work_environment.as_deref())),
        DataField::new("Remote Policy", FieldValue::text(c.remote_policy.as_deref())),
        DataField::new("Dress Code", FieldValue::text(c.dress_code.as_deref())),
        DataField::new("Work-Life Balance", FieldValue::text(c.work_life_balance.as_deref())),
        DataField::new("Core Values", FieldValue::list(c.core_values.as_deref())),
        DataField::new("Team Activities", FieldValue::list(c.team_activities.as_deref())),
        DataField::new(
            "Diversity Initiatives",
            FieldValue::list(c.diversity_initiatives.as_deref()),
        ),
    ]
}

fn talent_growth_fields(g: &CompanyTalentGrowth) -> Vec<DataField> {
    vec![
        DataField::new("Training Programs", FieldValue::list(g.training_programs.as_deref())),
        DataField::new("Mentorship Available", FieldValue::flag(g.mentorship_available)),
        DataField::new(
            "Promotion Frequency",
            FieldValue::text(g.promotion_frequency.as_deref()),
        ),
        DataField::new("Learning Budget", FieldValue::text(g.learning_budget.as_deref())),
        DataField::new("Career Paths", FieldValue::list(g.career_paths.as_deref())),
        DataField::new("Certification Support", FieldValue::flag(g.certification_support)),
    ]
}

fn compensation_fields(c: &CompanyCompensation) -> Vec<DataField> {
    vec![
        DataField::new(
            "Salary Range",
            salary_range(c.salary_range_min, c.salary_range_max),
        ),
        DataField::new("Bonus Structure", FieldValue::text(c.bonus_structure.as_deref())),
        DataField::new("Equity Options", FieldValue::flag(c.equity_options)),
        DataField::new("Pay Frequency", FieldValue::text(c.pay_frequency.as_deref())),
        DataField::new("Benefits", FieldValue::list(c.benefits.as_deref())),
    ]
}

fn logistics_fields(l: &CompanyLogistics) -> Vec<DataField> {
    vec![
        DataField::new("Office Locations", FieldValue::list(l.office_locations.as_deref())),
        DataField::new("Relocation Support", FieldValue::flag(l.relocation_support)),
        DataField::new("Visa Sponsorship", FieldValue::flag(l.visa_sponsorship)),
        DataField::new(
            "Travel Requirements",
            FieldValue::text(l.travel_requirements.as_deref()),
        ),
        DataField::new("Work Hours", FieldValue::text(l.work_hours.as_deref())),
        DataField::new("Timezone", FieldValue::text(l.timezone.as_deref())),
    ]
}

fn financials_fields(f: &CompanyFinancials) -> Vec<DataField> {
    vec![
        DataField::new("Annual Revenue", FieldValue::text(f.annual_revenue.as_deref())),
        DataField::new("Funding Stage", FieldValue::text(f.funding_stage.as_deref())),
        DataField::new("Total Funding", FieldValue::text(f.total_funding.as_deref())),
        DataField::new(
            "Profitability Status",
            FieldValue::text(f.profitability_status.as_deref()),
        ),
        DataField::new("Public/Private", FieldValue::text(f.public_or_private.as_deref())),
        DataField::new("Stock Symbol", FieldValue::text(f.stock_symbol.as_deref())),
        DataField::new("Fiscal Year End", FieldValue::text(f.fiscal_year_end.as_deref())),
    ]
}

fn brand_reputation_fields(b: &CompanyBrandReputation) -> Vec<DataField> {
    vec![
        DataField::new(
            "Brand Recognition",
            FieldValue::text(b.brand_recognition.as_deref()),
        ),
        DataField::new(
            "Employer Brand Rating",
            FieldValue::text(b.employer_brand_rating.as_deref()),
        ),
        DataField::new(
            "Social Media Presence",
            FieldValue::text(b.social_media_presence.as_deref()),
        ),
        DataField::new("Industry Awards", FieldValue::list(b.industry_awards.as_deref())),
        DataField::new("Media Mentions", FieldValue::list(b.media_mentions.as_deref())),
    ]
}

/// `"$MIN - $MAX"` when both bounds are known. Zero is a known bound.
#[must_use]
pub fn salary_range(min: Option<i64>, max: Option<i64>) -> FieldValue {
    match (min, max) {
        (Some(min), Some(max)) => FieldValue::Text(format!(
            "${} - ${}",
            group_thousands(min),
            group_thousands(max)
        )),
        _ => FieldValue::Missing,
    }
}

/// Format an integer with `,` between groups of three digits.
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
