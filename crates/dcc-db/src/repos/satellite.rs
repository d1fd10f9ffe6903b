//! Satellite repository: one optional row per company per theme.
//!
//! Every satellite table shares the same lookup shape (`WHERE company_id = ?`),
//! so decoding is expressed once per entity through [`SatelliteRow`] and the
//! query lives in a single generic method.

use dcc_core::entities::{
    CompanyBrandReputation, CompanyBusiness, CompanyCompensation, CompanyCulture,
    CompanyFinancials, CompanyLogistics, CompanyPeople, CompanyTalentGrowth, CompanyTechnology,
};
use dcc_core::enums::Satellite;

use crate::error::DatabaseError;
use crate::helpers::{
    get_opt_bool, get_opt_i64, get_opt_string, get_string_list, parse_datetime, satellite_table,
};
use crate::service::DccService;

/// A satellite entity that can be decoded from its backend table.
pub trait SatelliteRow: Sized {
    const SATELLITE: Satellite;
    /// Selected columns, in the order `from_row` reads them.
    const COLUMNS: &'static str;

    /// Decode one row selected with [`Self::COLUMNS`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a column is missing or malformed.
    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError>;
}

impl SatelliteRow for CompanyBusiness {
    const SATELLITE: Satellite = Satellite::Business;
    const COLUMNS: &'static str = "id, company_id, business_model, competitive_advantage, \
         growth_strategy, revenue_streams, target_markets, strategic_partnerships, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<String>(0)?,
            company_id: row.get::<String>(1)?,
            business_model: get_opt_string(row, 2)?,
            competitive_advantage: get_opt_string(row, 3)?,
            growth_strategy: get_opt_string(row, 4)?,
            revenue_streams: get_string_list(row, 5)?,
            target_markets: get_string_list(row, 6)?,
            strategic_partnerships: get_string_list(row, 7)?,
            created_at: parse_datetime(&row.get::<String>(8)?)?,
        })
    }
}

impl SatelliteRow for CompanyTechnology {
    const SATELLITE: Satellite = Satellite::Technology;
    const COLUMNS: &'static str = "id, company_id, tech_stack, development_methodology, \
         cloud_providers, engineering_practices, innovation_focus, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<String>(0)?,
            company_id: row.get::<String>(1)?,
            tech_stack: get_string_list(row, 2)?,
            development_methodology: get_opt_string(row, 3)?,
            cloud_providers: get_string_list(row, 4)?,
            engineering_practices: get_string_list(row, 5)?,
            innovation_focus: get_string_list(row, 6)?,
            created_at: parse_datetime(&row.get::<String>(7)?)?,
        })
    }
}

impl SatelliteRow for CompanyPeople {
    const SATELLITE: Satellite = Satellite::People;
    const COLUMNS: &'static str = "id, company_id, ceo_name, leadership_team, employee_count, \
         hiring_rate, attrition_rate, average_tenure, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<String>(0)?,
            company_id: row.get::<String>(1)?,
            ceo_name: get_opt_string(row, 2)?,
            leadership_team: get_string_list(row, 3)?,
            employee_count: get_opt_i64(row, 4)?,
            hiring_rate: get_opt_string(row, 5)?,
            attrition_rate: get_opt_string(row, 6)?,
            average_tenure: get_opt_string(row, 7)?,
            created_at: parse_datetime(&row.get::<String>(8)?)?,
        })
    }
}

impl SatelliteRow for CompanyCulture {
    const SATELLITE: Satellite = Satellite::Culture;
    const COLUMNS: &'static str = "id, company_id, work_environment, remote_policy, dress_code, \
         work_life_balance, core_values, team_activities, diversity_initiatives, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<String>(0)?,
            company_id: row.get::<String>(1)?,
            work_environment: get_opt_string(row, 2)?,
            remote_policy: get_opt_string(row, 3)?,
            dress_code: get_opt_string(row, 4)?,
            work_life_balance: get_opt_string(row, 5)?,
            core_values: get_string_list(row, 6)?,
            team_activities: get_string_list(row, 7)?,
            diversity_initiatives: get_string_list(row, 8)?,
            created_at: parse_datetime(&row.get::<String>(9)?)?,
        })
    }
}

impl SatelliteRow for CompanyTalentGrowth {
    const SATELLITE: Satellite = Satellite::TalentGrowth;
    const COLUMNS: &'static str = "id, company_id, training_programs, mentorship_available, \
         promotion_frequency, learning_budget, career_paths, certification_support, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<String>(0)?,
            company_id: row.get::<String>(1)?,
            training_programs: get_string_list(row, 2)?,
            mentorship_available: get_opt_bool(row, 3)?,
            promotion_frequency: get_opt_string(row, 4)?,
            learning_budget: get_opt_string(row, 5)?,
            career_paths: get_string_list(row, 6)?,
            certification_support: get_opt_bool(row, 7)?,
            created_at: parse_datetime(&row.get::<String>(8)?)?,
        })
    }
}

impl SatelliteRow for CompanyCompensation {
    const SATELLITE: Satellite = Satellite::Compensation;
    const COLUMNS: &'static str = "id, company_id, salary_range_min, salary_range_max, \
         bonus_structure, equity_options, pay_frequency, benefits, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<String>(0)?,
            company_id: row.get::<String>(1)?,
            salary_range_min: get_opt_i64(row, 2)?,
            salary_range_max: get_opt_i64(row, 3)?,
            bonus_structure: get_opt_string(row, 4)?,
            equity_options: get_opt_bool(row, 5)?,
            pay_frequency: get_opt_string(row, 6)?,
            benefits: get_string_list(row, 7)?,
            created_at: parse_datetime(&row.get::<String>(8)?)?,
        })
    }
}

impl SatelliteRow for CompanyLogistics {
    const SATELLITE: Satellite = Satellite::Logistics;
    const COLUMNS: &'static str = "id, company_id, office_locations, relocation_support, \
         visa_sponsorship, travel_requirements, work_hours, timezone, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<String>(0)?,
            company_id: row.get::<String>(1)?,
            office_locations: get_string_list(row, 2)?,
            relocation_support: get_opt_bool(row, 3)?,
            visa_sponsorship: get_opt_bool(row, 4)?,
            travel_requirements: get_opt_string(row, 5)?,
            work_hours: get_opt_string(row, 6)?,
            timezone: get_opt_string(row, 7)?,
            created_at: parse_datetime(&row.get::<String>(8)?)?,
        })
    }
}

impl SatelliteRow for CompanyFinancials {
    const SATELLITE: Satellite = Satellite::Financials;
    const COLUMNS: &'static str = "id, company_id, annual_revenue, funding_stage, total_funding, \
         profitability_status, public_or_private, stock_symbol, fiscal_year_end, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<String>(0)?,
            company_id: row.get::<String>(1)?,
            annual_revenue: get_opt_string(row, 2)?,
            funding_stage: get_opt_string(row, 3)?,
            total_funding: get_opt_string(row, 4)?,
            profitability_status: get_opt_string(row, 5)?,
            public_or_private: get_opt_string(row, 6)?,
            stock_symbol: get_opt_string(row, 7)?,
            fiscal_year_end: get_opt_string(row, 8)?,
            created_at: parse_datetime(&row.get::<String>(9)?)?,
        })
    }
}

impl SatelliteRow for CompanyBrandReputation {
    const SATELLITE: Satellite = Satellite::BrandReputation;
    const COLUMNS: &'static str = "id, company_id, brand_recognition, employer_brand_rating, \
         social_media_presence, industry_awards, media_mentions, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<String>(0)?,
            company_id: row.get::<String>(1)?,
            brand_recognition: get_opt_string(row, 2)?,
            employer_brand_rating: get_opt_string(row, 3)?,
            social_media_presence: get_opt_string(row, 4)?,
            industry_awards: get_string_list(row, 5)?,
            media_mentions: get_string_list(row, 6)?,
            created_at: parse_datetime(&row.get::<String>(7)?)?,
        })
    }
}

impl DccService {
    /// Single-row satellite lookup by `company_id`.
    ///
    /// Zero rows is `Ok(None)`. More than one row breaks the 1:1 invariant and
    /// is reported as `DatabaseError::InvalidState`.
    pub async fn get_satellite<T: SatelliteRow>(
        &self,
        company_id: &str,
    ) -> Result<Option<T>, DatabaseError> {
        let table = satellite_table(T::SATELLITE);
        let conn = self.db().conn();
        let sql = format!(
            "SELECT {} FROM {table} WHERE company_id = ?1 LIMIT 2",
            T::COLUMNS
        );
        let sql = sql.as_str();
        let what = format!("get {}", T::SATELLITE);
        self.read(&what, || async move {
            let mut rows = conn.query(sql, [company_id]).await?;
            let Some(row) = rows.next().await? else {
                return Ok(None);
            };
            let value = T::from_row(&row)?;
            if rows.next().await?.is_some() {
                return Err(DatabaseError::InvalidState(format!(
                    "multiple {table} rows for company {company_id}"
                )));
            }
            Ok(Some(value))
        })
        .await
    }
}
