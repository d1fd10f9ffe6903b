//! Whole-profile fetch: the company row plus all nine satellites.

use dcc_core::entities::{
    CompanyBrandReputation, CompanyBusiness, CompanyCompensation, CompanyCulture,
    CompanyFinancials, CompanyLogistics, CompanyPeople, CompanyTalentGrowth, CompanyTechnology,
};
use dcc_core::fetch::{ProfileBundle, SectionState};

use crate::error::DatabaseError;
use crate::service::DccService;

impl DccService {
    /// Fetch a company and its satellites.
    ///
    /// The company row and the nine satellite lookups run concurrently and
    /// settle independently. A failing satellite becomes
    /// [`SectionState::Failed`] for that section only. A failing company
    /// lookup fails the whole call, and an unknown id is `Ok(None)`.
    pub async fn fetch_profile(
        &self,
        company_id: &str,
    ) -> Result<Option<ProfileBundle>, DatabaseError> {
        let (
            company,
            business,
            technology,
            people,
            culture,
            talent_growth,
            compensation,
            logistics,
            financials,
            brand_reputation,
        ) = tokio::join!(
            self.get_company(company_id),
            self.get_satellite::<CompanyBusiness>(company_id),
            self.get_satellite::<CompanyTechnology>(company_id),
            self.get_satellite::<CompanyPeople>(company_id),
            self.get_satellite::<CompanyCulture>(company_id),
            self.get_satellite::<CompanyTalentGrowth>(company_id),
            self.get_satellite::<CompanyCompensation>(company_id),
            self.get_satellite::<CompanyLogistics>(company_id),
            self.get_satellite::<CompanyFinancials>(company_id),
            self.get_satellite::<CompanyBrandReputation>(company_id),
        );

        let Some(company) = company? else {
            tracing::debug!(company_id, "company not found");
            return Ok(None);
        };

        let bundle = ProfileBundle {
            company,
            business: SectionState::from_result(business),
            technology: SectionState::from_result(technology),
            people: SectionState::from_result(people),
            culture: SectionState::from_result(culture),
            talent_growth: SectionState::from_result(talent_growth),
            compensation: SectionState::from_result(compensation),
            logistics: SectionState::from_result(logistics),
            financials: SectionState::from_result(financials),
            brand_reputation: SectionState::from_result(brand_reputation),
        };
        for (name, failed) in [
            ("business", bundle.business.is_failed()),
            ("technology", bundle.technology.is_failed()),
            ("people", bundle.people.is_failed()),
            ("culture", bundle.culture.is_failed()),
            ("talent_growth", bundle.talent_growth.is_failed()),
            ("compensation", bundle.compensation.is_failed()),
            ("logistics", bundle.logistics.is_failed()),
            ("financials", bundle.financials.is_failed()),
            ("brand_reputation", bundle.brand_reputation.is_failed()),
        ] {
            if failed {
                tracing::warn!(company_id, section = name, "satellite fetch failed");
            }
        }
        Ok(Some(bundle))
    }
}
