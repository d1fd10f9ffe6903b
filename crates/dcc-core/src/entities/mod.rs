//! Entity structs for the company profile and its satellites.
//!
//! Each struct maps to one backend table. Satellites are strictly 1:1 with
//! `Company` through `company_id` and are optional: a missing row means the
//! company has not been profiled for that theme yet.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod brand_reputation;
mod business;
mod company;
mod compensation;
mod culture;
mod financials;
mod logistics;
mod people;
mod talent_growth;
mod technology;

pub use brand_reputation::CompanyBrandReputation;
pub use business::CompanyBusiness;
pub use company::{Company, CompanySummary, RecentCompany};
pub use compensation::CompanyCompensation;
pub use culture::CompanyCulture;
pub use financials::CompanyFinancials;
pub use logistics::CompanyLogistics;
pub use people::CompanyPeople;
pub use talent_growth::CompanyTalentGrowth;
pub use technology::CompanyTechnology;
