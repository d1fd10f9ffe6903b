//! Outcomes of independent profile fetches.

use crate::entities::{
    Company, CompanyBrandReputation, CompanyBusiness, CompanyCompensation, CompanyCulture,
    CompanyFinancials, CompanyLogistics, CompanyPeople, CompanyTalentGrowth, CompanyTechnology,
};

/// The state of a single profile section after its fetch settled.
///
/// A zero-row lookup is `Loaded(None)`, which is a normal "not yet profiled"
/// state. `Failed` is reserved for data source errors and never affects
/// sibling sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionState<T> {
    Loaded(Option<T>),
    Failed(String),
}

impl<T> SectionState<T> {
    /// Wrap a fetch result, keeping only the error message on failure.
    pub fn from_result<E: std::fmt::Display>(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(error) => Self::Failed(error.to_string()),
        }
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Borrow the loaded row, if any.
    #[must_use]
    pub const fn row(&self) -> Option<&T> {
        match self {
            Self::Loaded(Some(row)) => Some(row),
            Self::Loaded(None) | Self::Failed(_) => None,
        }
    }
}

/// A company row plus the settled state of each of its nine satellites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileBundle {
    pub company: Company,
    pub business: SectionState<CompanyBusiness>,
    pub technology: SectionState<CompanyTechnology>,
    pub people: SectionState<CompanyPeople>,
    pub culture: SectionState<CompanyCulture>,
    pub talent_growth: SectionState<CompanyTalentGrowth>,
    pub compensation: SectionState<CompanyCompensation>,
    pub logistics: SectionState<CompanyLogistics>,
    pub financials: SectionState<CompanyFinancials>,
    pub brand_reputation: SectionState<CompanyBrandReputation>,
}

impl ProfileBundle {
    /// A bundle for a company with no satellite rows at all.
    #[must_use]
    pub const fn unprofiled(company: Company) -> Self {
        Self {
            company,
            business: SectionState::Loaded(None),
            technology: SectionState::Loaded(None),
            people: SectionState::Loaded(None),
            culture: SectionState::Loaded(None),
            talent_growth: SectionState::Loaded(None),
            compensation: SectionState::Loaded(None),
            logistics: SectionState::Loaded(None),
            financials: SectionState::Loaded(None),
            brand_reputation: SectionState::Loaded(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SectionState;

    #[test]
    fn absent_row_is_not_a_failure() {
        let state = SectionState::<u8>::from_result(Ok::<_, String>(None));
        assert_eq!(state, SectionState::Loaded(None));
        assert!(!state.is_failed());
        assert!(state.row().is_none());
    }

    #[test]
    fn error_keeps_message() {
        let state = SectionState::<u8>::from_result(Err("connection refused"));
        assert_eq!(state, SectionState::Failed("connection refused".into()));
        assert!(state.row().is_none());
    }
}
