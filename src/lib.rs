pub mod criteria;
pub mod document;
pub mod errors;
pub mod experience;
pub mod logger;
pub mod page;
pub mod profile;
pub mod query;
pub mod search;
pub mod store;
pub mod test_support;
pub mod types;

use std::sync::Arc;

use crate::criteria::{
    AdvancedCriteria, CitySkillsCriteria, CompanyCriteria, CountrySkillsCriteria,
    DistributionCriteria, ExperienceCriteria, SkillsCheckCriteria,
};
use crate::errors::SearchError;
use crate::page::{PageRequest, Paginated};
use crate::profile::{
    Profile, ProfileBrief, ProfileExperience, ProfileWithTitle, SkillCount, SkillsReport,
};
use crate::query::ExecOptions;
use crate::store::ProfileStore;
use crate::types::DocumentId;

/// The main index struct: an in-memory profile collection plus the search
/// operations, behind one facade.
pub struct ProfileIndex {
    store: Arc<ProfileStore>,
    opts: ExecOptions,
}

impl ProfileIndex {
    #[must_use]
    pub fn new() -> Self {
        Self { store: Arc::new(ProfileStore::new("profiles")), opts: ExecOptions::default() }
    }

    /// Deadline applied to every subsequent store round-trip.
    pub fn set_deadline_ms(&mut self, timeout_ms: u64) {
        self.opts.timeout_ms = Some(timeout_ms);
    }

    /// Pins the reference year used for ongoing employment intervals.
    /// Mostly useful for reproducible results in tests and replays.
    pub fn set_reference_year(&mut self, year: i32) {
        self.opts.reference_year = Some(year);
    }

    /// Serializes and stores a profile.
    ///
    /// # Errors
    /// Returns an error if the profile cannot be encoded as BSON.
    pub fn insert_profile(&self, profile: &Profile) -> Result<DocumentId, SearchError> {
        self.store.insert_profile(profile)
    }

    #[must_use]
    pub fn store(&self) -> Arc<ProfileStore> {
        self.store.clone()
    }

    // --- Search API (facade over the search module) ---

    /// # Errors
    /// `InvalidCriteria` or a propagated store failure.
    pub fn search_by_country_and_skills(
        &self,
        criteria: &CountrySkillsCriteria,
        page: PageRequest,
    ) -> Result<Paginated<ProfileBrief>, SearchError> {
        search::search_by_country_and_skills(self.store.as_ref(), criteria, page, &self.opts)
    }

    /// # Errors
    /// `InvalidCriteria` or a propagated store failure.
    pub fn search_by_city_and_skills(
        &self,
        criteria: &CitySkillsCriteria,
        page: PageRequest,
    ) -> Result<Paginated<ProfileBrief>, SearchError> {
        search::search_by_city_and_skills(self.store.as_ref(), criteria, page, &self.opts)
    }

    /// # Errors
    /// `InvalidCriteria` or a propagated store failure.
    pub fn search_by_experience(
        &self,
        criteria: &ExperienceCriteria,
        page: PageRequest,
    ) -> Result<Paginated<ProfileExperience>, SearchError> {
        search::search_by_experience(self.store.as_ref(), criteria, page, &self.opts)
    }

    /// # Errors
    /// `InvalidCriteria` or a propagated store failure.
    pub fn search_by_company(
        &self,
        criteria: &CompanyCriteria,
        page: PageRequest,
    ) -> Result<Paginated<ProfileWithTitle>, SearchError> {
        search::search_by_company(self.store.as_ref(), criteria, page, &self.opts)
    }

    /// # Errors
    /// `InvalidCriteria` or a propagated store failure.
    pub fn advanced_search(
        &self,
        criteria: &AdvancedCriteria,
        page: PageRequest,
    ) -> Result<Paginated<ProfileBrief>, SearchError> {
        search::advanced_search(self.store.as_ref(), criteria, page, &self.opts)
    }

    /// # Errors
    /// A propagated store failure.
    pub fn skills_distribution(
        &self,
        criteria: &DistributionCriteria,
        page: PageRequest,
    ) -> Result<Paginated<SkillCount>, SearchError> {
        search::skills_distribution(self.store.as_ref(), criteria, page, &self.opts)
    }

    /// # Errors
    /// `InvalidCriteria` or a propagated store failure.
    pub fn check_profiles_skills(
        &self,
        criteria: &SkillsCheckCriteria,
    ) -> Result<Vec<SkillsReport>, SearchError> {
        search::check_profiles_skills(self.store.as_ref(), criteria, &self.opts)
    }

    /// # Errors
    /// A propagated store failure; a missing profile is `Ok(None)`.
    pub fn find_by_identifier(
        &self,
        public_identifier: &str,
    ) -> Result<Option<Profile>, SearchError> {
        search::find_by_identifier(self.store.as_ref(), public_identifier, &self.opts)
    }
}

impl Default for ProfileIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Initializes the logging system.
///
/// This function should be called once, before any search operations, when
/// the embedding application wants file logging.
///
/// # Errors
/// Returns an error if the logger configuration cannot be loaded.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    logger::init()?;
    Ok(())
}
