//! Query Orchestrator: one function per search operation.
//!
//! Every operation walks the same pipeline: validate criteria, compile to a
//! plan, execute against the store (which owns the filter-before-paginate
//! rule), project rows into the operation's typed shape, wrap the page.
//! Failures from the store propagate untouched; no retries happen here.

use bson::{Bson, Document as BsonDocument};

use crate::criteria::{
    AdvancedCriteria, CitySkillsCriteria, CompanyCriteria, CountrySkillsCriteria,
    DistributionCriteria, ExperienceCriteria, SkillsCheckCriteria,
};
use crate::errors::SearchError;
use crate::page::{PageRequest, Paginated, paginate};
use crate::profile::{
    Profile, ProfileBrief, ProfileExperience, ProfileWithTitle, SkillCount, SkillsReport,
};
use crate::query::{self, ExecOptions};
use crate::store::DocumentStore;

/// Profiles in a country holding every listed skill.
///
/// # Errors
/// `InvalidCriteria` for an empty country or skills list; store failures
/// propagate.
pub fn search_by_country_and_skills(
    store: &dyn DocumentStore,
    criteria: &CountrySkillsCriteria,
    page: PageRequest,
    opts: &ExecOptions,
) -> Result<Paginated<ProfileBrief>, SearchError> {
    criteria.validate()?;
    let plan = query::compile_country_skills(criteria);
    let (rows, total) = store.execute(&plan, page.skip(), page.limit(), opts)?;
    log::info!("search_by_country_and_skills: country={} total={total}", criteria.country);
    Ok(paginate(rows.iter().map(ProfileBrief::from_document).collect(), total as u64, page))
}

/// Profiles in a city holding every listed skill.
///
/// # Errors
/// `InvalidCriteria` for an empty city or skills list; store failures
/// propagate.
pub fn search_by_city_and_skills(
    store: &dyn DocumentStore,
    criteria: &CitySkillsCriteria,
    page: PageRequest,
    opts: &ExecOptions,
) -> Result<Paginated<ProfileBrief>, SearchError> {
    criteria.validate()?;
    let plan = query::compile_city_skills(criteria);
    let (rows, total) = store.execute(&plan, page.skip(), page.limit(), opts)?;
    log::info!("search_by_city_and_skills: city={} total={total}", criteria.city);
    Ok(paginate(rows.iter().map(ProfileBrief::from_document).collect(), total as u64, page))
}

/// Profiles filtered and ordered by derived total experience.
///
/// # Errors
/// `InvalidCriteria` for an inverted window; store failures propagate.
pub fn search_by_experience(
    store: &dyn DocumentStore,
    criteria: &ExperienceCriteria,
    page: PageRequest,
    opts: &ExecOptions,
) -> Result<Paginated<ProfileExperience>, SearchError> {
    criteria.validate()?;
    let plan = query::compile_experience(criteria);
    let (rows, total) = store.execute(&plan, page.skip(), page.limit(), opts)?;
    log::info!(
        "search_by_experience: window=[{:?}, {:?}] total={total}",
        criteria.min_years,
        criteria.max_years
    );
    Ok(paginate(rows.iter().map(ProfileExperience::from_document).collect(), total as u64, page))
}

/// Profiles with at least one position at the company, each row carrying
/// the title held there (first matching position wins, mirroring the
/// source feed's ordering).
///
/// # Errors
/// `InvalidCriteria` for an empty company; store failures propagate.
pub fn search_by_company(
    store: &dyn DocumentStore,
    criteria: &CompanyCriteria,
    page: PageRequest,
    opts: &ExecOptions,
) -> Result<Paginated<ProfileWithTitle>, SearchError> {
    criteria.validate()?;
    let plan = query::compile_company(criteria);
    let (rows, total) = store.execute(&plan, page.skip(), page.limit(), opts)?;
    log::info!("search_by_company: company={} total={total}", criteria.company);
    let items = rows
        .iter()
        .map(|doc| {
            let brief = ProfileBrief::from_document(doc);
            ProfileWithTitle {
                full_name: brief.full_name,
                public_identifier: brief.public_identifier,
                title: title_at(doc, &criteria.company),
            }
        })
        .collect();
    Ok(paginate(items, total as u64, page))
}

/// Multi-field search combining any-of, all-of, and an optional derived
/// experience window.
///
/// # Errors
/// `InvalidCriteria` for an inverted window; store failures propagate.
pub fn advanced_search(
    store: &dyn DocumentStore,
    criteria: &AdvancedCriteria,
    page: PageRequest,
    opts: &ExecOptions,
) -> Result<Paginated<ProfileBrief>, SearchError> {
    criteria.validate()?;
    let plan = query::compile_advanced(criteria);
    let (rows, total) = store.execute(&plan, page.skip(), page.limit(), opts)?;
    log::info!("advanced_search: clauses={} total={total}", plan.predicates.len());
    Ok(paginate(rows.iter().map(ProfileBrief::from_document).collect(), total as u64, page))
}

/// Occurrence count per skill across matching profiles, most common first.
///
/// # Errors
/// Store failures propagate.
pub fn skills_distribution(
    store: &dyn DocumentStore,
    criteria: &DistributionCriteria,
    page: PageRequest,
    opts: &ExecOptions,
) -> Result<Paginated<SkillCount>, SearchError> {
    let plan = query::compile_distribution(criteria);
    let (rows, total) = store.execute(&plan, page.skip(), page.limit(), opts)?;
    log::info!("skills_distribution: country={:?} total={total}", criteria.country);
    let items = rows
        .iter()
        .map(|doc| SkillCount {
            skill: doc.get_str("skill").unwrap_or_default().to_string(),
            count: doc.get_i64("count").unwrap_or_default().max(0) as u64,
        })
        .collect();
    Ok(paginate(items, total as u64, page))
}

/// For each named profile, reports whether it holds every required skill
/// and which of the required skills it does hold (in required order).
/// Unknown identifiers are simply absent from the result.
///
/// # Errors
/// `InvalidCriteria` for empty identifier or skill lists; store failures
/// propagate.
pub fn check_profiles_skills(
    store: &dyn DocumentStore,
    criteria: &SkillsCheckCriteria,
    opts: &ExecOptions,
) -> Result<Vec<SkillsReport>, SearchError> {
    criteria.validate()?;
    let plan = query::compile_skills_check(criteria);
    let (rows, _) = store.execute(&plan, 0, usize::MAX, opts)?;
    Ok(rows
        .iter()
        .map(|doc| {
            let held: Vec<&str> = doc
                .get_array("skills")
                .map(|skills| skills.iter().filter_map(bson_str).collect())
                .unwrap_or_default();
            let matching: Vec<String> = criteria
                .required_skills
                .iter()
                .filter(|want| held.contains(&want.as_str()))
                .cloned()
                .collect();
            let brief = ProfileBrief::from_document(doc);
            SkillsReport {
                full_name: brief.full_name,
                public_identifier: brief.public_identifier,
                has_skills: matching.len() == criteria.required_skills.len(),
                matching_skills: matching,
            }
        })
        .collect())
}

/// Single-profile lookup by its public identifier.
///
/// # Errors
/// Store failures propagate; a missing profile is `Ok(None)`.
pub fn find_by_identifier(
    store: &dyn DocumentStore,
    public_identifier: &str,
    opts: &ExecOptions,
) -> Result<Option<Profile>, SearchError> {
    let plan = query::compile_identifier(public_identifier);
    let (rows, _) = store.execute(&plan, 0, 1, opts)?;
    rows.first().map(Profile::from_document).transpose()
}

fn title_at(doc: &BsonDocument, company: &str) -> Option<String> {
    let experiences = doc.get_array("experiences").ok()?;
    experiences.iter().find_map(|e| match e {
        Bson::Document(entry) if entry.get_str("company").is_ok_and(|c| c == company) => {
            entry.get_str("title").ok().map(ToString::to_string)
        }
        _ => None,
    })
}

fn bson_str(v: &Bson) -> Option<&str> {
    match v {
        Bson::String(s) => Some(s.as_str()),
        _ => None,
    }
}
