//! Per-operation search criteria. Each criteria value is immutable once
//! built; only non-empty fields participate in filtering, and validation
//! runs before any store round-trip.

use crate::errors::SearchError;
use crate::query::Order;
use serde::{Deserialize, Serialize};

/// Mandatory country plus a conjunctive skills requirement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountrySkillsCriteria {
    pub country: String,
    pub skills: Vec<String>,
}

impl CountrySkillsCriteria {
    /// # Errors
    /// Rejects an empty country or an empty skills list.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.country.trim().is_empty() {
            return Err(SearchError::InvalidCriteria("country must not be empty".into()));
        }
        require_skills(&self.skills)
    }
}

/// Mandatory city plus a conjunctive skills requirement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CitySkillsCriteria {
    pub city: String,
    pub skills: Vec<String>,
}

impl CitySkillsCriteria {
    /// # Errors
    /// Rejects an empty city or an empty skills list.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.city.trim().is_empty() {
            return Err(SearchError::InvalidCriteria("city must not be empty".into()));
        }
        require_skills(&self.skills)
    }
}

/// Experience search: every field optional, the derived total is the filter
/// and (optionally) the sort key. Default sort is descending, matching the
/// result shape consumers expect from the source feed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ExperienceCriteria {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub min_years: Option<f64>,
    #[serde(default)]
    pub max_years: Option<f64>,
    #[serde(default)]
    pub sort: Option<Order>,
}

impl ExperienceCriteria {
    /// # Errors
    /// Rejects an inverted experience window.
    pub fn validate(&self) -> Result<(), SearchError> {
        check_window(self.min_years, self.max_years)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CompanyCriteria {
    pub company: String,
}

impl CompanyCriteria {
    /// # Errors
    /// Rejects an empty company name.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.company.trim().is_empty() {
            return Err(SearchError::InvalidCriteria("company must not be empty".into()));
        }
        Ok(())
    }
}

/// Multi-field search. Plural fields (countries, cities, companies) are
/// any-of; skills and languages are all-of. An entirely empty criteria is
/// legal and matches every profile.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AdvancedCriteria {
    #[serde(default)]
    pub countries: Option<Vec<String>>,
    #[serde(default)]
    pub cities: Option<Vec<String>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub companies: Option<Vec<String>>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub experience_min: Option<f64>,
    #[serde(default)]
    pub experience_max: Option<f64>,
}

impl AdvancedCriteria {
    /// # Errors
    /// Rejects an inverted experience window.
    pub fn validate(&self) -> Result<(), SearchError> {
        check_window(self.experience_min, self.experience_max)
    }

    /// True when any experience bound is present, which forces the deferred
    /// post-computation stage.
    #[must_use]
    pub fn has_experience_window(&self) -> bool {
        self.experience_min.is_some() || self.experience_max.is_some()
    }
}

/// Skills-distribution grouping, optionally narrowed to one country.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionCriteria {
    #[serde(default)]
    pub country: Option<String>,
}

/// Batch skills check over a fixed set of profiles.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SkillsCheckCriteria {
    pub public_identifiers: Vec<String>,
    pub required_skills: Vec<String>,
}

impl SkillsCheckCriteria {
    /// # Errors
    /// Rejects empty identifier or skill lists, and identifier lists larger
    /// than the compiler's set-value bound (the check would otherwise be
    /// silently truncated).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.public_identifiers.is_empty() {
            return Err(SearchError::InvalidCriteria(
                "at least one public identifier is required".into(),
            ));
        }
        if self.public_identifiers.len() > crate::query::MAX_SET_VALUES {
            return Err(SearchError::InvalidCriteria(format!(
                "at most {} public identifiers per check",
                crate::query::MAX_SET_VALUES
            )));
        }
        require_skills(&self.required_skills)
    }
}

fn require_skills(skills: &[String]) -> Result<(), SearchError> {
    if skills.is_empty() || skills.iter().all(|s| s.trim().is_empty()) {
        return Err(SearchError::InvalidCriteria("at least one skill is required".into()));
    }
    Ok(())
}

fn check_window(min: Option<f64>, max: Option<f64>) -> Result<(), SearchError> {
    if let (Some(lo), Some(hi)) = (min, max)
        && hi < lo
    {
        return Err(SearchError::InvalidCriteria(format!(
            "max_years ({hi}) is below min_years ({lo})"
        )));
    }
    Ok(())
}
