//! Filter Compiler: turns typed criteria into a store-agnostic [`QueryPlan`].
//!
//! Scalar fields compile to exact-match predicates, skills/languages to
//! conjunctive containment, the plural advanced-search fields to any-of
//! membership. Experience bounds never compile to a predicate: the total is
//! a derived value, so they always become a deferred [`DerivedStage`].

use bson::Bson;

use crate::criteria::{
    AdvancedCriteria, CitySkillsCriteria, CompanyCriteria, CountrySkillsCriteria,
    DistributionCriteria, ExperienceCriteria, SkillsCheckCriteria,
};

use super::plan::{DerivedStage, MAX_SET_VALUES, Order, Predicate, QueryPlan};

pub fn compile_country_skills(criteria: &CountrySkillsCriteria) -> QueryPlan {
    QueryPlan {
        predicates: vec![
            eq("country_full_name", &criteria.country),
            contains_all("skills", &criteria.skills),
        ],
        derived: None,
    }
}

pub fn compile_city_skills(criteria: &CitySkillsCriteria) -> QueryPlan {
    QueryPlan {
        predicates: vec![eq("city", &criteria.city), contains_all("skills", &criteria.skills)],
        derived: None,
    }
}

pub fn compile_experience(criteria: &ExperienceCriteria) -> QueryPlan {
    let mut predicates = Vec::new();
    if let Some(country) = non_empty(criteria.country.as_deref()) {
        predicates.push(eq("country_full_name", country));
    }
    if let Some(skills) = non_empty_list(criteria.skills.as_deref()) {
        predicates.push(contains_all("skills", skills));
    }
    QueryPlan {
        predicates,
        derived: Some(DerivedStage::TotalExperience {
            min: criteria.min_years,
            max: criteria.max_years,
            order: criteria.sort.unwrap_or(Order::Desc),
        }),
    }
}

pub fn compile_company(criteria: &CompanyCriteria) -> QueryPlan {
    QueryPlan { predicates: vec![eq("experiences.company", &criteria.company)], derived: None }
}

pub fn compile_advanced(criteria: &AdvancedCriteria) -> QueryPlan {
    let mut predicates = Vec::new();
    if let Some(countries) = non_empty_list(criteria.countries.as_deref()) {
        predicates.push(any_of("country_full_name", countries));
    }
    if let Some(cities) = non_empty_list(criteria.cities.as_deref()) {
        predicates.push(any_of("city", cities));
    }
    if let Some(skills) = non_empty_list(criteria.skills.as_deref()) {
        predicates.push(contains_all("skills", skills));
    }
    if let Some(companies) = non_empty_list(criteria.companies.as_deref()) {
        predicates.push(any_of("experiences.company", companies));
    }
    if let Some(languages) = non_empty_list(criteria.languages.as_deref()) {
        predicates.push(contains_all("languages", languages));
    }
    let derived = criteria.has_experience_window().then(|| DerivedStage::TotalExperience {
        min: criteria.experience_min,
        max: criteria.experience_max,
        order: Order::Desc,
    });
    QueryPlan { predicates, derived }
}

pub fn compile_distribution(criteria: &DistributionCriteria) -> QueryPlan {
    let mut predicates = Vec::new();
    if let Some(country) = non_empty(criteria.country.as_deref()) {
        predicates.push(eq("country_full_name", country));
    }
    QueryPlan { predicates, derived: Some(DerivedStage::SkillCounts) }
}

pub fn compile_skills_check(criteria: &SkillsCheckCriteria) -> QueryPlan {
    QueryPlan {
        predicates: vec![any_of("public_identifier", &criteria.public_identifiers)],
        derived: None,
    }
}

pub fn compile_identifier(public_identifier: &str) -> QueryPlan {
    QueryPlan { predicates: vec![eq("public_identifier", public_identifier)], derived: None }
}

fn eq(path: &str, value: &str) -> Predicate {
    Predicate::Eq { path: path.to_string(), value: Bson::String(value.to_string()) }
}

fn contains_all(path: &str, values: &[String]) -> Predicate {
    Predicate::ContainsAll { path: path.to_string(), values: to_bson_set(values) }
}

fn any_of(path: &str, values: &[String]) -> Predicate {
    Predicate::AnyOf { path: path.to_string(), values: to_bson_set(values) }
}

fn to_bson_set(values: &[String]) -> Vec<Bson> {
    values.iter().take(MAX_SET_VALUES).map(|v| Bson::String(v.clone())).collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty_list(values: Option<&[String]>) -> Option<&[String]> {
    values.filter(|v| !v.is_empty())
}
