use bson::Bson;
use serde::{Deserialize, Serialize};

// Safety limits to prevent resource abuse
pub(crate) const MAX_PATH_DEPTH: usize = 32;
pub(crate) const MAX_SET_VALUES: usize = 1000;
pub(crate) const MAX_LIMIT: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

/// A primitive match clause. One variant per filter shape the compiler can
/// emit; anything the store cannot express as a predicate (the derived
/// experience window) goes through [`DerivedStage`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Scalar exact match. A path that traverses an array of subdocuments
    /// (`experiences.company`) matches when any element matches.
    Eq { path: String, value: Bson },
    /// Conjunctive set containment: the document's array must hold every
    /// listed value (skills, languages).
    ContainsAll { path: String, values: Vec<Bson> },
    /// Set membership: the document's value (or any array element) must be
    /// one of the listed values (plural advanced-search fields).
    AnyOf { path: String, values: Vec<Bson> },
}

/// A pipeline stage that must run over the full match set before pagination,
/// because it changes which rows qualify or what they contain.
#[derive(Debug, Clone, PartialEq)]
pub enum DerivedStage {
    /// Compute each profile's total experience, keep totals inside the
    /// inclusive `[min, max]` window, and order by the total.
    TotalExperience { min: Option<f64>, max: Option<f64>, order: Order },
    /// Group matched profiles' skills and count occurrences per skill.
    SkillCounts,
}

/// Store-agnostic compiled query: a conjunctive match stage plus at most one
/// deferred derived stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPlan {
    pub predicates: Vec<Predicate>,
    pub derived: Option<DerivedStage>,
}

impl QueryPlan {
    /// A plan with no clauses, matching every document.
    #[must_use]
    pub fn match_all() -> Self {
        Self::default()
    }
}

/// Execution options for one store round-trip.
///
/// `timeout_ms` is the caller's deadline; exceeding it aborts the scan with
/// a timeout error rather than parking the request. `reference_year` pins
/// the "now" used for ongoing positions (defaults to the current year).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ExecOptions {
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub reference_year: Option<i32>,
}
