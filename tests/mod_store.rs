use bson::Document as BsonDocument;
use talentdb::criteria::CountrySkillsCriteria;
use talentdb::errors::SearchError;
use talentdb::page::PageRequest;
use talentdb::query::{ExecOptions, QueryPlan};
use talentdb::search;
use talentdb::store::DocumentStore;

/// Store double for an unreachable backend.
struct UnreachableStore;

impl DocumentStore for UnreachableStore {
    fn execute(
        &self,
        _plan: &QueryPlan,
        _skip: usize,
        _limit: usize,
        _opts: &ExecOptions,
    ) -> Result<(Vec<BsonDocument>, usize), SearchError> {
        Err(SearchError::NotConnected)
    }

    fn count(&self, _plan: &QueryPlan, _opts: &ExecOptions) -> Result<usize, SearchError> {
        Err(SearchError::NotConnected)
    }
}

#[test]
fn store_unavailability_propagates_unretried() {
    let res = search::search_by_country_and_skills(
        &UnreachableStore,
        &CountrySkillsCriteria { country: "France".into(), skills: vec!["Python".into()] },
        PageRequest::default(),
        &ExecOptions::default(),
    );
    assert!(matches!(res, Err(SearchError::NotConnected)));
}

#[test]
fn invalid_criteria_is_rejected_before_the_store_is_touched() {
    // UnreachableStore fails every call, so an InvalidCriteria result proves
    // validation ran first.
    let res = search::search_by_country_and_skills(
        &UnreachableStore,
        &CountrySkillsCriteria { country: "France".into(), skills: vec![] },
        PageRequest::default(),
        &ExecOptions::default(),
    );
    assert!(matches!(res, Err(SearchError::InvalidCriteria(_))));
}

#[test]
fn blown_deadline_surfaces_as_timeout() {
    let mut idx = talentdb::ProfileIndex::new();
    for p in talentdb::test_support::filler_profiles(50) {
        idx.insert_profile(&p).unwrap();
    }
    idx.set_deadline_ms(0);
    let res = idx.search_by_country_and_skills(
        &CountrySkillsCriteria { country: "France".into(), skills: vec!["Python".into()] },
        PageRequest::default(),
    );
    assert!(matches!(res, Err(SearchError::Timeout)));
}
