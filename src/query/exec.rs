//! Query plan executor.
//!
//! The one ordering rule that everything here serves: filter before
//! paginate. The full match set, including any derived stage, is computed
//! before the `skip`/`limit` slice is taken, and the returned total always
//! reflects every matching document.

use bson::{Bson, Document as BsonDocument, doc};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::errors::SearchError;
use crate::experience;
use crate::store::ProfileStore;

use super::eval;
use super::plan::{DerivedStage, ExecOptions, MAX_LIMIT, Order, QueryPlan};

/// Runs the plan against the store and returns one page of rows plus the
/// total match count. Rows are full profile documents, with a
/// `total_experience` field injected when the experience stage ran, or
/// `{skill, count}` documents for the grouping stage.
///
/// # Errors
/// Returns `Timeout` when the caller deadline elapses mid-scan.
pub fn execute(
    store: &ProfileStore,
    plan: &QueryPlan,
    skip: usize,
    limit: usize,
    opts: &ExecOptions,
) -> Result<(Vec<BsonDocument>, usize), SearchError> {
    let start = Instant::now();
    let deadline = opts.timeout_ms.map(|ms| start + Duration::from_millis(ms));

    let mut matched: Vec<BsonDocument> = Vec::new();
    for doc in store.documents() {
        check_deadline(deadline)?;
        if eval::matches(&doc.data, &plan.predicates) {
            matched.push(doc.data);
        }
    }

    let rows = match &plan.derived {
        None => {
            matched.sort_by(|a, b| identifier(a).cmp(identifier(b)));
            matched
        }
        Some(DerivedStage::TotalExperience { min, max, order }) => {
            experience_stage(matched, *min, *max, *order, opts, deadline)?
        }
        Some(DerivedStage::SkillCounts) => skill_counts_stage(&matched),
    };

    let total = rows.len();
    let limit = limit.min(MAX_LIMIT);
    let end = skip.saturating_add(limit).min(rows.len());
    let page = if skip >= rows.len() { Vec::new() } else { rows[skip..end].to_vec() };
    log::debug!(
        "executed plan: clauses={} derived={} total={} returned={} skip={} limit={} duration_ms={}",
        plan.predicates.len(),
        plan.derived.is_some(),
        total,
        page.len(),
        skip,
        limit,
        start.elapsed().as_millis()
    );
    Ok((page, total))
}

/// Count of all documents matching the plan, independent of pagination.
///
/// # Errors
/// Returns `Timeout` when the caller deadline elapses mid-scan.
pub fn count(store: &ProfileStore, plan: &QueryPlan, opts: &ExecOptions) -> Result<usize, SearchError> {
    execute(store, plan, 0, 0, opts).map(|(_, total)| total)
}

fn experience_stage(
    matched: Vec<BsonDocument>,
    min: Option<f64>,
    max: Option<f64>,
    order: Order,
    opts: &ExecOptions,
    deadline: Option<Instant>,
) -> Result<Vec<BsonDocument>, SearchError> {
    let reference_year = opts.reference_year.unwrap_or_else(experience::reference_year);
    let mut rows = Vec::with_capacity(matched.len());
    for mut doc in matched {
        check_deadline(deadline)?;
        let spans = experience::spans_from_document(&doc);
        let total = experience::total_experience_years(&spans, reference_year);
        if min.is_some_and(|lo| total < lo) || max.is_some_and(|hi| total > hi) {
            continue;
        }
        doc.insert("total_experience", Bson::Double(total));
        rows.push((total, doc));
    }
    rows.sort_by(|(ta, a), (tb, b)| {
        let ord = match order {
            Order::Asc => ta.total_cmp(tb),
            Order::Desc => tb.total_cmp(ta),
        };
        ord.then_with(|| identifier(a).cmp(identifier(b)))
    });
    Ok(rows.into_iter().map(|(_, doc)| doc).collect())
}

fn skill_counts_stage(matched: &[BsonDocument]) -> Vec<BsonDocument> {
    // Per-request accumulation only; nothing survives the call.
    let mut counts: BTreeMap<String, i64> = BTreeMap::new();
    for doc in matched {
        if let Ok(skills) = doc.get_array("skills") {
            for skill in skills {
                if let Bson::String(s) = skill {
                    *counts.entry(s.clone()).or_insert(0) += 1;
                }
            }
        }
    }
    let mut rows: Vec<(String, i64)> = counts.into_iter().collect();
    // Count descending; the BTreeMap already yields skills ascending, and
    // the explicit tie-break keeps that stable across calls.
    rows.sort_by(|(sa, ca), (sb, cb)| cb.cmp(ca).then_with(|| sa.cmp(sb)));
    rows.into_iter().map(|(skill, count)| doc! {"skill": skill, "count": count}).collect()
}

fn identifier(doc: &BsonDocument) -> &str {
    doc.get_str("public_identifier").unwrap_or_default()
}

fn check_deadline(deadline: Option<Instant>) -> Result<(), SearchError> {
    if let Some(dl) = deadline
        && Instant::now() > dl
    {
        return Err(SearchError::Timeout);
    }
    Ok(())
}
