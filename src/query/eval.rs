use bson::{Bson, Document as BsonDocument};

use super::plan::{MAX_PATH_DEPTH, Predicate};

/// True when the document satisfies every predicate (conjunctive match
/// stage). An empty predicate list matches everything.
pub fn matches(doc: &BsonDocument, predicates: &[Predicate]) -> bool {
    predicates.iter().all(|p| eval_predicate(doc, p))
}

pub fn eval_predicate(doc: &BsonDocument, pred: &Predicate) -> bool {
    match pred {
        Predicate::Eq { path, value } => leaf_values(doc, path).iter().any(|v| *v == value),
        Predicate::AnyOf { path, values } => {
            leaf_values(doc, path).iter().any(|v| values.contains(v))
        }
        Predicate::ContainsAll { path, values } => {
            let leaves = leaf_values(doc, path);
            values.iter().all(|want| leaves.iter().any(|have| *have == want))
        }
    }
}

/// Resolves a dotted path against the document, descending into arrays the
/// way a document store does: an intermediate array applies the remaining
/// path to each element, and a leaf array is flattened into its elements.
fn leaf_values<'a>(doc: &'a BsonDocument, path: &str) -> Vec<&'a Bson> {
    let parts: Vec<&str> = path.split('.').collect();
    let mut out = Vec::new();
    if parts.is_empty() || parts.len() > MAX_PATH_DEPTH {
        return out;
    }
    if let Some(v) = doc.get(parts[0]) {
        collect(v, &parts[1..], &mut out);
    }
    out
}

fn collect<'a>(value: &'a Bson, parts: &[&str], out: &mut Vec<&'a Bson>) {
    if parts.is_empty() {
        match value {
            Bson::Array(items) => out.extend(items.iter()),
            other => out.push(other),
        }
        return;
    }
    match value {
        Bson::Document(d) => {
            if let Some(v) = d.get(parts[0]) {
                collect(v, &parts[1..], out);
            }
        }
        Bson::Array(items) => {
            for item in items {
                collect(item, parts, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    fn profile() -> BsonDocument {
        doc! {
            "public_identifier": "jane-doe",
            "country_full_name": "France",
            "city": "Paris",
            "skills": ["Python", "SQL"],
            "experiences": [
                {"company": "Acme", "title": "Engineer"},
                {"company": "Globex", "title": "Lead"},
            ],
        }
    }

    #[test]
    fn eq_on_scalar_field() {
        let p = Predicate::Eq { path: "city".into(), value: "Paris".into() };
        assert!(eval_predicate(&profile(), &p));
        let p = Predicate::Eq { path: "city".into(), value: "Lyon".into() };
        assert!(!eval_predicate(&profile(), &p));
    }

    #[test]
    fn eq_descends_into_array_of_subdocuments() {
        let p = Predicate::Eq { path: "experiences.company".into(), value: "Globex".into() };
        assert!(eval_predicate(&profile(), &p));
        let p = Predicate::Eq { path: "experiences.company".into(), value: "Initech".into() };
        assert!(!eval_predicate(&profile(), &p));
    }

    #[test]
    fn contains_all_is_conjunctive() {
        let all = |skills: &[&str]| Predicate::ContainsAll {
            path: "skills".into(),
            values: skills.iter().map(|s| Bson::String((*s).to_string())).collect(),
        };
        assert!(eval_predicate(&profile(), &all(&["Python"])));
        assert!(eval_predicate(&profile(), &all(&["Python", "SQL"])));
        assert!(!eval_predicate(&profile(), &all(&["Python", "Go"])));
    }

    #[test]
    fn any_of_matches_membership() {
        let p = Predicate::AnyOf {
            path: "country_full_name".into(),
            values: vec!["Spain".into(), "France".into()],
        };
        assert!(eval_predicate(&profile(), &p));
        let p = Predicate::AnyOf { path: "country_full_name".into(), values: vec!["Spain".into()] };
        assert!(!eval_predicate(&profile(), &p));
    }

    #[test]
    fn missing_field_never_matches() {
        let p = Predicate::Eq { path: "headline".into(), value: "x".into() };
        assert!(!eval_predicate(&profile(), &p));
    }

    #[test]
    fn empty_predicate_list_matches_all() {
        assert!(matches(&profile(), &[]));
    }
}
