//! Derived total-experience computation.
//!
//! The source data is coarse and frequently malformed, so the policy here is
//! robustness over precision: every interval contributes `end_year -
//! start_year` whole years, a missing end counts up to the reference year
//! (ongoing position), a missing start contributes zero duration, and a
//! start year after the end year contributes a negative amount that is
//! deliberately not clamped. Nothing in this module returns an error.

use bson::{Bson, Document as BsonDocument};
use chrono::{DateTime, Datelike, Utc};

/// A single employment interval reduced to the years the calculator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

/// The current year, used as the effective bound for ongoing positions.
#[must_use]
pub fn reference_year() -> i32 {
    Utc::now().year()
}

/// Sums the contributions of all intervals. Order-independent; negative
/// contributions from bad data reduce the total rather than erroring.
#[must_use]
pub fn total_experience_years(spans: &[Span], reference_year: i32) -> f64 {
    spans
        .iter()
        .map(|s| {
            let end = s.end_year.unwrap_or(reference_year);
            let start = s.start_year.unwrap_or(reference_year);
            f64::from(end - start)
        })
        .sum()
}

/// Extracts employment spans from a stored profile document. Entries that
/// are not subdocuments, and date bounds that carry no usable year, are
/// skipped or treated as absent rather than rejected.
#[must_use]
pub fn spans_from_document(doc: &BsonDocument) -> Vec<Span> {
    let Ok(entries) = doc.get_array("experiences") else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|e| match e {
            Bson::Document(d) => Some(Span {
                start_year: d.get("starts_at").and_then(year_of),
                end_year: d.get("ends_at").and_then(year_of),
            }),
            _ => None,
        })
        .collect()
}

/// Reads a year out of either date shape the source feed produces: a
/// `{day, month, year}` subdocument or a raw BSON datetime.
fn year_of(v: &Bson) -> Option<i32> {
    match v {
        Bson::Document(d) => match d.get("year") {
            Some(Bson::Int32(y)) => Some(*y),
            Some(Bson::Int64(y)) => i32::try_from(*y).ok(),
            Some(Bson::Double(y)) => Some(*y as i32),
            _ => None,
        },
        Bson::DateTime(dt) => {
            DateTime::from_timestamp_millis(dt.timestamp_millis()).map(|t| t.year())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn ongoing_position_counts_to_reference_year() {
        let spans = vec![
            Span { start_year: Some(2018), end_year: Some(2020) },
            Span { start_year: Some(2020), end_year: None },
        ];
        assert_eq!(total_experience_years(&spans, 2024), 6.0);
    }

    #[test]
    fn missing_start_contributes_negative_when_end_is_past() {
        // Documented policy: the malformed-start contribution is end - now,
        // not zero, and it is not clamped.
        let spans = vec![Span { start_year: None, end_year: Some(2020) }];
        assert_eq!(total_experience_years(&spans, 2024), -4.0);
    }

    #[test]
    fn empty_history_is_zero() {
        assert_eq!(total_experience_years(&[], 2024), 0.0);
    }

    #[test]
    fn order_independent() {
        let a = vec![
            Span { start_year: Some(2010), end_year: Some(2015) },
            Span { start_year: Some(2016), end_year: None },
            Span { start_year: None, end_year: None },
        ];
        let mut b = a.clone();
        b.reverse();
        assert_eq!(total_experience_years(&a, 2024), total_experience_years(&b, 2024));
    }

    #[test]
    fn spans_read_both_date_shapes() {
        let doc = doc! {"experiences": [
            {"company": "A", "title": "x", "starts_at": {"day": 1, "month": 2, "year": 2019}, "ends_at": null},
            {"company": "B", "title": "y", "starts_at": bson::DateTime::from_millis(1_577_836_800_000), "ends_at": {"day": 1, "month": 1, "year": 2022}},
            "not-a-document",
        ]};
        let spans = spans_from_document(&doc);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], Span { start_year: Some(2019), end_year: None });
        // 1_577_836_800_000 ms = 2020-01-01T00:00:00Z
        assert_eq!(spans[1], Span { start_year: Some(2020), end_year: Some(2022) });
    }

    #[test]
    fn no_experiences_field_yields_no_spans() {
        assert!(spans_from_document(&doc! {"full_name": "X"}).is_empty());
    }
}
