use proptest::prelude::*;
use talentdb::experience::{Span, total_experience_years};

fn span_strategy() -> impl Strategy<Value = Span> {
    (proptest::option::of(1950i32..2030), proptest::option::of(1950i32..2030))
        .prop_map(|(start_year, end_year)| Span { start_year, end_year })
}

proptest! {
    #[test]
    fn prop_total_is_order_independent(spans in proptest::collection::vec(span_strategy(), 0..20)) {
        let forward = total_experience_years(&spans, 2024);
        let mut reversed = spans;
        reversed.reverse();
        prop_assert_eq!(forward, total_experience_years(&reversed, 2024));
    }

    #[test]
    fn prop_total_is_additive_over_concatenation(
        a in proptest::collection::vec(span_strategy(), 0..10),
        b in proptest::collection::vec(span_strategy(), 0..10),
    ) {
        let mut both = a.clone();
        both.extend(b.iter().copied());
        let sum = total_experience_years(&a, 2024) + total_experience_years(&b, 2024);
        prop_assert_eq!(total_experience_years(&both, 2024), sum);
    }

    #[test]
    fn prop_fully_dated_intervals_never_depend_on_reference_year(
        start in 1950i32..2030,
        end in 1950i32..2030,
        reference in 2000i32..2100,
    ) {
        let spans = [Span { start_year: Some(start), end_year: Some(end) }];
        prop_assert_eq!(
            total_experience_years(&spans, reference),
            f64::from(end - start)
        );
    }
}
