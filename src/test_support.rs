//! Fixture profiles shared by unit and integration tests.

use fake::Fake;
use fake::faker::name::en::Name;

use crate::profile::{DateInfo, ExperienceEntry, Profile};

#[must_use]
pub fn entry(company: &str, title: &str, start: Option<i32>, end: Option<i32>) -> ExperienceEntry {
    ExperienceEntry {
        company: company.to_string(),
        title: title.to_string(),
        starts_at: start.map(DateInfo::year),
        ends_at: end.map(DateInfo::year),
        location: None,
        description: None,
    }
}

#[must_use]
pub fn profile(
    pid: &str,
    name: &str,
    country: &str,
    city: &str,
    skills: &[&str],
    languages: &[&str],
    experiences: Vec<ExperienceEntry>,
) -> Profile {
    Profile {
        public_identifier: pid.to_string(),
        full_name: name.to_string(),
        country_full_name: Some(country.to_string()),
        city: Some(city.to_string()),
        skills: skills.iter().map(ToString::to_string).collect(),
        languages: languages.iter().map(ToString::to_string).collect(),
        experiences,
        ..Profile::default()
    }
}

/// A small deterministic corpus. Totals at reference year 2024:
/// alice 6, bruno 8, carla 12, dmitri 8, elena 0.
#[must_use]
pub fn sample_profiles() -> Vec<Profile> {
    vec![
        profile(
            "alice",
            "Alice Martin",
            "France",
            "Paris",
            &["Python", "SQL"],
            &["English", "French"],
            vec![
                entry("Acme", "Engineer", Some(2018), Some(2020)),
                entry("Globex", "Senior Engineer", Some(2020), None),
            ],
        ),
        profile(
            "bruno",
            "Bruno Leroy",
            "France",
            "Lyon",
            &["Python", "Go"],
            &["French"],
            vec![
                entry("Acme", "Analyst", Some(2010), Some(2015)),
                entry("Initech", "Consultant", Some(2015), Some(2018)),
            ],
        ),
        profile(
            "carla",
            "Carla Ruiz",
            "Spain",
            "Madrid",
            &["Java"],
            &["Spanish", "English"],
            vec![entry("Globex", "Manager", Some(2012), None)],
        ),
        profile(
            "dmitri",
            "Dmitri Pavlov",
            "Germany",
            "Berlin",
            &["Python", "SQL", "Go"],
            &["German", "English"],
            vec![entry("Acme", "Engineer", Some(2016), None)],
        ),
        profile("elena", "Elena Rossi", "France", "Paris", &["SQL"], &["Italian"], vec![]),
    ]
}

/// Throwaway profiles for pagination-heavy tests. Identifiers are zero
/// padded so lexicographic order matches numeric order.
#[must_use]
pub fn filler_profiles(n: usize) -> Vec<Profile> {
    (0..n)
        .map(|i| {
            profile(
                &format!("filler-{i:04}"),
                &Name().fake::<String>(),
                "France",
                "Paris",
                &["Python"],
                &["French"],
                vec![entry("Acme", "Engineer", Some(2020), None)],
            )
        })
        .collect()
}
