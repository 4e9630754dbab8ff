use crate::errors::SearchError;
use bson::Document as BsonDocument;
use serde::{Deserialize, Serialize};

/// Coarse date shape carried by the source data. Month/day are present but
/// the query engine only ever reads `year`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInfo {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl DateInfo {
    #[must_use]
    pub const fn year(year: i32) -> Self {
        Self { day: 1, month: 1, year }
    }
}

/// One position in a profile's employment history. `ends_at: None` means the
/// position is ongoing. `starts_at <= ends_at` is expected but not enforced;
/// malformed intervals degrade the computed experience instead of erroring.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub starts_at: Option<DateInfo>,
    #[serde(default)]
    pub ends_at: Option<DateInfo>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Education {
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub degree_name: Option<String>,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub starts_at: Option<DateInfo>,
    #[serde(default)]
    pub ends_at: Option<DateInfo>,
}

/// A professional profile as ingested from the source feed. Owned by the
/// store; the query engine reads it and never writes it back.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub public_identifier: String,
    pub full_name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_full_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub experiences: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<Education>,
}

impl Profile {
    /// Serializes the profile into the BSON shape the store holds.
    ///
    /// # Errors
    /// Returns an error if the profile cannot be encoded as BSON.
    pub fn to_document(&self) -> Result<BsonDocument, SearchError> {
        let bytes = bson::serialize_to_vec(self)?;
        Ok(bson::deserialize_from_slice(&bytes)?)
    }

    /// Rebuilds a typed profile from a stored document.
    ///
    /// # Errors
    /// Returns an error if mandatory fields are missing or mistyped.
    pub fn from_document(doc: &BsonDocument) -> Result<Self, SearchError> {
        let bytes = bson::serialize_to_vec(doc)?;
        Ok(bson::deserialize_from_slice(&bytes)?)
    }
}

/// Minimal projection returned by the plain search operations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileBrief {
    pub full_name: String,
    pub public_identifier: String,
}

impl ProfileBrief {
    #[must_use]
    pub fn from_document(doc: &BsonDocument) -> Self {
        Self {
            full_name: doc.get_str("full_name").unwrap_or_default().to_string(),
            public_identifier: doc.get_str("public_identifier").unwrap_or_default().to_string(),
        }
    }
}

/// Projection for company search: the brief fields plus the title held at
/// the matched company.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileWithTitle {
    pub full_name: String,
    pub public_identifier: String,
    pub title: Option<String>,
}

/// Projection for experience search: the brief fields plus the derived
/// total, in whole years (fractional totals are allowed by the contract).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileExperience {
    pub full_name: String,
    pub public_identifier: String,
    pub total_experience: f64,
}

impl ProfileExperience {
    #[must_use]
    pub fn from_document(doc: &BsonDocument) -> Self {
        Self {
            full_name: doc.get_str("full_name").unwrap_or_default().to_string(),
            public_identifier: doc.get_str("public_identifier").unwrap_or_default().to_string(),
            total_experience: doc.get_f64("total_experience").unwrap_or_default(),
        }
    }
}

/// One row of the skills-distribution result set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SkillCount {
    pub skill: String,
    pub count: u64,
}

/// Per-profile outcome of a skills check: whether the profile holds every
/// required skill, and which of the required skills it does hold.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SkillsReport {
    pub full_name: String,
    pub public_identifier: String,
    pub has_skills: bool,
    pub matching_skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_bson_round_trip() {
        let p = Profile {
            public_identifier: "jane-doe".into(),
            full_name: "Jane Doe".into(),
            country_full_name: Some("France".into()),
            city: Some("Paris".into()),
            skills: vec!["Python".into(), "SQL".into()],
            experiences: vec![ExperienceEntry {
                company: "Acme".into(),
                title: "Engineer".into(),
                starts_at: Some(DateInfo::year(2018)),
                ends_at: None,
                location: None,
                description: None,
            }],
            ..Profile::default()
        };
        let doc = p.to_document().unwrap();
        assert_eq!(doc.get_str("public_identifier").unwrap(), "jane-doe");
        let back = Profile::from_document(&doc).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn brief_tolerates_missing_fields() {
        let b = ProfileBrief::from_document(&bson::doc! {"full_name": "X"});
        assert_eq!(b.full_name, "X");
        assert_eq!(b.public_identifier, "");
    }
}
