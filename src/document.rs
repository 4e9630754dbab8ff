use crate::types::DocumentId;
use bson::Document as BsonDocument;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored profile record: an opaque BSON payload plus store bookkeeping.
/// The query engine only ever reads `data`; documents are never mutated by
/// the search path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub data: BsonDocument,
    pub created_at: DateTime<Utc>,
}

impl Document {
    #[must_use]
    pub fn new(data: BsonDocument) -> Self {
        Self { id: DocumentId::new(), data, created_at: Utc::now() }
    }
}
