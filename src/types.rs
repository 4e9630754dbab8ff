use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier assigned by the store on insert. Distinct from a
/// profile's `public_identifier`, which is caller-supplied data.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}
