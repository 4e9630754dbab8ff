use bson::Document as BsonDocument;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::document::Document;
use crate::errors::SearchError;
use crate::profile::Profile;
use crate::query::{ExecOptions, QueryPlan, exec};
use crate::types::DocumentId;

/// Seam between the orchestrator and whatever holds the documents. The
/// orchestrator only ever needs these two calls; an unreachable backend
/// surfaces as `NotConnected`, a blown deadline as `Timeout`.
pub trait DocumentStore: Send + Sync {
    /// Executes the plan and returns one page of rows plus the count of all
    /// matching documents (independent of `skip`/`limit`).
    ///
    /// # Errors
    /// `Timeout` when the deadline in `opts` elapses; `NotConnected` when
    /// the backend is unreachable.
    fn execute(
        &self,
        plan: &QueryPlan,
        skip: usize,
        limit: usize,
        opts: &ExecOptions,
    ) -> Result<(Vec<BsonDocument>, usize), SearchError>;

    /// Count of all documents matching the plan.
    ///
    /// # Errors
    /// Same failure modes as [`DocumentStore::execute`].
    fn count(&self, plan: &QueryPlan, opts: &ExecOptions) -> Result<usize, SearchError>;
}

/// In-memory profile collection. Insertion order is kept but carries no
/// query semantics; result ordering is the executor's concern.
pub struct ProfileStore {
    pub name: Arc<RwLock<String>>,
    docs: RwLock<Vec<Document>>,
}

impl ProfileStore {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self { name: Arc::new(RwLock::new(name.to_string())), docs: RwLock::new(Vec::new()) }
    }

    pub fn insert(&self, document: Document) -> DocumentId {
        let id = document.id.clone();
        self.docs.write().push(document);
        id
    }

    /// Serializes and stores a typed profile.
    ///
    /// # Errors
    /// Returns an error if the profile cannot be encoded as BSON.
    pub fn insert_profile(&self, profile: &Profile) -> Result<DocumentId, SearchError> {
        Ok(self.insert(Document::new(profile.to_document()?)))
    }

    /// Snapshot of all stored documents. Clones the collection; queries are
    /// scans over uncurated feed data, so this stays simple rather than
    /// clever.
    #[must_use]
    pub fn documents(&self) -> Vec<Document> {
        self.docs.read().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }

    /// Returns the store's name as a String (cloned), hiding the `RwLock`.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.name.read().clone()
    }
}

impl DocumentStore for ProfileStore {
    fn execute(
        &self,
        plan: &QueryPlan,
        skip: usize,
        limit: usize,
        opts: &ExecOptions,
    ) -> Result<(Vec<BsonDocument>, usize), SearchError> {
        exec::execute(self, plan, skip, limit, opts)
    }

    fn count(&self, plan: &QueryPlan, opts: &ExecOptions) -> Result<usize, SearchError> {
        exec::count(self, plan, opts)
    }
}
