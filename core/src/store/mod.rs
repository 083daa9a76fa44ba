// core/src/store/mod.rs

//! The document store seam.
//!
//! Handlers never talk to a database driver directly. They go through
//! [`DocumentStore`], which speaks JSON maps ([`Document`]) and a small
//! equality-only [`Filter`]. Two implementations ship with the crate:
//!  - [`MongoStore`]: the production backend (MongoDB via the official driver).
//!  - [`MemoryStore`]: an in-process backend used by tests and local runs.
//!
//! [`Collection`] binds a store to one collection name and applies the
//! per-call timeout.

pub mod collection;
pub mod filter;
pub mod id;
pub mod memory;
pub mod mongo;

use async_trait::async_trait;

use crate::error::StoreResult;

pub use collection::Collection;
pub use filter::Filter;
pub use id::DocumentId;
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// A schema-less record. `_id` is always rendered as a hex string.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Field name of the store-assigned identifier.
pub const ID_FIELD: &str = "_id";

/// Outcome of an `update_one` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
  pub matched_count: u64,
  pub modified_count: u64,
  pub upserted_id: Option<DocumentId>,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
  async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>>;

  async fn find_many(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Document>>;

  async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<DocumentId>;

  /// Inserts all documents, returning their ids in input order.
  async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> StoreResult<Vec<DocumentId>>;

  /// Overwrites the given top-level fields on the first match (`$set` semantics).
  async fn update_one(
    &self,
    collection: &str,
    filter: &Filter,
    changes: Document,
    upsert: bool,
  ) -> StoreResult<UpdateOutcome>;

  async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<u64>;

  async fn delete_many(&self, collection: &str, filter: &Filter) -> StoreResult<u64>;

  /// Makes the combination of `fields` unique within `collection`.
  /// Later inserts that collide fail with `StoreError::DuplicateKey`, and so
  /// does this call when stored documents already collide (no index is made).
  async fn ensure_unique_index(&self, collection: &str, fields: &[&str]) -> StoreResult<()>;

  async fn ping(&self) -> StoreResult<()>;

  /// Releases the underlying connection. The store must not be used afterwards.
  async fn close(&self);
}
