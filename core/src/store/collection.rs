// core/src/store/collection.rs
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::error;

use super::{Document, DocumentId, DocumentStore, Filter, UpdateOutcome};
use crate::error::{StoreError, StoreResult};

/// A [`DocumentStore`] bound to one collection name.
///
/// Every call is bounded by `timeout`; a hung store call fails with
/// [`StoreError::Timeout`]. Failures other than duplicate keys are logged here
/// in full, since callers only see a generic message.
#[derive(Clone)]
pub struct Collection {
  store: Arc<dyn DocumentStore>,
  name: Arc<str>,
  timeout: Duration,
}

impl Collection {
  pub fn new(store: Arc<dyn DocumentStore>, name: impl Into<Arc<str>>, timeout: Duration) -> Self {
    Self {
      store,
      name: name.into(),
      timeout,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  async fn bounded<T, F>(&self, operation: &'static str, call: F) -> StoreResult<T>
  where
    F: Future<Output = StoreResult<T>>,
  {
    let result = match tokio::time::timeout(self.timeout, call).await {
      Ok(inner) => inner,
      Err(_) => Err(StoreError::Timeout {
        collection: self.name.to_string(),
        elapsed: self.timeout,
      }),
    };

    if let Err(e) = &result {
      if !matches!(e, StoreError::DuplicateKey { .. }) {
        error!(collection = %self.name, operation, error = %e, "Store call failed");
      }
    }
    result
  }

  pub async fn find_one(&self, filter: &Filter) -> StoreResult<Option<Document>> {
    self.bounded("find_one", self.store.find_one(&self.name, filter)).await
  }

  pub async fn find_many(&self, filter: &Filter) -> StoreResult<Vec<Document>> {
    self.bounded("find_many", self.store.find_many(&self.name, filter)).await
  }

  pub async fn insert_one(&self, document: Document) -> StoreResult<DocumentId> {
    self.bounded("insert_one", self.store.insert_one(&self.name, document)).await
  }

  pub async fn insert_many(&self, documents: Vec<Document>) -> StoreResult<Vec<DocumentId>> {
    self
      .bounded("insert_many", self.store.insert_many(&self.name, documents))
      .await
  }

  pub async fn update_one(&self, filter: &Filter, changes: Document, upsert: bool) -> StoreResult<UpdateOutcome> {
    self
      .bounded("update_one", self.store.update_one(&self.name, filter, changes, upsert))
      .await
  }

  pub async fn delete_one(&self, filter: &Filter) -> StoreResult<u64> {
    self.bounded("delete_one", self.store.delete_one(&self.name, filter)).await
  }

  pub async fn delete_many(&self, filter: &Filter) -> StoreResult<u64> {
    self.bounded("delete_many", self.store.delete_many(&self.name, filter)).await
  }

  pub async fn ensure_unique_index(&self, fields: &[&str]) -> StoreResult<()> {
    self
      .bounded("ensure_unique_index", self.store.ensure_unique_index(&self.name, fields))
      .await
  }
}
