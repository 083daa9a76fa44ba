// core/src/store/memory.rs

//! In-process [`DocumentStore`] used by the test suites and by `IN_MEMORY_STORE=true` runs.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use super::{Document, DocumentId, DocumentStore, Filter, UpdateOutcome, ID_FIELD};
use crate::error::{StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
  collections: RwLock<HashMap<String, Vec<Document>>>,
  unique_indexes: RwLock<HashMap<String, Vec<Vec<String>>>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of documents currently held in `collection`.
  pub fn count(&self, collection: &str) -> usize {
    self.collections.read().get(collection).map_or(0, Vec::len)
  }

  fn violates_unique(&self, collection: &str, existing: &[Document], candidate: &Document) -> bool {
    let indexes = self.unique_indexes.read();
    let Some(field_sets) = indexes.get(collection) else {
      return false;
    };

    field_sets.iter().any(|fields| {
      let mut key = Filter::all();
      for field in fields {
        key = key.and_eq(field.clone(), candidate.get(field).cloned().unwrap_or(Value::Null));
      }
      existing.iter().any(|doc| key.matches(doc))
    })
  }
}

#[async_trait]
impl DocumentStore for MemoryStore {
  async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
    let collections = self.collections.read();
    Ok(
      collections
        .get(collection)
        .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)).cloned()),
    )
  }

  async fn find_many(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Document>> {
    let collections = self.collections.read();
    Ok(
      collections
        .get(collection)
        .map(|docs| docs.iter().filter(|doc| filter.matches(doc)).cloned().collect())
        .unwrap_or_default(),
    )
  }

  async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<DocumentId> {
    let mut ids = self.insert_many(collection, vec![document]).await?;
    ids
      .pop()
      .ok_or_else(|| StoreError::Conversion("insert produced no id".to_string()))
  }

  async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> StoreResult<Vec<DocumentId>> {
    let mut collections = self.collections.write();
    let docs = collections.entry(collection.to_string()).or_default();

    let mut ids = Vec::with_capacity(documents.len());
    for mut document in documents {
      if self.violates_unique(collection, &docs[..], &document) {
        return Err(StoreError::DuplicateKey {
          collection: collection.to_string(),
        });
      }
      let id = DocumentId::generate();
      document.insert(ID_FIELD.to_string(), Value::String(id.to_hex()));
      docs.push(document);
      ids.push(id);
    }

    debug!(collection, inserted = ids.len(), "memory store insert");
    Ok(ids)
  }

  async fn update_one(
    &self,
    collection: &str,
    filter: &Filter,
    changes: Document,
    upsert: bool,
  ) -> StoreResult<UpdateOutcome> {
    let mut collections = self.collections.write();
    let docs = collections.entry(collection.to_string()).or_default();

    if let Some(target) = docs.iter_mut().find(|doc| filter.matches(doc)) {
      let mut modified = false;
      for (field, value) in changes {
        if target.get(&field) != Some(&value) {
          target.insert(field, value);
          modified = true;
        }
      }
      return Ok(UpdateOutcome {
        matched_count: 1,
        modified_count: u64::from(modified),
        upserted_id: None,
      });
    }

    if !upsert {
      return Ok(UpdateOutcome::default());
    }

    let id = filter.id().unwrap_or_else(DocumentId::generate);
    let mut document: Document = filter.fields().map(|(k, v)| (k.to_string(), v.clone())).collect();
    document.extend(changes);
    document.insert(ID_FIELD.to_string(), Value::String(id.to_hex()));
    docs.push(document);

    Ok(UpdateOutcome {
      matched_count: 0,
      modified_count: 0,
      upserted_id: Some(id),
    })
  }

  async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
    let mut collections = self.collections.write();
    let Some(docs) = collections.get_mut(collection) else {
      return Ok(0);
    };
    match docs.iter().position(|doc| filter.matches(doc)) {
      Some(index) => {
        docs.remove(index);
        Ok(1)
      }
      None => Ok(0),
    }
  }

  async fn delete_many(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
    let mut collections = self.collections.write();
    let Some(docs) = collections.get_mut(collection) else {
      return Ok(0);
    };
    let before = docs.len();
    docs.retain(|doc| !filter.matches(doc));
    Ok((before - docs.len()) as u64)
  }

  async fn ensure_unique_index(&self, collection: &str, fields: &[&str]) -> StoreResult<()> {
    let fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();

    // Like a MongoDB index build, refuse when stored documents already collide.
    let collections = self.collections.read();
    if let Some(docs) = collections.get(collection) {
      let key_of = |doc: &Document| -> Vec<Value> {
        fields.iter().map(|f| doc.get(f).cloned().unwrap_or(Value::Null)).collect()
      };
      let collides = docs
        .iter()
        .enumerate()
        .any(|(i, a)| docs[i + 1..].iter().any(|b| key_of(a) == key_of(b)));
      if collides {
        return Err(StoreError::DuplicateKey {
          collection: collection.to_string(),
        });
      }
    }
    drop(collections);

    let mut indexes = self.unique_indexes.write();
    let entry = indexes.entry(collection.to_string()).or_default();
    if !entry.contains(&fields) {
      entry.push(fields);
    }
    Ok(())
  }

  async fn ping(&self) -> StoreResult<()> {
    Ok(())
  }

  async fn close(&self) {
    debug!("memory store closed");
  }
}
