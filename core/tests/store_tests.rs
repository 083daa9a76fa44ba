// tests/store_tests.rs
mod common;
use common::*;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use product_db::store::{Collection, UpdateOutcome};
use product_db::{
  ApiError, Catalog, CollectionNames, Document, DocumentId, DocumentStore, Filter, MemoryStore, StoreError,
  StoreResult,
};
use serde_json::json;

/// A store whose reads never come back.
struct HungStore;

#[async_trait]
impl DocumentStore for HungStore {
  async fn find_one(&self, _: &str, _: &Filter) -> StoreResult<Option<Document>> {
    std::future::pending().await
  }
  async fn find_many(&self, _: &str, _: &Filter) -> StoreResult<Vec<Document>> {
    std::future::pending().await
  }
  async fn insert_one(&self, _: &str, _: Document) -> StoreResult<DocumentId> {
    Ok(DocumentId::generate())
  }
  async fn insert_many(&self, _: &str, docs: Vec<Document>) -> StoreResult<Vec<DocumentId>> {
    Ok(docs.iter().map(|_| DocumentId::generate()).collect())
  }
  async fn update_one(&self, _: &str, _: &Filter, _: Document, _: bool) -> StoreResult<UpdateOutcome> {
    Ok(UpdateOutcome::default())
  }
  async fn delete_one(&self, _: &str, _: &Filter) -> StoreResult<u64> {
    Ok(0)
  }
  async fn delete_many(&self, _: &str, _: &Filter) -> StoreResult<u64> {
    Ok(0)
  }
  async fn ensure_unique_index(&self, _: &str, _: &[&str]) -> StoreResult<()> {
    Ok(())
  }
  async fn ping(&self) -> StoreResult<()> {
    Ok(())
  }
  async fn close(&self) {}
}

#[tokio::test]
async fn test_hung_store_call_times_out() {
  setup_tracing();
  let collection = Collection::new(Arc::new(HungStore), "brandsProduct", Duration::from_millis(20));

  match collection.find_many(&Filter::all()).await {
    Err(StoreError::Timeout { collection, elapsed }) => {
      assert_eq!(collection, "brandsProduct");
      assert_eq!(elapsed, Duration::from_millis(20));
    }
    other => panic!("Expected timeout, got {:?}", other),
  }
}

#[tokio::test]
async fn test_timeout_surfaces_as_store_error() {
  setup_tracing();
  let catalog = Catalog::new(Arc::new(HungStore), &CollectionNames::default(), Duration::from_millis(20));

  let err = catalog.products.list().await.unwrap_err();
  assert!(matches!(err, ApiError::Store(StoreError::Timeout { .. })));
  assert_eq!(err.public_message(), "Internal error");
}

#[tokio::test]
async fn test_memory_upsert_inserts_filter_fields_and_changes() {
  setup_tracing();
  let store = MemoryStore::new();
  let filter = Filter::field_eq("userId", "u1").and_eq("productId", "p1");

  let outcome = store
    .update_one("Cart", &filter, doc(json!({ "quantity": 2 })), true)
    .await
    .unwrap();
  assert_eq!(outcome.matched_count, 0);
  let upserted = outcome.upserted_id.expect("upsert assigns an id");

  let stored = store.find_one("Cart", &Filter::by_id(upserted)).await.unwrap().unwrap();
  assert_eq!(stored["userId"], json!("u1"));
  assert_eq!(stored["productId"], json!("p1"));
  assert_eq!(stored["quantity"], json!(2));
}

#[tokio::test]
async fn test_memory_update_reports_unmodified_when_values_equal() {
  setup_tracing();
  let store = MemoryStore::new();
  let id = store.insert_one("brand", doc(json!({ "name": "Nike" }))).await.unwrap();

  let outcome = store
    .update_one("brand", &Filter::by_id(id), doc(json!({ "name": "Nike" })), false)
    .await
    .unwrap();
  assert_eq!(outcome.matched_count, 1);
  assert_eq!(outcome.modified_count, 0);
}

#[tokio::test]
async fn test_memory_collections_are_independent() {
  setup_tracing();
  let store = MemoryStore::new();
  store.insert_one("brand", doc(json!({ "name": "Nike" }))).await.unwrap();

  assert_eq!(store.count("brand"), 1);
  assert_eq!(store.count("Cart"), 0);
  assert_eq!(store.delete_many("Cart", &Filter::all()).await.unwrap(), 0);
  assert!(store.find_many("Cart", &Filter::all()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_memory_unique_index_refuses_colliding_data() {
  setup_tracing();
  let store = MemoryStore::new();
  for quantity in [1, 2] {
    store
      .insert_one("Cart", doc(json!({ "userId": "u1", "productId": "p1", "quantity": quantity })))
      .await
      .unwrap();
  }

  let built = store.ensure_unique_index("Cart", &["userId", "productId"]).await;
  assert!(matches!(built, Err(StoreError::DuplicateKey { .. })));

  // No index was registered, so a third copy still goes in.
  store
    .insert_one("Cart", doc(json!({ "userId": "u1", "productId": "p1" })))
    .await
    .unwrap();
  assert_eq!(store.count("Cart"), 3);
}

#[tokio::test]
async fn test_memory_bulk_insert_hits_unique_index() {
  setup_tracing();
  let store = MemoryStore::new();
  store.ensure_unique_index("Cart", &["userId", "productId"]).await.unwrap();

  let item = doc(json!({ "userId": "u1", "productId": "p1" }));
  let bulk = store.insert_many("Cart", vec![item.clone(), item]).await;
  assert!(matches!(bulk, Err(StoreError::DuplicateKey { .. })));
  assert_eq!(store.count("Cart"), 1);
}
