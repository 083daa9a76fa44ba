// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use product_db::{Catalog, CollectionNames, Document, MemoryStore};
use serde_json::{json, Value};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Catalog over a fresh in-memory store ---
pub struct TestCatalog {
  pub store: Arc<MemoryStore>,
  pub catalog: Catalog,
  pub names: CollectionNames,
}

pub async fn memory_catalog() -> TestCatalog {
  setup_tracing();
  let store = Arc::new(MemoryStore::new());
  let names = CollectionNames::default();
  let catalog = Catalog::new(store.clone(), &names, Duration::from_secs(1));
  catalog.prepare().await.expect("memory catalog prepares");
  TestCatalog { store, catalog, names }
}

// --- Fixtures ---
pub fn doc(value: Value) -> Document {
  value.as_object().cloned().expect("fixture must be a JSON object")
}

pub fn product(name: &str, brand_name: &str) -> Document {
  doc(json!({
    "imageUrl": format!("{}.png", name.to_lowercase()),
    "name": name,
    "brandName": brand_name,
    "type": "footwear",
    "price": 49.99,
    "description": "d",
    "rating": 4
  }))
}

/// The document a store hands back: the input plus its hex `_id`.
pub fn with_id(mut document: Document, id: &str) -> Document {
  document.insert("_id".to_string(), Value::String(id.to_string()));
  document
}
