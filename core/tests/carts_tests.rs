// tests/carts_tests.rs
mod common;
use common::*;
use product_db::{ApiError, DocumentStore};
use serde_json::json;

#[tokio::test]
async fn test_same_pair_twice_is_a_duplicate() {
  let t = memory_catalog().await;
  let item = doc(json!({ "userId": "u1", "productId": "p1", "quantity": 1 }));

  t.catalog.carts.create(item.clone()).await.unwrap();
  match t.catalog.carts.create(item).await {
    Err(ApiError::Duplicate(m)) => assert_eq!(m, "Product already exists in the cart"),
    other => panic!("Expected duplicate error, got {:?}", other),
  }

  assert_eq!(t.catalog.carts.list_for_user("u1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_check_ignores_extra_fields() {
  let t = memory_catalog().await;

  t.catalog
    .carts
    .create(doc(json!({ "userId": "u1", "productId": "p1", "quantity": 1 })))
    .await
    .unwrap();
  let second = t
    .catalog
    .carts
    .create(doc(json!({ "userId": "u1", "productId": "p1", "quantity": 3 })))
    .await;

  assert!(matches!(second, Err(ApiError::Duplicate(_))));
}

#[tokio::test]
async fn test_unique_index_backs_the_duplicate_check() {
  let t = memory_catalog().await;
  let item = doc(json!({ "userId": "u1", "productId": "p1" }));

  t.catalog.carts.create(item.clone()).await.unwrap();
  // Bypass the pre-insert check, as a racing request would.
  let raw = t.store.insert_one(&t.names.carts, item).await;
  assert!(matches!(raw, Err(product_db::StoreError::DuplicateKey { .. })));
}

#[tokio::test]
async fn test_create_requires_both_ids() {
  let t = memory_catalog().await;

  for body in [json!({ "userId": "u1" }), json!({ "productId": "p1" }), json!({})] {
    match t.catalog.carts.create(doc(body)).await {
      Err(ApiError::Validation(m)) => assert_eq!(m, "Missing required fields"),
      other => panic!("Expected validation error, got {:?}", other),
    }
  }
  assert_eq!(t.store.count(&t.names.carts), 0);
}

#[tokio::test]
async fn test_list_for_user_matches_user_only() {
  let t = memory_catalog().await;
  for (user, product) in [("u1", "p1"), ("u1", "p2"), ("u2", "p1")] {
    t.catalog
      .carts
      .create(doc(json!({ "userId": user, "productId": product })))
      .await
      .unwrap();
  }

  let items = t.catalog.carts.list_for_user("u1").await.unwrap();
  assert_eq!(items.len(), 2);
  assert!(items.iter().all(|i| i["userId"] == json!("u1")));
  assert!(t.catalog.carts.list_for_user("nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_by_id_and_by_pair() {
  let t = memory_catalog().await;
  let first = t
    .catalog
    .carts
    .create(doc(json!({ "userId": "u1", "productId": "p1" })))
    .await
    .unwrap();
  t.catalog
    .carts
    .create(doc(json!({ "userId": "u1", "productId": "p2" })))
    .await
    .unwrap();

  let by_id = t.catalog.carts.delete(&first.inserted_id.to_hex()).await.unwrap();
  assert_eq!(by_id.deleted_count, 1);
  let again = t.catalog.carts.delete(&first.inserted_id.to_hex()).await.unwrap();
  assert_eq!(again.deleted_count, 0);

  let by_pair = t.catalog.carts.delete_for_user("u1", "p2").await.unwrap();
  assert_eq!(by_pair.deleted_count, 1);
  assert!(t.catalog.carts.list_for_user("u1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_with_malformed_id() {
  let t = memory_catalog().await;
  assert!(matches!(
    t.catalog.carts.delete("p1").await,
    Err(ApiError::InvalidIdentifier(_))
  ));
}

#[tokio::test]
async fn test_prepare_tolerates_existing_duplicate_pairs() {
  setup_tracing();
  let store = std::sync::Arc::new(product_db::MemoryStore::new());
  let names = product_db::CollectionNames::default();
  store
    .insert_many(
      &names.carts,
      vec![
        doc(json!({ "userId": "u1", "productId": "p1", "quantity": 1 })),
        doc(json!({ "userId": "u1", "productId": "p1", "quantity": 2 })),
      ],
    )
    .await
    .unwrap();

  let catalog = product_db::Catalog::new(store.clone(), &names, std::time::Duration::from_secs(1));
  catalog.prepare().await.expect("prepare succeeds over legacy duplicates");

  assert_eq!(catalog.carts.list_for_user("u1").await.unwrap().len(), 2);
  assert!(matches!(
    catalog.carts.create(doc(json!({ "userId": "u1", "productId": "p1" }))).await,
    Err(ApiError::Duplicate(_))
  ));
  let added = catalog
    .carts
    .create(doc(json!({ "userId": "u1", "productId": "p2" })))
    .await
    .unwrap();
  assert_eq!(added.inserted_id.to_hex().len(), 24);
}
