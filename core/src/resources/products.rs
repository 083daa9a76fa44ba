// core/src/resources/products.rs
use tracing::{info, instrument, warn};

use crate::envelope::{BulkInsertAck, DeleteAck, InsertAck, UpdateAck};
use crate::error::{ApiError, ApiResult};
use crate::models::{product::validate_new_product, without_id};
use crate::store::{Collection, Document, DocumentId, Filter};

#[derive(Clone)]
pub struct Products {
  collection: Collection,
}

impl Products {
  pub fn new(collection: Collection) -> Self {
    Self { collection }
  }

  #[instrument(name = "products::list", skip(self))]
  pub async fn list(&self) -> ApiResult<Vec<Document>> {
    let products = self.collection.find_many(&Filter::all()).await?;
    info!("Fetched {} products.", products.len());
    Ok(products)
  }

  #[instrument(name = "products::get", skip(self))]
  pub async fn get(&self, id: &str) -> ApiResult<Document> {
    let id: DocumentId = id.parse()?;
    find_product(&self.collection, Filter::by_id(id), id).await
  }

  #[instrument(name = "products::create", skip(self, body))]
  pub async fn create(&self, body: Document) -> ApiResult<InsertAck> {
    validate_new_product(&body).inspect_err(|e| warn!("Rejected product: {}", e))?;

    let inserted_id = self.collection.insert_one(without_id(body)).await?;
    info!(%inserted_id, "Product created.");
    Ok(InsertAck { inserted_id })
  }

  /// Bulk insert. Bodies are stored as given, without validation.
  #[instrument(name = "products::create_many", skip(self, bodies), fields(count = bodies.len()))]
  pub async fn create_many(&self, bodies: Vec<Document>) -> ApiResult<BulkInsertAck> {
    let ids = self
      .collection
      .insert_many(bodies.into_iter().map(without_id).collect())
      .await?;
    Ok(BulkInsertAck::from(ids))
  }

  #[instrument(name = "products::update", skip(self, changes))]
  pub async fn update(&self, id: &str, changes: Document) -> ApiResult<UpdateAck> {
    let id: DocumentId = id.parse()?;
    merge_fields(&self.collection, Filter::by_id(id), changes).await
  }

  #[instrument(name = "products::delete_all", skip(self))]
  pub async fn delete_all(&self) -> ApiResult<DeleteAck> {
    let deleted_count = self.collection.delete_many(&Filter::all()).await?;
    info!("Deleted {} products.", deleted_count);
    Ok(DeleteAck { deleted_count })
  }
}

pub(crate) async fn find_product(collection: &Collection, filter: Filter, id: DocumentId) -> ApiResult<Document> {
  collection
    .find_one(&filter)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("Product with ID {} not found.", id)))
}

/// Field-level overwrite of the first match; never upserts and never re-validates.
pub(crate) async fn merge_fields(collection: &Collection, filter: Filter, changes: Document) -> ApiResult<UpdateAck> {
  let changes = without_id(changes);

  // An empty $set is rejected by MongoDB; report the match without writing.
  if changes.is_empty() {
    let matched = collection.find_one(&filter).await?.is_some();
    return Ok(UpdateAck {
      matched_count: u64::from(matched),
      modified_count: 0,
    });
  }

  let outcome = collection.update_one(&filter, changes, false).await?;
  Ok(UpdateAck {
    matched_count: outcome.matched_count,
    modified_count: outcome.modified_count,
  })
}
