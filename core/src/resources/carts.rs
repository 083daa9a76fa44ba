// core/src/resources/carts.rs
use tracing::{info, instrument, warn};

use crate::envelope::{DeleteAck, InsertAck};
use crate::error::{ApiError, ApiResult, StoreError};
use crate::models::cart_item::{CartKey, DUPLICATE_MESSAGE, PRODUCT_ID, USER_ID};
use crate::models::without_id;
use crate::store::{Collection, Document, DocumentId, Filter};

#[derive(Clone)]
pub struct Carts {
  collection: Collection,
}

impl Carts {
  pub fn new(collection: Collection) -> Self {
    Self { collection }
  }

  /// Backs the pre-insert duplicate check against concurrent inserts.
  ///
  /// Older data may already hold the same pair more than once; the index is
  /// then skipped and only the pre-insert check applies.
  pub async fn ensure_indexes(&self) -> ApiResult<()> {
    match self.collection.ensure_unique_index(&[USER_ID, PRODUCT_ID]).await {
      Ok(()) => Ok(()),
      Err(StoreError::DuplicateKey { collection }) => {
        warn!(%collection, "Cart already holds duplicate (userId, productId) pairs; unique index not created.");
        Ok(())
      }
      Err(e) => Err(e.into()),
    }
  }

  #[instrument(name = "carts::list_for_user", skip(self))]
  pub async fn list_for_user(&self, user_id: &str) -> ApiResult<Vec<Document>> {
    Ok(self.collection.find_many(&Filter::field_eq(USER_ID, user_id)).await?)
  }

  #[instrument(name = "carts::create", skip(self, body))]
  pub async fn create(&self, body: Document) -> ApiResult<InsertAck> {
    let key = CartKey::from_document(&body)?;

    if self.collection.find_one(&key.filter()).await?.is_some() {
      warn!(user_id = %key.user_id, product_id = %key.product_id, "Cart item already present.");
      return Err(ApiError::Duplicate(DUPLICATE_MESSAGE.to_string()));
    }

    let inserted_id = self.collection.insert_one(without_id(body)).await?;
    info!(%inserted_id, "Cart item added.");
    Ok(InsertAck { inserted_id })
  }

  #[instrument(name = "carts::delete", skip(self))]
  pub async fn delete(&self, id: &str) -> ApiResult<DeleteAck> {
    let id: DocumentId = id.parse()?;
    let deleted_count = self.collection.delete_one(&Filter::by_id(id)).await?;
    Ok(DeleteAck { deleted_count })
  }

  #[instrument(name = "carts::delete_for_user", skip(self))]
  pub async fn delete_for_user(&self, user_id: &str, product_id: &str) -> ApiResult<DeleteAck> {
    let filter = Filter::field_eq(USER_ID, user_id).and_eq(PRODUCT_ID, product_id);
    let deleted_count = self.collection.delete_one(&filter).await?;
    Ok(DeleteAck { deleted_count })
  }
}
