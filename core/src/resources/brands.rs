// core/src/resources/brands.rs
use tracing::{info, instrument};

use super::products::{find_product, merge_fields};
use crate::envelope::{BulkInsertAck, DeleteAck, InsertAck, UpdateAck};
use crate::error::{ApiError, ApiResult};
use crate::models::{product::BRAND_NAME, without_id};
use crate::store::{Collection, Document, DocumentId, Filter};

/// Brand documents, plus the product views keyed by brand name.
#[derive(Clone)]
pub struct Brands {
  brands: Collection,
  products: Collection,
}

impl Brands {
  pub fn new(brands: Collection, products: Collection) -> Self {
    Self { brands, products }
  }

  #[instrument(name = "brands::list", skip(self))]
  pub async fn list(&self) -> ApiResult<Vec<Document>> {
    Ok(self.brands.find_many(&Filter::all()).await?)
  }

  #[instrument(name = "brands::get", skip(self))]
  pub async fn get(&self, id: &str) -> ApiResult<Document> {
    let id: DocumentId = id.parse()?;
    self
      .brands
      .find_one(&Filter::by_id(id))
      .await?
      .ok_or_else(|| ApiError::NotFound(format!("Brand with ID {} not found.", id)))
  }

  #[instrument(name = "brands::create", skip(self, body))]
  pub async fn create(&self, body: Document) -> ApiResult<InsertAck> {
    let inserted_id = self.brands.insert_one(without_id(body)).await?;
    info!(%inserted_id, "Brand created.");
    Ok(InsertAck { inserted_id })
  }

  #[instrument(name = "brands::create_many", skip(self, bodies), fields(count = bodies.len()))]
  pub async fn create_many(&self, bodies: Vec<Document>) -> ApiResult<BulkInsertAck> {
    let ids = self
      .brands
      .insert_many(bodies.into_iter().map(without_id).collect())
      .await?;
    Ok(BulkInsertAck::from(ids))
  }

  #[instrument(name = "brands::delete_all", skip(self))]
  pub async fn delete_all(&self) -> ApiResult<DeleteAck> {
    let deleted_count = self.brands.delete_many(&Filter::all()).await?;
    Ok(DeleteAck { deleted_count })
  }

  /// Products whose `brandName` equals `brand_name` exactly (case-sensitive).
  #[instrument(name = "brands::list_products", skip(self))]
  pub async fn list_products(&self, brand_name: &str) -> ApiResult<Vec<Document>> {
    let products = self.products.find_many(&Filter::field_eq(BRAND_NAME, brand_name)).await?;
    info!("Fetched {} products for brand.", products.len());
    Ok(products)
  }

  #[instrument(name = "brands::get_product", skip(self))]
  pub async fn get_product(&self, brand_name: &str, id: &str) -> ApiResult<Document> {
    let id: DocumentId = id.parse()?;
    find_product(&self.products, Filter::by_id(id).and_eq(BRAND_NAME, brand_name), id).await
  }

  #[instrument(name = "brands::update_product", skip(self, changes))]
  pub async fn update_product(&self, brand_name: &str, id: &str, changes: Document) -> ApiResult<UpdateAck> {
    let id: DocumentId = id.parse()?;
    merge_fields(&self.products, Filter::by_id(id).and_eq(BRAND_NAME, brand_name), changes).await
  }
}
