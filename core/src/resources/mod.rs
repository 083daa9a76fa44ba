// core/src/resources/mod.rs

//! The resource contract: one operation per route, each translating a request
//! into a single store call and a typed result.
//!
//! Operations return [`ApiResult`](crate::error::ApiResult); the HTTP layer
//! only has to wrap successes in an [`Envelope`](crate::envelope::Envelope)
//! and map errors to status codes.

pub mod brands;
pub mod carts;
pub mod products;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::error::ApiResult;
use crate::store::{Collection, DocumentStore};

pub use brands::Brands;
pub use carts::Carts;
pub use products::Products;

pub const DEFAULT_DATABASE: &str = "productDB";
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Collection names inside the database. Defaults match the deployed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionNames {
  pub products: String,
  pub brands: String,
  pub carts: String,
}

impl Default for CollectionNames {
  fn default() -> Self {
    Self {
      products: "brandsProduct".to_string(),
      brands: "brand".to_string(),
      carts: "Cart".to_string(),
    }
  }
}

/// All resources wired to one store handle.
///
/// The handle is created by the caller, handed in here, and released through
/// [`Catalog::close`] when the process stops.
#[derive(Clone)]
pub struct Catalog {
  pub products: Products,
  pub brands: Brands,
  pub carts: Carts,
  store: Arc<dyn DocumentStore>,
}

impl Catalog {
  pub fn new(store: Arc<dyn DocumentStore>, names: &CollectionNames, timeout: Duration) -> Self {
    let collection = |name: &str| Collection::new(store.clone(), name, timeout);

    let products = collection(&names.products);
    Self {
      products: Products::new(products.clone()),
      brands: Brands::new(collection(&names.brands), products),
      carts: Carts::new(collection(&names.carts)),
      store,
    }
  }

  /// Creates the indexes the contract relies on. Call once at startup.
  pub async fn prepare(&self) -> ApiResult<()> {
    self.carts.ensure_indexes().await?;
    info!("Catalog indexes ready.");
    Ok(())
  }

  pub async fn close(&self) {
    self.store.close().await;
  }
}
