// server/src/state.rs
use product_db::Catalog;

/// Shared by every handler. The catalog holds the one long-lived store handle.
#[derive(Clone)]
pub struct AppState {
  pub catalog: Catalog,
}

impl AppState {
  pub fn new(catalog: Catalog) -> Self {
    Self { catalog }
  }
}
