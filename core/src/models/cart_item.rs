// core/src/models/cart_item.rs
use serde_json::Value;

use super::{is_truthy, MISSING_FIELDS_MESSAGE};
use crate::error::{ApiError, ApiResult};
use crate::store::{Document, Filter};

pub const USER_ID: &str = "userId";
pub const PRODUCT_ID: &str = "productId";

pub const DUPLICATE_MESSAGE: &str = "Product already exists in the cart";

/// The (userId, productId) pair a cart item is unique on.
#[derive(Debug, Clone, PartialEq)]
pub struct CartKey {
  pub user_id: Value,
  pub product_id: Value,
}

impl CartKey {
  /// Both ids must be present and truthy.
  pub fn from_document(document: &Document) -> ApiResult<Self> {
    let user_id = document.get(USER_ID);
    let product_id = document.get(PRODUCT_ID);

    match (user_id, product_id) {
      (Some(user_id), Some(product_id)) if is_truthy(Some(user_id)) && is_truthy(Some(product_id)) => Ok(Self {
        user_id: user_id.clone(),
        product_id: product_id.clone(),
      }),
      _ => Err(ApiError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
    }
  }

  pub fn filter(&self) -> Filter {
    Filter::field_eq(USER_ID, self.user_id.clone()).and_eq(PRODUCT_ID, self.product_id.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn doc(value: Value) -> Document {
    value.as_object().cloned().unwrap()
  }

  #[test]
  fn both_ids_are_required() {
    assert!(CartKey::from_document(&doc(json!({ "userId": "u1", "productId": "p1" }))).is_ok());

    for body in [
      json!({ "productId": "p1" }),
      json!({ "userId": "u1" }),
      json!({ "userId": "", "productId": "p1" }),
      json!({ "userId": "u1", "productId": null }),
    ] {
      assert!(
        matches!(CartKey::from_document(&doc(body.clone())), Err(ApiError::Validation(_))),
        "body {body}"
      );
    }
  }

  #[test]
  fn filter_matches_only_the_pair() {
    let key = CartKey::from_document(&doc(json!({ "userId": "u1", "productId": "p1", "qty": 2 }))).unwrap();
    assert!(key.filter().matches(&doc(json!({ "userId": "u1", "productId": "p1" }))));
    assert!(!key.filter().matches(&doc(json!({ "userId": "u1", "productId": "p2" }))));
  }
}
