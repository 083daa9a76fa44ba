// core/src/models/product.rs
use serde_json::Value;

use super::{is_truthy, MISSING_FIELDS_MESSAGE};
use crate::error::{ApiError, ApiResult};
use crate::store::Document;

pub const BRAND_NAME: &str = "brandName";
pub const PRICE: &str = "price";
pub const RATING: &str = "rating";

pub const REQUIRED_FIELDS: [&str; 7] = ["imageUrl", "name", BRAND_NAME, "type", PRICE, "description", RATING];

pub const INVALID_VALUE_MESSAGE: &str = "Please provide valid input value";

pub const MIN_PRICE: f64 = 1.0;
pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Checks a product creation body. Updates are never re-validated.
pub fn validate_new_product(document: &Document) -> ApiResult<()> {
  if !REQUIRED_FIELDS.iter().all(|field| is_truthy(document.get(*field))) {
    return Err(ApiError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
  }

  let price = document.get(PRICE).and_then(Value::as_f64);
  let rating = document.get(RATING).and_then(Value::as_f64);

  match (price, rating) {
    (Some(price), Some(rating)) if price >= MIN_PRICE && (MIN_RATING..=MAX_RATING).contains(&rating) => Ok(()),
    _ => Err(ApiError::Validation(INVALID_VALUE_MESSAGE.to_string())),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn shoe() -> Document {
    json!({
      "imageUrl": "x.png",
      "name": "Shoe",
      "brandName": "Nike",
      "type": "footwear",
      "price": 49.99,
      "description": "d",
      "rating": 4
    })
    .as_object()
    .cloned()
    .unwrap()
  }

  fn message(result: ApiResult<()>) -> String {
    match result {
      Err(ApiError::Validation(m)) => m,
      other => panic!("Expected validation error, got {:?}", other),
    }
  }

  #[test]
  fn accepts_complete_product() {
    assert!(validate_new_product(&shoe()).is_ok());
  }

  #[test]
  fn every_required_field_is_checked() {
    for field in REQUIRED_FIELDS {
      let mut doc = shoe();
      doc.remove(field);
      assert_eq!(message(validate_new_product(&doc)), MISSING_FIELDS_MESSAGE, "field {field}");
    }
  }

  #[test]
  fn zero_price_counts_as_missing() {
    let mut doc = shoe();
    doc.insert(PRICE.into(), json!(0));
    assert_eq!(message(validate_new_product(&doc)), MISSING_FIELDS_MESSAGE);
  }

  #[test]
  fn range_limits_are_inclusive() {
    let mut doc = shoe();
    doc.insert(PRICE.into(), json!(1));
    doc.insert(RATING.into(), json!(5));
    assert!(validate_new_product(&doc).is_ok());

    doc.insert(RATING.into(), json!(1));
    assert!(validate_new_product(&doc).is_ok());
  }

  #[test]
  fn out_of_range_values_are_rejected() {
    for (price, rating) in [(0.5, 3.0), (10.0, 0.5), (10.0, 5.5)] {
      let mut doc = shoe();
      doc.insert(PRICE.into(), json!(price));
      doc.insert(RATING.into(), json!(rating));
      assert_eq!(message(validate_new_product(&doc)), INVALID_VALUE_MESSAGE);
    }
  }

  #[test]
  fn non_numeric_price_is_rejected() {
    let mut doc = shoe();
    doc.insert(PRICE.into(), json!("cheap"));
    assert_eq!(message(validate_new_product(&doc)), INVALID_VALUE_MESSAGE);
  }
}
