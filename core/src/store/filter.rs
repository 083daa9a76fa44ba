// core/src/store/filter.rs
use serde_json::Value;

use super::{Document, DocumentId, ID_FIELD};

/// Conjunction of exact-equality conditions, optionally pinned to one id.
///
/// An empty filter matches every document in a collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
  id: Option<DocumentId>,
  fields: Vec<(String, Value)>,
}

impl Filter {
  pub fn all() -> Self {
    Self::default()
  }

  pub fn by_id(id: DocumentId) -> Self {
    Self {
      id: Some(id),
      fields: Vec::new(),
    }
  }

  pub fn field_eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
    Self::all().and_eq(field, value)
  }

  pub fn and_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
    self.fields.push((field.into(), value.into()));
    self
  }

  pub fn id(&self) -> Option<DocumentId> {
    self.id
  }

  pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
    self.fields.iter().map(|(k, v)| (k.as_str(), v))
  }

  pub fn is_empty(&self) -> bool {
    self.id.is_none() && self.fields.is_empty()
  }

  /// Evaluates the filter against an in-memory document.
  pub fn matches(&self, document: &Document) -> bool {
    if let Some(id) = &self.id {
      match document.get(ID_FIELD) {
        Some(Value::String(stored)) if *stored == id.to_hex() => {}
        _ => return false,
      }
    }

    self
      .fields
      .iter()
      .all(|(field, expected)| document.get(field).is_some_and(|actual| values_equal(actual, expected)))
  }
}

// Numbers compare by value so that 4 matches 4.0, as they do in MongoDB.
fn values_equal(a: &Value, b: &Value) -> bool {
  match (a, b) {
    (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
    _ => a == b,
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
  fn empty_filter_matches_everything() {
    assert!(Filter::all().matches(&doc(json!({ "anything": 1 }))));
    assert!(Filter::all().is_empty());
  }

  #[test]
  fn field_match_is_exact_and_case_sensitive() {
    let filter = Filter::field_eq("brandName", "Nike");
    assert!(filter.matches(&doc(json!({ "brandName": "Nike" }))));
    assert!(!filter.matches(&doc(json!({ "brandName": "nike" }))));
    assert!(!filter.matches(&doc(json!({ "name": "Nike" }))));
  }

  #[test]
  fn numbers_compare_by_value() {
    let filter = Filter::field_eq("rating", 4);
    assert!(filter.matches(&doc(json!({ "rating": 4.0 }))));
  }

  #[test]
  fn id_and_fields_must_all_match() {
    let id = DocumentId::generate();
    let filter = Filter::by_id(id).and_eq("brandName", "Nike");
    assert!(filter.matches(&doc(json!({ "_id": id.to_hex(), "brandName": "Nike" }))));
    assert!(!filter.matches(&doc(json!({ "_id": id.to_hex(), "brandName": "Adidas" }))));
    assert!(!filter.matches(&doc(json!({ "_id": DocumentId::generate().to_hex(), "brandName": "Nike" }))));
  }
}
