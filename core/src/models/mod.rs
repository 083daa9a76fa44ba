// core/src/models/mod.rs

//! Field names and input rules for the three entity kinds.
//!
//! Entities are stored as schema-less documents, so there are no row structs
//! here: only the checks that run before a document reaches the store.

pub mod cart_item;
pub mod product;

use serde_json::Value;

use crate::store::{Document, ID_FIELD};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// JavaScript truthiness: null, false, 0, NaN and "" are falsy; everything else, including empty
/// arrays and objects, is truthy.
pub fn is_truthy(value: Option<&Value>) -> bool {
  match value {
    None | Some(Value::Null) => false,
    Some(Value::Bool(b)) => *b,
    Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
    Some(Value::String(s)) => !s.is_empty(),
    Some(Value::Array(_)) | Some(Value::Object(_)) => true,
  }
}

/// Drops a client-supplied `_id`; identity is always store-assigned.
pub fn without_id(mut document: Document) -> Document {
  document.remove(ID_FIELD);
  document
}
