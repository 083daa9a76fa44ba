// core/src/envelope.rs

//! The uniform response body and the write acknowledgments carried in it.

use serde::{Deserialize, Serialize};

use crate::store::DocumentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
  Success,
  Error,
}

/// `{ "status": "success", "data": ... }` or `{ "status": "error", "message": ... }`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
  pub status: Status,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
  pub fn success(data: T) -> Self {
    Self {
      status: Status::Success,
      data: Some(data),
      message: None,
    }
  }
}

impl Envelope<()> {
  pub fn error(message: impl Into<String>) -> Self {
    Self {
      status: Status::Error,
      data: None,
      message: Some(message.into()),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
  pub inserted_id: DocumentId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkInsertAck {
  pub inserted_count: u64,
  pub inserted_ids: Vec<DocumentId>,
}

impl From<Vec<DocumentId>> for BulkInsertAck {
  fn from(ids: Vec<DocumentId>) -> Self {
    Self {
      inserted_count: ids.len() as u64,
      inserted_ids: ids,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
  pub matched_count: u64,
  pub modified_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
  pub deleted_count: u64,
}
