// core/src/error.rs
use std::time::Duration;

use thiserror::Error;

/// Failures raised by a [`DocumentStore`](crate::store::DocumentStore) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("MongoDB driver error: {source}")]
  Backend {
    #[from]
    source: mongodb::error::Error,
  },

  #[error("Document conversion failed: {0}")]
  Conversion(String),

  #[error("Unique index violated in collection '{collection}'")]
  DuplicateKey { collection: String },

  #[error("Store call on '{collection}' timed out after {elapsed:?}")]
  Timeout { collection: String, elapsed: Duration },
}

impl From<mongodb::bson::ser::Error> for StoreError {
  fn from(err: mongodb::bson::ser::Error) -> Self {
    StoreError::Conversion(err.to_string())
  }
}

/// Errors surfaced by the resource contract layer.
///
/// Every variant maps to exactly one HTTP status in the server crate:
/// `Validation`, `InvalidIdentifier` and `Duplicate` are 400, `NotFound` is 404
/// and `Store` is 500 with a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  Validation(String),

  #[error("Invalid identifier: '{0}'")]
  InvalidIdentifier(String),

  #[error("{0}")]
  Duplicate(String),

  #[error("{0}")]
  NotFound(String),

  #[error("Store error: {0}")]
  Store(StoreError),
}

impl From<StoreError> for ApiError {
  fn from(err: StoreError) -> Self {
    match err {
      // A unique index tripping is the same conflict the pre-insert check reports.
      StoreError::DuplicateKey { .. } => ApiError::Duplicate(crate::models::cart_item::DUPLICATE_MESSAGE.to_string()),
      other => ApiError::Store(other),
    }
  }
}

impl ApiError {
  /// Message safe to return to the caller. Store details never leave the process.
  pub fn public_message(&self) -> String {
    match self {
      ApiError::Store(_) => "Internal error".to_string(),
      other => other.to_string(),
    }
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
pub type ApiResult<T, E = ApiError> = std::result::Result<T, E>;
