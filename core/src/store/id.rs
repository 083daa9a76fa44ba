// core/src/store/id.rs
use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use serde::{Serialize, Serializer};

use crate::error::ApiError;

/// Store-assigned identifier: a MongoDB ObjectId, rendered as 24 hex chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(ObjectId);

impl DocumentId {
  pub fn generate() -> Self {
    DocumentId(ObjectId::new())
  }

  pub fn object_id(&self) -> ObjectId {
    self.0
  }

  pub fn to_hex(&self) -> String {
    self.0.to_hex()
  }
}

impl From<ObjectId> for DocumentId {
  fn from(oid: ObjectId) -> Self {
    DocumentId(oid)
  }
}

impl FromStr for DocumentId {
  type Err = ApiError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ObjectId::parse_str(s)
      .map(DocumentId)
      .map_err(|_| ApiError::InvalidIdentifier(s.to_string()))
  }
}

impl fmt::Display for DocumentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.to_hex())
  }
}

impl Serialize for DocumentId {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.0.to_hex())
  }
}
