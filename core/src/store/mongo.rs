// core/src/store/mongo.rs

//! MongoDB-backed [`DocumentStore`].
//!
//! Documents cross the boundary as JSON maps. On the way in they are
//! serialized to BSON; on the way out ObjectIds become hex strings and every
//! other value is rendered as relaxed extended JSON.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
  bson::{self, doc, Bson},
  error::{ErrorKind, WriteFailure},
  options::IndexOptions,
  Client, Database, IndexModel,
};
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::{Document, DocumentId, DocumentStore, Filter, UpdateOutcome, ID_FIELD};
use crate::error::{StoreError, StoreResult};

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Clone)]
pub struct MongoStore {
  client: Client,
  database: Database,
}

impl MongoStore {
  /// Opens a client for `uri` and confirms the deployment answers a ping.
  #[instrument(name = "mongo_store::connect", skip(uri), err(Display))]
  pub async fn connect(uri: &str, database_name: &str) -> StoreResult<Self> {
    let client = Client::with_uri_str(uri).await?;
    let database = client.database(database_name);
    let store = Self { client, database };
    store.ping().await?;
    info!(database = database_name, "Pinged deployment. Connected to MongoDB.");
    Ok(store)
  }

  fn collection(&self, name: &str) -> mongodb::Collection<bson::Document> {
    self.database.collection::<bson::Document>(name)
  }
}

fn filter_to_bson(filter: &Filter) -> StoreResult<bson::Document> {
  let mut out = bson::Document::new();
  if let Some(id) = filter.id() {
    out.insert(ID_FIELD, id.object_id());
  }
  for (field, value) in filter.fields() {
    out.insert(field, bson::to_bson(value)?);
  }
  Ok(out)
}

fn document_to_bson(document: &Document) -> StoreResult<bson::Document> {
  Ok(bson::to_document(document)?)
}

fn document_from_bson(document: bson::Document) -> Document {
  document
    .into_iter()
    .map(|(field, value)| (field, value_from_bson(value)))
    .collect()
}

fn value_from_bson(value: Bson) -> Value {
  match value {
    Bson::ObjectId(oid) => Value::String(oid.to_hex()),
    Bson::Document(inner) => Value::Object(document_from_bson(inner)),
    Bson::Array(items) => Value::Array(items.into_iter().map(value_from_bson).collect()),
    other => other.into_relaxed_extjson(),
  }
}

fn id_from_bson(collection: &str, value: &Bson) -> StoreResult<DocumentId> {
  match value {
    Bson::ObjectId(oid) => Ok(DocumentId::from(*oid)),
    other => Err(StoreError::Conversion(format!(
      "unexpected inserted id {other} in '{collection}'"
    ))),
  }
}

// Single writes, bulk inserts and index builds report code 11000 in different shapes.
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
  match err.kind.as_ref() {
    ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
    ErrorKind::InsertMany(failure) => failure
      .write_errors
      .as_ref()
      .is_some_and(|errors| errors.iter().any(|e| e.code == DUPLICATE_KEY_CODE)),
    ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
    _ => false,
  }
}

fn map_write_error(collection: &str, err: mongodb::error::Error) -> StoreError {
  if is_duplicate_key(&err) {
    StoreError::DuplicateKey {
      collection: collection.to_string(),
    }
  } else {
    StoreError::from(err)
  }
}

#[async_trait]
impl DocumentStore for MongoStore {
  async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
    let found = self.collection(collection).find_one(filter_to_bson(filter)?).await?;
    Ok(found.map(document_from_bson))
  }

  async fn find_many(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Document>> {
    let cursor = self.collection(collection).find(filter_to_bson(filter)?).await?;
    let documents: Vec<bson::Document> = cursor.try_collect().await?;
    Ok(documents.into_iter().map(document_from_bson).collect())
  }

  async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<DocumentId> {
    let result = self
      .collection(collection)
      .insert_one(document_to_bson(&document)?)
      .await
      .map_err(|e| map_write_error(collection, e))?;
    id_from_bson(collection, &result.inserted_id)
  }

  async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> StoreResult<Vec<DocumentId>> {
    if documents.is_empty() {
      return Ok(Vec::new());
    }

    let converted = documents
      .iter()
      .map(document_to_bson)
      .collect::<StoreResult<Vec<_>>>()?;
    let result = self
      .collection(collection)
      .insert_many(converted)
      .await
      .map_err(|e| map_write_error(collection, e))?;

    // inserted_ids is keyed by input position.
    let mut indexed: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
    indexed.sort_by_key(|(index, _)| *index);
    indexed
      .iter()
      .map(|(_, id)| id_from_bson(collection, id))
      .collect()
  }

  async fn update_one(
    &self,
    collection: &str,
    filter: &Filter,
    changes: Document,
    upsert: bool,
  ) -> StoreResult<UpdateOutcome> {
    let update = doc! { "$set": document_to_bson(&changes)? };
    let result = self
      .collection(collection)
      .update_one(filter_to_bson(filter)?, update)
      .upsert(upsert)
      .await?;

    let upserted_id = result
      .upserted_id
      .as_ref()
      .map(|id| id_from_bson(collection, id))
      .transpose()?;

    Ok(UpdateOutcome {
      matched_count: result.matched_count,
      modified_count: result.modified_count,
      upserted_id,
    })
  }

  async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
    let result = self.collection(collection).delete_one(filter_to_bson(filter)?).await?;
    Ok(result.deleted_count)
  }

  async fn delete_many(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
    let result = self.collection(collection).delete_many(filter_to_bson(filter)?).await?;
    Ok(result.deleted_count)
  }

  async fn ensure_unique_index(&self, collection: &str, fields: &[&str]) -> StoreResult<()> {
    let mut keys = bson::Document::new();
    for field in fields {
      keys.insert(*field, 1);
    }
    let model = IndexModel::builder()
      .keys(keys)
      .options(IndexOptions::builder().unique(true).build())
      .build();

    // Existing documents that already collide make the build fail with 11000.
    let created = self
      .collection(collection)
      .create_index(model)
      .await
      .map_err(|e| map_write_error(collection, e))?;
    debug!(collection, index = %created.index_name, "unique index ensured");
    Ok(())
  }

  async fn ping(&self) -> StoreResult<()> {
    self.database.run_command(doc! { "ping": 1 }).await?;
    Ok(())
  }

  async fn close(&self) {
    self.client.clone().shutdown().await;
    info!("MongoDB client shut down.");
  }
}
