// core/src/lib.rs

//! product-db: the resource contract behind the productDB catalog API.
//!
//! The crate turns catalog requests (products, brands, cart items) into single
//! document store calls and typed acknowledgments:
//!  - [`store`]: the [`DocumentStore`] seam with MongoDB and in-memory backends.
//!  - [`models`]: required-field and range checks run before any write.
//!  - [`resources`]: one operation per route, grouped in a [`Catalog`].
//!  - [`envelope`]: the `{status, data|message}` response body.
//!
//! It knows nothing about HTTP; the server crate maps [`ApiError`] variants to
//! status codes.

pub mod envelope;
pub mod error;
pub mod models;
pub mod resources;
pub mod store;

pub use crate::envelope::{BulkInsertAck, DeleteAck, Envelope, InsertAck, Status, UpdateAck};
pub use crate::error::{ApiError, ApiResult, StoreError, StoreResult};
pub use crate::resources::{Brands, Carts, Catalog, CollectionNames, Products, DEFAULT_DATABASE, DEFAULT_STORE_TIMEOUT};
pub use crate::store::{Document, DocumentId, DocumentStore, Filter, MemoryStore, MongoStore};
