//! Document store abstraction for itineraries and Google Maps lists.
//!
//! Persistence is modelled as a set of named collections holding JSON
//! documents. Each document carries an opaque numeric id and a shallow
//! object of stored fields. The planner never touches a backend directly:
//! a [`DocumentStore`] is constructed once at startup and injected into
//! [`crate::TripPlanner`].
//!
//! Two backends are provided:
//!
//! - [`SqliteStore`]: durable storage in a single SQLite file
//! - [`MemoryStore`]: ordered in-process storage for tests and throwaway runs
//!
//! Typed records are produced by [`FromDocument`] at this boundary. When a
//! whole collection is listed, documents that fail to decode are logged and
//! skipped by [`decode_documents`] so one bad record does not hide the rest.

use std::fmt;

use jiff::Timestamp;
use log::warn;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::error::{NomadError, Result};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Logical collections used by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Itinerary documents
    Itineraries,
    /// Google Maps list documents
    GoogleMapsLists,
}

impl Collection {
    /// Stored name of the collection.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Itineraries => "itineraries",
            Collection::GoogleMapsLists => "googleMapsLists",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored document: opaque id, field object and store-managed timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: u64,
    pub fields: Map<String, Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Document {
    /// Returns a string field, if present and a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Deserializes the field object into `T`.
    pub fn decode_fields<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<T> {
        serde_json::from_value(Value::Object(self.fields.clone())).map_err(|e| {
            NomadError::MalformedDocument {
                collection,
                id: self.id,
                reason: e.to_string(),
            }
        })
    }
}

/// Serializes a record into the field object stored in a document.
pub fn to_fields<T: Serialize>(record: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => Err(NomadError::Configuration {
            message: format!("Expected a JSON object for document fields, got {other}"),
        }),
    }
}

/// Backend operations the application needs from persistence.
///
/// Methods are synchronous; the async planner runs them on the blocking
/// pool. Listing returns documents in insertion order.
pub trait DocumentStore {
    /// Lists every document in a collection.
    fn list_all(&self, collection: Collection) -> Result<Vec<Document>>;

    /// Inserts a new document and returns its id.
    fn insert(&mut self, collection: Collection, fields: Map<String, Value>) -> Result<u64>;

    /// Merges `partial` into the top-level fields of an existing document.
    fn update(&mut self, collection: Collection, id: u64, partial: Map<String, Value>)
        -> Result<()>;

    /// Deletes a document.
    fn delete(&mut self, collection: Collection, id: u64) -> Result<()>;

    /// Fetches a single document by id.
    fn get(&self, collection: Collection, id: u64) -> Result<Option<Document>> {
        Ok(self
            .list_all(collection)?
            .into_iter()
            .find(|doc| doc.id == id))
    }
}

/// Conversion from a raw document into a typed record.
pub trait FromDocument: Sized {
    /// Collection the record lives in.
    const COLLECTION: Collection;

    /// Decodes and validates the document.
    fn from_document(doc: Document) -> Result<Self>;
}

/// Decodes a listing, logging and dropping malformed documents.
pub fn decode_documents<T: FromDocument>(docs: Vec<Document>) -> Vec<T> {
    docs.into_iter()
        .filter_map(|doc| match T::from_document(doc) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping document: {e}");
                None
            }
        })
        .collect()
}
