//! In-process document store.

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde_json::{Map, Value};

use super::{Collection, Document, DocumentStore};
use crate::error::{NomadError, Result};

/// In-memory storage for testing and local development.
///
/// Ids are allocated from a single counter so iteration order matches
/// insertion order, as with [`super::SqliteStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: u64,
    documents: BTreeMap<(CollectionKey, u64), Document>,
}

type CollectionKey = &'static str;

impl MemoryStore {
    /// Create a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of documents across all collections.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn list_all(&self, collection: Collection) -> Result<Vec<Document>> {
        let key = collection.as_str();
        Ok(self
            .documents
            .range((key, 0)..=(key, u64::MAX))
            .map(|(_, doc)| doc.clone())
            .collect())
    }

    fn get(&self, collection: Collection, id: u64) -> Result<Option<Document>> {
        Ok(self.documents.get(&(collection.as_str(), id)).cloned())
    }

    fn insert(&mut self, collection: Collection, fields: Map<String, Value>) -> Result<u64> {
        self.next_id += 1;
        let id = self.next_id;
        let now = Timestamp::now();
        self.documents.insert(
            (collection.as_str(), id),
            Document {
                id,
                fields,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    fn update(
        &mut self,
        collection: Collection,
        id: u64,
        partial: Map<String, Value>,
    ) -> Result<()> {
        let doc = self
            .documents
            .get_mut(&(collection.as_str(), id))
            .ok_or(NomadError::DocumentNotFound { collection, id })?;
        doc.fields.extend(partial);
        doc.updated_at = Timestamp::now();
        Ok(())
    }

    fn delete(&mut self, collection: Collection, id: u64) -> Result<()> {
        self.documents
            .remove(&(collection.as_str(), id))
            .map(|_| ())
            .ok_or(NomadError::DocumentNotFound { collection, id })
    }
}
