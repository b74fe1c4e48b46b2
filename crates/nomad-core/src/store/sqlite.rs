//! SQLite-backed document store.

use std::path::Path;

use jiff::Timestamp;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde_json::{Map, Value};

use super::{Collection, Document, DocumentStore};
use crate::error::{DatabaseResultExt, NomadError, Result};

const INSERT_DOCUMENT_SQL: &str = "INSERT INTO documents (collection, body, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_DOCUMENTS_SQL: &str = "SELECT id, body, created_at, updated_at FROM documents WHERE collection = ?1 ORDER BY id";
const SELECT_DOCUMENT_SQL: &str = "SELECT id, body, created_at, updated_at FROM documents WHERE collection = ?1 AND id = ?2";
const SELECT_BODY_SQL: &str = "SELECT body FROM documents WHERE collection = ?1 AND id = ?2";
const UPDATE_DOCUMENT_SQL: &str =
    "UPDATE documents SET body = ?1, updated_at = ?2 WHERE collection = ?3 AND id = ?4";
const DELETE_DOCUMENT_SQL: &str = "DELETE FROM documents WHERE collection = ?1 AND id = ?2";

/// Document store persisted in a single SQLite database file.
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Opens (creating if needed) the database and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }
}

/// A row as read from the `documents` table, before decoding.
struct RawDocument {
    id: i64,
    body: String,
    created_at: String,
    updated_at: String,
}

impl RawDocument {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            body: row.get(1)?,
            created_at: row.get(2)?,
            updated_at: row.get(3)?,
        })
    }

    fn into_document(self, collection: Collection) -> Result<Document> {
        let id = self.id as u64;
        let malformed = |reason: String| NomadError::MalformedDocument {
            collection,
            id,
            reason,
        };

        let fields = serde_json::from_str::<Map<String, Value>>(&self.body)
            .map_err(|e| malformed(format!("body: {e}")))?;
        let created_at = self
            .created_at
            .parse::<Timestamp>()
            .map_err(|e| malformed(format!("created_at: {e}")))?;
        let updated_at = self
            .updated_at
            .parse::<Timestamp>()
            .map_err(|e| malformed(format!("updated_at: {e}")))?;

        Ok(Document {
            id,
            fields,
            created_at,
            updated_at,
        })
    }
}

impl DocumentStore for SqliteStore {
    fn list_all(&self, collection: Collection) -> Result<Vec<Document>> {
        debug!("list_all {collection}");
        let mut stmt = self
            .connection
            .prepare(SELECT_DOCUMENTS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![collection.as_str()], RawDocument::from_row)
            .db_context("Failed to query documents")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read documents")?;

        let docs = rows
            .into_iter()
            .filter_map(|raw| match raw.into_document(collection) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    warn!("Skipping document: {e}");
                    None
                }
            })
            .collect();

        Ok(docs)
    }

    fn get(&self, collection: Collection, id: u64) -> Result<Option<Document>> {
        debug!("get {collection}/{id}");
        self.connection
            .query_row(
                SELECT_DOCUMENT_SQL,
                params![collection.as_str(), id as i64],
                RawDocument::from_row,
            )
            .optional()
            .db_context("Failed to query document")?
            .map(|raw| raw.into_document(collection))
            .transpose()
    }

    fn insert(&mut self, collection: Collection, fields: Map<String, Value>) -> Result<u64> {
        let body = serde_json::to_string(&fields)?;
        let now = Timestamp::now().to_string();

        self.connection
            .execute(
                INSERT_DOCUMENT_SQL,
                params![collection.as_str(), body, &now, &now],
            )
            .db_context("Failed to insert document")?;

        let id = self.connection.last_insert_rowid() as u64;
        debug!("insert {collection}/{id}");
        Ok(id)
    }

    fn update(
        &mut self,
        collection: Collection,
        id: u64,
        partial: Map<String, Value>,
    ) -> Result<()> {
        debug!("update {collection}/{id}");
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let body: Option<String> = tx
            .query_row(
                SELECT_BODY_SQL,
                params![collection.as_str(), id as i64],
                |row| row.get(0),
            )
            .optional()
            .db_context("Failed to query document")?;
        let body = body.ok_or(NomadError::DocumentNotFound { collection, id })?;

        let mut fields = serde_json::from_str::<Map<String, Value>>(&body)?;
        fields.extend(partial);
        let body = serde_json::to_string(&fields)?;

        tx.execute(
            UPDATE_DOCUMENT_SQL,
            params![body, Timestamp::now().to_string(), collection.as_str(), id as i64],
        )
        .db_context("Failed to update document")?;

        tx.commit().db_context("Failed to commit transaction")
    }

    fn delete(&mut self, collection: Collection, id: u64) -> Result<()> {
        debug!("delete {collection}/{id}");
        let affected = self
            .connection
            .execute(DELETE_DOCUMENT_SQL, params![collection.as_str(), id as i64])
            .db_context("Failed to delete document")?;

        if affected == 0 {
            return Err(NomadError::DocumentNotFound { collection, id });
        }
        Ok(())
    }
}
