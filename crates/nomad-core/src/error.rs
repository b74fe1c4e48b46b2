//! Error types for the nomad library.

use std::path::PathBuf;

use thiserror::Error;

use crate::store::Collection;

/// Error type for all itinerary, list and store operations.
#[derive(Error, Debug)]
pub enum NomadError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Itinerary not found for the given ID
    #[error("Itinerary with ID {id} not found")]
    ItineraryNotFound { id: u64 },
    /// Google Maps list not found for the given name
    #[error("Google Maps list '{name}' not found")]
    ListNotFound { name: String },
    /// Raw document missing from a collection
    #[error("Document {id} not found in collection '{collection}'")]
    DocumentNotFound { collection: Collection, id: u64 },
    /// Place not present where it was expected
    #[error("Place '{name}' not found")]
    PlaceNotFound { name: String },
    /// Stored document that cannot be decoded into a typed record
    #[error("Malformed document {id} in collection '{collection}': {reason}")]
    MalformedDocument {
        collection: Collection,
        id: u64,
        reason: String,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> NomadError {
        NomadError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> NomadError {
        NomadError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl NomadError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error came from user input rather than the store.
    ///
    /// Validation failures leave the store untouched and can be corrected
    /// and retried by the caller.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            NomadError::InvalidInput { .. }
                | NomadError::PlaceNotFound { .. }
                | NomadError::ListNotFound { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| NomadError::database(message).with_source(e))
    }
}

/// Result type alias for nomad operations
pub type Result<T> = std::result::Result<T, NomadError>;
