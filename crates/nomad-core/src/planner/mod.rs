//! High-level trip planner API for itineraries and Google Maps lists.
//!
//! [`TripPlanner`] is the single entry point used by the CLI and the MCP
//! server. It owns the injected [`DocumentStore`] and runs every
//! read-modify-write sequence on tokio's blocking pool while holding the
//! store lock, so one user action completes before the next begins.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  CLI / MCP      │    │   TripPlanner   │    │  DocumentStore  │
//! │  (params)       │───▶│ (itinerary_ops, │───▶│ (sqlite/memory) │
//! │                 │    │  list_ops)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: constructs a planner over SQLite or in-memory storage
//! - [`itinerary_ops`]: create, edit, delete itineraries and plan places
//! - [`list_ops`]: browse, import and delete Google Maps lists
//!
//! # Usage Examples
//!
//! ```rust
//! use nomad_core::{params::CreateItinerary, TripPlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = TripPlannerBuilder::new().in_memory().build().await?;
//! planner.import_demo_lists().await?;
//!
//! let paris = planner
//!     .create_itinerary(&CreateItinerary {
//!         city: "Paris".to_string(),
//!         days: 3,
//!         list_name: "Paris Favorites".to_string(),
//!     })
//!     .await?;
//! assert_eq!(paris.locations, 0);
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex};

use tokio::task;

use crate::{
    error::{NomadError, Result},
    store::DocumentStore,
};

pub mod builder;
pub mod itinerary_ops;
pub mod list_ops;

#[cfg(test)]
mod tests;

pub use builder::TripPlannerBuilder;

/// Store handle shared by clones of a planner.
pub type SharedStore = Arc<Mutex<dyn DocumentStore + Send>>;

/// Main planner interface for itineraries and Google Maps lists.
#[derive(Clone)]
pub struct TripPlanner {
    store: SharedStore,
}

impl TripPlanner {
    /// Creates a planner over an explicitly constructed store.
    pub fn new<S>(store: S) -> Self
    where
        S: DocumentStore + Send + 'static,
    {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` against the locked store on the blocking pool.
    pub(crate) async fn with_store<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn DocumentStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);

        task::spawn_blocking(move || {
            let mut guard = store.lock().map_err(|_| NomadError::Configuration {
                message: "Document store lock poisoned".to_string(),
            })?;
            f(&mut *guard)
        })
        .await
        .map_err(|e| NomadError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
