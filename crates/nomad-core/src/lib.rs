//! Core library for the Nomad trip planner.
//!
//! Nomad turns Google Maps lists of saved places into day-by-day city
//! itineraries. This crate holds the data models, the document store
//! abstraction with SQLite and in-memory backends, the list importer, and
//! the [`TripPlanner`] facade used by the CLI and the MCP server.
//!
//! # Layout
//!
//! - [`models`]: itineraries, days, places and Google Maps lists
//! - [`partition`]: dense day-by-day view of sparse stored details
//! - [`sort`]: candidate ordering by opening hour or distance
//! - [`import`]: idempotent list seeding with duplicate cleanup
//! - [`store`]: the [`store::DocumentStore`] trait and its backends
//! - [`planner`]: async operations over an injected store
//! - [`display`]: markdown output for terminals and MCP clients
//!
//! # Quick Start
//!
//! ```rust
//! use nomad_core::{
//!     params::{AddPlace, CreateItinerary},
//!     TripPlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = TripPlannerBuilder::new()
//!     .with_database_path("nomad-test.db")
//!     .build()
//!     .await?;
//! planner.import_demo_lists().await?;
//!
//! let trip = planner
//!     .create_itinerary(&CreateItinerary {
//!         city: "Milano".to_string(),
//!         days: 2,
//!         list_name: "Milano Highlights".to_string(),
//!     })
//!     .await?;
//!
//! let trip = planner
//!     .add_place(&AddPlace {
//!         itinerary_id: trip.id,
//!         day: 1,
//!         place: "Duomo di Milano".to_string(),
//!     })
//!     .await?;
//! println!("{trip}");
//! # Ok(())
//! # }
//! ```

pub mod demo;
pub mod display;
pub mod error;
pub mod import;
pub mod models;
pub mod params;
pub mod partition;
pub mod planner;
pub mod sort;
pub mod store;

// Re-export commonly used types
pub use display::{
    CreateResult, DeleteResult, ItinerarySummaries, LocalDateTime, MapsLists, OperationStatus,
    Places, UpdateResult,
};
pub use error::{NomadError, Result};
pub use import::ImportReport;
pub use models::{
    Coordinate, GoogleMapsList, Itinerary, ItineraryDay, ItinerarySummary, MapsListFields, Place,
    PlaceType,
};
pub use planner::{TripPlanner, TripPlannerBuilder};
pub use sort::SortMode;
pub use store::{DocumentStore, MemoryStore, SqliteStore};
