//! Markdown formatting for models and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]). Collections
//! and operation outcomes go through newtype and wrapper types so the CLI
//! and the MCP server print identical text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │ (Itinerary, ..) │───▶│ Result Types    │───▶│ (Terminal/MCP)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: ItinerarySummaries, Places, MapsLists
//! - [`results`]: CreateResult, UpdateResult, DeleteResult and the import
//!   report
//! - [`status`]: OperationStatus
//! - [`datetime`]: LocalDateTime
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use nomad_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Imported 5 lists");
//! assert_eq!(status.to_string(), "Success: Imported 5 lists\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{ItinerarySummaries, MapsLists, Places};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
