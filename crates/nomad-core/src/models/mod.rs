//! Data models for itineraries, places and Google Maps lists.
//!
//! Display implementations for these models live in
//! [`crate::display::models`]. Each stored model has a `*Fields` struct that
//! mirrors the document body (camelCase keys) and a typed record that adds
//! the store id and timestamps, produced through
//! [`crate::store::FromDocument`].
//!
//! # Examples
//!
//! ```rust
//! use nomad_core::models::{Coordinate, Place, PlaceType};
//!
//! let place = Place {
//!     name: "Musée du Parfum".to_string(),
//!     kind: PlaceType::Museum,
//!     hours: "08:00 - 17:30".to_string(),
//!     lat: 48.8705,
//!     lng: 2.3272,
//! };
//! assert_eq!(place.opening_hour(), 8);
//! assert!(place.directions_url().contains("destination=48.8705,2.3272"));
//!
//! let origin = Coordinate::new(0.0, 0.0);
//! assert_eq!(origin.distance_to(&Coordinate::new(3.0, 4.0)), 5.0);
//! ```

pub mod itinerary;
pub mod maps_list;
pub mod place;
pub mod summary;

#[cfg(test)]
mod tests;

pub use itinerary::{Itinerary, ItineraryDay, ItineraryFields};
pub use maps_list::{GoogleMapsList, MapsListFields};
pub use place::{Coordinate, Place, PlaceType};
pub use summary::ItinerarySummary;
