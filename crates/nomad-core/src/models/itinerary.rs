//! Itinerary model definition and document decoding.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Coordinate, Place};
use crate::{
    error::{NomadError, Result},
    partition::partition_days,
    store::{Collection, Document, FromDocument},
};

/// One day of planned places within an itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryDay {
    /// 1-based day number
    pub day: u32,

    /// Places planned for this day, in visiting order
    #[serde(default)]
    pub places: Vec<Place>,
}

impl ItineraryDay {
    /// An empty day.
    pub fn empty(day: u32) -> Self {
        Self {
            day,
            places: Vec::new(),
        }
    }

    /// Whether a place with this name is already planned for the day.
    pub fn contains(&self, name: &str) -> bool {
        self.places.iter().any(|p| p.name == name)
    }
}

/// Fields stored in an itinerary document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryFields {
    pub city: String,
    pub days: u32,
    #[serde(default)]
    pub locations: u32,
    #[serde(default)]
    pub details: Vec<ItineraryDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_maps_list: Option<String>,
}

/// A multi-day travel plan for one city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    /// Store-assigned identifier
    pub id: u64,

    /// City name, unique across itineraries ignoring case
    pub city: String,

    /// Number of days in the trip
    pub days: u32,

    /// Cached total of planned places
    pub locations: u32,

    /// Stored day entries, possibly sparse
    #[serde(default)]
    pub details: Vec<ItineraryDay>,

    /// Name of the Google Maps list places are picked from
    pub google_maps_list: Option<String>,

    /// Timestamp when the itinerary was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the itinerary was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Itinerary {
    /// Dense day-by-day view with empty placeholders for missing days.
    pub fn partitioned_days(&self) -> Vec<ItineraryDay> {
        partition_days(self.days, &self.details)
    }

    /// Case-insensitive city comparison.
    pub fn matches_city(&self, city: &str) -> bool {
        self.city.to_lowercase() == city.trim().to_lowercase()
    }

    /// Every planned place across all stored days.
    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.details.iter().flat_map(|d| d.places.iter())
    }

    /// Whether a place with this name is planned on any day.
    pub fn is_planned(&self, name: &str) -> bool {
        self.places().any(|p| p.name == name)
    }

    /// Map centre: the average coordinate of all planned places.
    pub fn center(&self) -> Option<Coordinate> {
        Coordinate::centroid(self.places().map(Place::coordinate))
    }
}

impl FromDocument for Itinerary {
    const COLLECTION: Collection = Collection::Itineraries;

    fn from_document(doc: Document) -> Result<Self> {
        let fields: ItineraryFields = doc.decode_fields(Self::COLLECTION)?;

        let malformed = |reason: &str| NomadError::MalformedDocument {
            collection: Self::COLLECTION,
            id: doc.id,
            reason: reason.to_string(),
        };
        if fields.city.trim().is_empty() {
            return Err(malformed("city is empty"));
        }
        if fields.days == 0 {
            return Err(malformed("days must be at least 1"));
        }

        Ok(Itinerary {
            id: doc.id,
            city: fields.city,
            days: fields.days,
            locations: fields.locations,
            details: fields.details,
            google_maps_list: fields.google_maps_list,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}
