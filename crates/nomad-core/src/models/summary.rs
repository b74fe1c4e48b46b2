//! Itinerary summary model for list views.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Itinerary;

/// Compact view of an itinerary used when listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItinerarySummary {
    pub id: u64,
    pub city: String,
    pub days: u32,
    pub locations: u32,
    pub google_maps_list: Option<String>,
    pub updated_at: Timestamp,
}

impl From<&Itinerary> for ItinerarySummary {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            id: itinerary.id,
            city: itinerary.city.clone(),
            days: itinerary.days,
            locations: itinerary.locations,
            google_maps_list: itinerary.google_maps_list.clone(),
            updated_at: itinerary.updated_at,
        }
    }
}
