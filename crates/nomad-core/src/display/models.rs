//! Display implementations for domain models.
//!
//! Output is markdown: itineraries and lists render as headed documents,
//! places as bullet lines with a directions link.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{Coordinate, GoogleMapsList, Itinerary, ItineraryDay, ItinerarySummary, Place, PlaceType},
    sort::SortMode,
};

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {} **{}** ({})", self.kind.icon(), self.name, self.kind)?;
        if !self.hours.is_empty() {
            write!(f, " · {}", self.hours)?;
        }
        writeln!(f, " · [Directions]({})", self.directions_url())
    }
}

impl fmt::Display for ItineraryDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Day {}", self.day)?;
        writeln!(f)?;

        if self.places.is_empty() {
            writeln!(f, "No places planned.")?;
        }
        for place in &self.places {
            write!(f, "{place}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.city)?;
        writeln!(f)?;

        writeln!(f, "- Days: {}", self.days)?;
        writeln!(f, "- Places planned: {}", self.locations)?;
        if let Some(list) = &self.google_maps_list {
            writeln!(f, "- List: {list}")?;
        }
        if let Some(center) = self.center() {
            writeln!(f, "- Center: {center}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)?;

        for day in self.partitioned_days() {
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

impl fmt::Display for GoogleMapsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.list_name)?;
        writeln!(f)?;

        if !self.city.is_empty() {
            writeln!(f, "- City: {}", self.city)?;
        }
        writeln!(f, "- Places: {}", self.places.len())?;
        if let Some(center) = self.center() {
            writeln!(f, "- Center: {center}")?;
        }
        writeln!(f, "- Imported: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        if self.places.is_empty() {
            writeln!(f, "No places in this list.")?;
        }
        for place in &self.places {
            write!(f, "{place}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ItinerarySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.days == 1 { "day" } else { "days" };
        writeln!(
            f,
            "## {} (ID: {}) · {} {plural}, {} places",
            self.city, self.id, self.days, self.locations
        )?;
        writeln!(f)?;

        if let Some(list) = &self.google_maps_list {
            writeln!(f, "- **List**: {list}")?;
        }
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}
