//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper prints a fixed message when the collection is empty.

use std::{fmt, ops::Index};

use super::datetime::LocalDateTime;
use crate::models::{GoogleMapsList, ItinerarySummary, Place};

/// Newtype wrapper for displaying itinerary summaries.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use nomad_core::{display::ItinerarySummaries, models::ItinerarySummary};
///
/// let summaries = ItinerarySummaries(vec![ItinerarySummary {
///     id: 1,
///     city: "Milano".to_string(),
///     days: 2,
///     locations: 4,
///     google_maps_list: Some("Milano Highlights".to_string()),
///     updated_at: Timestamp::now(),
/// }]);
/// let output = summaries.to_string();
/// assert!(output.contains("Milano (ID: 1)"));
/// assert!(output.contains("2 days, 4 places"));
/// ```
pub struct ItinerarySummaries(pub Vec<ItinerarySummary>);

impl ItinerarySummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItinerarySummary> {
        self.0.iter()
    }
}

impl Index<usize> for ItinerarySummaries {
    type Output = ItinerarySummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ItinerarySummaries {
    type Item = ItinerarySummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ItinerarySummaries {
    type Item = &'a ItinerarySummary;
    type IntoIter = std::slice::Iter<'a, ItinerarySummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ItinerarySummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No itineraries found.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a list of places, e.g. candidates for a
/// day.
pub struct Places(pub Vec<Place>);

impl Places {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Places {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No places to choose from.");
        }
        for place in &self.0 {
            write!(f, "{place}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying Google Maps lists as an overview.
///
/// Only the name, city and place count of each list are shown; use the
/// list's own `Display` for its places.
pub struct MapsLists(pub Vec<GoogleMapsList>);

impl MapsLists {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for MapsLists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No Google Maps lists found. Run `nomad list import` to add some.");
        }
        for list in &self.0 {
            writeln!(f, "## {} (ID: {})", list.list_name, list.id)?;
            writeln!(f)?;
            if !list.city.is_empty() {
                writeln!(f, "- **City**: {}", list.city)?;
            }
            writeln!(f, "- **Places**: {}", list.places.len())?;
            writeln!(f, "- **Imported**: {}", LocalDateTime(&list.created_at))?;
            writeln!(f)?;
        }
        Ok(())
    }
}
