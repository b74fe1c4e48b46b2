//! Ordering of candidate places by opening hour or distance.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{Coordinate, Place};

/// How candidate places are ordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Earliest opening hour first
    #[default]
    Opening,

    /// Nearest to a start point first
    Distance,
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "opening" => Ok(SortMode::Opening),
            "distance" => Ok(SortMode::Distance),
            _ => Err(format!("Invalid sort mode: {s}")),
        }
    }
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Opening => "opening",
            SortMode::Distance => "distance",
        }
    }
}

/// Parses the leading hour out of free-text opening hours.
///
/// Takes the text before the first `:`, keeps only its digits and parses
/// them. Anything unparseable yields 0.
///
/// # Examples
///
/// ```rust
/// use nomad_core::sort::parse_opening_hour;
///
/// assert_eq!(parse_opening_hour("08:00 - 20:00"), 8);
/// assert_eq!(parse_opening_hour("9:30-18:00"), 9);
/// assert_eq!(parse_opening_hour("—"), 0);
/// ```
pub fn parse_opening_hour(hours: &str) -> u32 {
    let head = hours.split(':').next().unwrap_or_default();
    let digits: String = head.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Returns a newly ordered copy of `places`.
///
/// Both modes are stable. In [`SortMode::Distance`] without a `start` the
/// input order is kept.
pub fn sort_places(places: &[Place], mode: SortMode, start: Option<Coordinate>) -> Vec<Place> {
    let mut sorted = places.to_vec();
    match (mode, start) {
        (SortMode::Opening, _) => sorted.sort_by_key(Place::opening_hour),
        (SortMode::Distance, Some(start)) => sorted.sort_by(|a, b| {
            a.coordinate()
                .distance_to(&start)
                .total_cmp(&b.coordinate().distance_to(&start))
        }),
        (SortMode::Distance, None) => {}
    }
    sorted
}
