//! Place and coordinate models.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sort::parse_opening_hour;

/// Category of a point of interest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlaceType {
    Food,
    Museum,
    Store,
    Landmark,
    Park,
}

impl FromStr for PlaceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(PlaceType::Food),
            "museum" => Ok(PlaceType::Museum),
            "store" => Ok(PlaceType::Store),
            "landmark" => Ok(PlaceType::Landmark),
            "park" => Ok(PlaceType::Park),
            _ => Err(format!("Invalid place type: {s}")),
        }
    }
}

impl PlaceType {
    /// Stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceType::Food => "food",
            PlaceType::Museum => "museum",
            PlaceType::Store => "store",
            PlaceType::Landmark => "landmark",
            PlaceType::Park => "park",
        }
    }

    /// Icon used when listing places.
    pub fn icon(&self) -> &'static str {
        match self {
            PlaceType::Food => "🍴",
            PlaceType::Museum => "🏛",
            PlaceType::Store => "🛒",
            PlaceType::Landmark => "📍",
            PlaceType::Park => "🌳",
        }
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Planar Euclidean distance in degree space.
    ///
    /// Not a geodesic distance; good enough to order nearby places within
    /// one city.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        ((self.lat - other.lat).powi(2) + (self.lng - other.lng).powi(2)).sqrt()
    }

    /// Average coordinate of a set of points, `None` when empty.
    pub fn centroid<I>(points: I) -> Option<Coordinate>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let (count, lat, lng) = points
            .into_iter()
            .fold((0usize, 0.0, 0.0), |(n, lat, lng), p| (n + 1, lat + p.lat, lng + p.lng));

        (count > 0).then(|| Coordinate::new(lat / count as f64, lng / count as f64))
    }
}

/// A single point of interest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    /// Display name, used as identity within a day or list
    pub name: String,

    /// Category of the place
    #[serde(rename = "type")]
    pub kind: PlaceType,

    /// Free-text opening hours, e.g. "08:00 - 20:00"
    #[serde(default)]
    pub hours: String,

    /// Latitude in degrees
    pub lat: f64,

    /// Longitude in degrees
    pub lng: f64,
}

impl Place {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    /// Leading hour of the opening-hours text, 0 when unparseable.
    pub fn opening_hour(&self) -> u32 {
        parse_opening_hour(&self.hours)
    }

    /// Google Maps driving directions to this place.
    pub fn directions_url(&self) -> String {
        format!(
            "https://www.google.com/maps/dir/?api=1&destination={},{}&travelmode=driving",
            self.lat, self.lng
        )
    }
}
