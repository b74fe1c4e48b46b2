//! Parameter structures for nomad operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework derives beyond serde. Interfaces wrap them: the CLI converts its
//! clap argument structs with `From`, the MCP server wraps them in a
//! transparent serde container with a JSON schema, available when the
//! `schema` feature is enabled.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! User-supplied values are checked by the `validate` methods before anything
//! is written to the store.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{NomadError, Result},
    sort::SortMode,
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating an itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateItinerary {
    /// City the trip is for (must not already have an itinerary)
    pub city: String,
    /// Number of days, at least 1
    pub days: i64,
    /// Name of the Google Maps list to pick places from
    pub list_name: String,
}

impl CreateItinerary {
    /// Validates and normalizes the input.
    ///
    /// Returns the trimmed city, the day count and the trimmed list name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nomad_core::params::CreateItinerary;
    ///
    /// let params = CreateItinerary {
    ///     city: "  Paris ".to_string(),
    ///     days: 3,
    ///     list_name: "Paris Favorites".to_string(),
    /// };
    /// let (city, days, list) = params.validate()?;
    /// assert_eq!((city.as_str(), days, list.as_str()), ("Paris", 3, "Paris Favorites"));
    ///
    /// let bad = CreateItinerary { days: 0, ..params };
    /// assert!(bad.validate().is_err());
    /// # Result::<(), nomad_core::NomadError>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<(String, u32, String)> {
        Ok((
            validate_city(&self.city)?,
            validate_days(self.days)?,
            validate_list_name(&self.list_name)?,
        ))
    }
}

/// Parameters for editing an itinerary. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateItinerary {
    /// Itinerary ID to update
    pub id: u64,
    /// New city name
    pub city: Option<String>,
    /// New number of days
    pub days: Option<i64>,
    /// New Google Maps list name
    pub list_name: Option<String>,
}

impl UpdateItinerary {
    /// Validates the provided fields.
    pub fn validate(&self) -> Result<(Option<String>, Option<u32>, Option<String>)> {
        Ok((
            self.city.as_deref().map(validate_city).transpose()?,
            self.days.map(validate_days).transpose()?,
            self.list_name.as_deref().map(validate_list_name).transpose()?,
        ))
    }

    /// Whether the request changes anything.
    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.days.is_none() && self.list_name.is_none()
    }
}

/// Parameters for permanently deleting an itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteItinerary {
    /// Itinerary ID to delete
    pub id: u64,
    /// Must be true; guards against accidental deletion
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for permanently deleting a Google Maps list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteMapsList {
    /// List ID to delete
    pub id: u64,
    /// Must be true; guards against accidental deletion
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for adding a place from the itinerary's list to a day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddPlace {
    /// Itinerary to modify
    pub itinerary_id: u64,
    /// 1-based day number
    pub day: u32,
    /// Name of a place in the itinerary's Google Maps list
    pub place: String,
}

/// Parameters for removing a place from a day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RemovePlace {
    /// Itinerary to modify
    pub itinerary_id: u64,
    /// 1-based day number
    pub day: u32,
    /// Name of the planned place
    pub place: String,
}

/// Parameters for listing places that can still be added to an itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CandidatePlaces {
    /// Itinerary whose list is browsed
    pub itinerary_id: u64,
    /// Ordering: 'opening' (default) or 'distance'
    #[serde(default)]
    pub sort: SortMode,
    /// Name of a place in the list to measure distances from
    pub start: Option<String>,
}

fn validate_city(city: &str) -> Result<String> {
    let city = city.trim();
    if city.is_empty() {
        return Err(NomadError::invalid_input("city").with_reason("Please enter a name."));
    }
    Ok(city.to_string())
}

/// Longest trip accepted, in days.
pub const MAX_DAYS: u32 = 365;

fn validate_days(days: i64) -> Result<u32> {
    match u32::try_from(days) {
        Ok(days @ 1..=MAX_DAYS) => Ok(days),
        _ => Err(NomadError::invalid_input("days")
            .with_reason("Please enter a valid number of days.")),
    }
}

fn validate_list_name(list_name: &str) -> Result<String> {
    let list_name = list_name.trim();
    if list_name.is_empty() {
        return Err(NomadError::invalid_input("list_name").with_reason("Please choose a list."));
    }
    Ok(list_name.to_string())
}
