//! Google Maps list model definition and document decoding.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Coordinate, Place};
use crate::{
    error::{NomadError, Result},
    store::{Collection, Document, FromDocument},
};

/// Fields stored in a Google Maps list document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapsListFields {
    #[serde(default)]
    pub city: String,
    pub list_name: String,
    #[serde(default)]
    pub places: Vec<Place>,
}

/// A named collection of candidate places for a city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleMapsList {
    /// Store-assigned identifier
    pub id: u64,

    /// City the list covers
    pub city: String,

    /// List name, the identity key used by itineraries
    pub list_name: String,

    /// Candidate places
    #[serde(default)]
    pub places: Vec<Place>,

    /// Timestamp when the list was stored (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the list was last modified (UTC)
    pub updated_at: Timestamp,
}

impl GoogleMapsList {
    /// Average coordinate of the list's places.
    pub fn center(&self) -> Option<Coordinate> {
        Coordinate::centroid(self.places.iter().map(Place::coordinate))
    }

    /// Finds a place by exact name.
    pub fn place(&self, name: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.name == name)
    }
}

impl FromDocument for GoogleMapsList {
    const COLLECTION: Collection = Collection::GoogleMapsLists;

    fn from_document(doc: Document) -> Result<Self> {
        let fields: MapsListFields = doc.decode_fields(Self::COLLECTION)?;

        if fields.list_name.trim().is_empty() {
            return Err(NomadError::MalformedDocument {
                collection: Self::COLLECTION,
                id: doc.id,
                reason: "listName is empty".to_string(),
            });
        }

        Ok(GoogleMapsList {
            id: doc.id,
            city: fields.city,
            list_name: fields.list_name,
            places: fields.places,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}
