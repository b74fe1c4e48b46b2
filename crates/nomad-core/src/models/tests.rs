//! Tests for model decoding and helpers.

use jiff::Timestamp;
use serde_json::{json, Map, Value};

use super::*;
use crate::{
    error::NomadError,
    store::{decode_documents, to_fields, Document, FromDocument},
};

fn document(id: u64, fields: Value) -> Document {
    let now = Timestamp::now();
    Document {
        id,
        fields: match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        },
        created_at: now,
        updated_at: now,
    }
}

fn place(name: &str, lat: f64, lng: f64) -> Place {
    Place {
        name: name.to_string(),
        kind: PlaceType::Landmark,
        hours: "09:00 - 18:00".to_string(),
        lat,
        lng,
    }
}

#[test]
fn test_place_type_parsing() {
    assert_eq!("Food".parse::<PlaceType>(), Ok(PlaceType::Food));
    assert_eq!("park".parse::<PlaceType>(), Ok(PlaceType::Park));
    assert!("beach".parse::<PlaceType>().is_err());
    assert_eq!(PlaceType::Museum.as_str(), "museum");
}

#[test]
fn test_place_serializes_type_field() {
    let value = serde_json::to_value(place("Louvre", 48.86, 2.33)).unwrap();
    assert_eq!(value["type"], json!("landmark"));
    assert!(value.get("kind").is_none());
}

#[test]
fn test_place_missing_hours_defaults_to_empty() {
    let p: Place = serde_json::from_value(json!({
        "name": "Jardin du Luxembourg",
        "type": "park",
        "lat": 48.8462,
        "lng": 2.3372
    }))
    .unwrap();
    assert_eq!(p.hours, "");
    assert_eq!(p.opening_hour(), 0);
}

#[test]
fn test_centroid() {
    assert_eq!(Coordinate::centroid(Vec::<Coordinate>::new()), None);

    let center = Coordinate::centroid(vec![
        Coordinate::new(48.0, 2.0),
        Coordinate::new(50.0, 4.0),
    ])
    .unwrap();
    assert_eq!(center, Coordinate::new(49.0, 3.0));
}

#[test]
fn test_itinerary_from_document() {
    let doc = document(
        5,
        json!({
            "city": "Paris",
            "days": 3,
            "locations": 1,
            "googleMapsList": "Paris Favorites",
            "details": [
                { "day": 2, "places": [
                    { "name": "CORTADO", "type": "food", "hours": "08:00 - 20:00", "lat": 48.8582, "lng": 2.347 }
                ] }
            ]
        }),
    );

    let itinerary = Itinerary::from_document(doc).expect("Failed to decode itinerary");
    assert_eq!(itinerary.id, 5);
    assert_eq!(itinerary.city, "Paris");
    assert_eq!(itinerary.google_maps_list.as_deref(), Some("Paris Favorites"));
    assert!(itinerary.is_planned("CORTADO"));
    assert!(!itinerary.is_planned("Louvre"));
    assert!(itinerary.matches_city("  paris "));

    let days = itinerary.partitioned_days();
    assert_eq!(days.len(), 3);
    assert!(days[0].places.is_empty());
    assert_eq!(days[1].places.len(), 1);
}

#[test]
fn test_itinerary_rejects_zero_days() {
    let doc = document(9, json!({ "city": "Milano", "days": 0 }));
    assert!(matches!(
        Itinerary::from_document(doc),
        Err(NomadError::MalformedDocument { id: 9, .. })
    ));
}

#[test]
fn test_itinerary_fields_round_trip_keys() {
    let fields = to_fields(&ItineraryFields {
        city: "Frankfurt".to_string(),
        days: 2,
        locations: 0,
        details: Vec::new(),
        google_maps_list: Some("Frankfurt Essentials".to_string()),
    })
    .unwrap();
    assert!(fields.contains_key("googleMapsList"));
    assert!(!fields.contains_key("google_maps_list"));
}

#[test]
fn test_maps_list_from_document() {
    let doc = document(
        2,
        json!({
            "city": "Paris",
            "listName": "Paris Favorites",
            "places": [
                { "name": "A", "type": "food", "hours": "10:00", "lat": 1.0, "lng": 1.0 },
                { "name": "B", "type": "park", "hours": "", "lat": 3.0, "lng": 3.0 }
            ]
        }),
    );

    let list = GoogleMapsList::from_document(doc).expect("Failed to decode list");
    assert_eq!(list.list_name, "Paris Favorites");
    assert_eq!(list.center(), Some(Coordinate::new(2.0, 2.0)));
    assert!(list.place("B").is_some());
    assert!(list.place("C").is_none());
}

#[test]
fn test_decode_documents_skips_malformed() {
    let docs = vec![
        document(1, json!({ "listName": "Good", "places": [] })),
        document(2, json!({ "places": "not a list" })),
        document(3, json!({ "listName": "   " })),
        document(4, json!({ "listName": "Also good" })),
    ];

    let lists: Vec<GoogleMapsList> = decode_documents(docs);
    assert_eq!(
        lists.iter().map(|l| l.id).collect::<Vec<_>>(),
        vec![1, 4]
    );
}

#[test]
fn test_itinerary_center_and_summary() {
    let doc = document(
        7,
        json!({
            "city": "Copenhagen",
            "days": 2,
            "locations": 2,
            "details": [
                { "day": 1, "places": [ serde_json::to_value(place("Tivoli", 55.0, 12.0)).unwrap() ] },
                { "day": 2, "places": [ serde_json::to_value(place("Nyhavn", 57.0, 14.0)).unwrap() ] }
            ]
        }),
    );
    let itinerary = Itinerary::from_document(doc).unwrap();
    assert_eq!(itinerary.center(), Some(Coordinate::new(56.0, 13.0)));

    let summary = ItinerarySummary::from(&itinerary);
    assert_eq!(summary.city, "Copenhagen");
    assert_eq!(summary.locations, 2);
    assert_eq!(summary.google_maps_list, None);
}
