//! Tests for the planner module.

use tempfile::TempDir;

use super::*;
use crate::{
    models::MapsListFields,
    params::{
        AddPlace, CandidatePlaces, CreateItinerary, DeleteItinerary, DeleteMapsList, Id,
        RemovePlace, UpdateItinerary, MAX_DAYS,
    },
    sort::SortMode,
    store::{to_fields, Collection},
};

/// Helper function to create a test planner backed by SQLite
async fn create_test_planner() -> (TempDir, TripPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = TripPlannerBuilder::new()
        .with_database_path(&db_path)
        .build()
        .await
        .expect("Failed to create planner");
    planner
        .import_demo_lists()
        .await
        .expect("Failed to import demo lists");
    (temp_dir, planner)
}

async fn create_paris(planner: &TripPlanner, days: i64) -> crate::models::Itinerary {
    planner
        .create_itinerary(&CreateItinerary {
            city: "Paris".to_string(),
            days,
            list_name: "Paris Favorites".to_string(),
        })
        .await
        .expect("Failed to create itinerary")
}

fn add(itinerary_id: u64, day: u32, place: &str) -> AddPlace {
    AddPlace {
        itinerary_id,
        day,
        place: place.to_string(),
    }
}

#[tokio::test]
async fn test_create_itinerary_starts_empty() {
    let (_temp_dir, planner) = create_test_planner().await;

    let paris = create_paris(&planner, 3).await;
    assert_eq!(paris.city, "Paris");
    assert_eq!(paris.days, 3);
    assert_eq!(paris.locations, 0);
    assert!(paris.details.is_empty());
    assert_eq!(paris.google_maps_list.as_deref(), Some("Paris Favorites"));

    let days = planner
        .itinerary_days(&Id { id: paris.id })
        .await
        .expect("Failed to partition days");
    assert_eq!(days.len(), 3);
    assert!(days.iter().all(|d| d.places.is_empty()));
}

#[tokio::test]
async fn test_create_rejects_duplicate_city_ignoring_case() {
    let (_temp_dir, planner) = create_test_planner().await;
    create_paris(&planner, 2).await;

    let err = planner
        .create_itinerary(&CreateItinerary {
            city: "  pARIS ".to_string(),
            days: 4,
            list_name: "Paris Favorites".to_string(),
        })
        .await
        .expect_err("Duplicate city accepted");
    assert!(matches!(err, NomadError::InvalidInput { ref field, .. } if field == "city"));
    assert_eq!(planner.list_itineraries().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_rejects_unknown_list_and_bad_days() {
    let (_temp_dir, planner) = create_test_planner().await;

    let err = planner
        .create_itinerary(&CreateItinerary {
            city: "Oslo".to_string(),
            days: 2,
            list_name: "Oslo Secrets".to_string(),
        })
        .await
        .expect_err("Unknown list accepted");
    assert!(matches!(err, NomadError::ListNotFound { .. }));

    let err = planner
        .create_itinerary(&CreateItinerary {
            city: "Milano".to_string(),
            days: 0,
            list_name: "Milano Highlights".to_string(),
        })
        .await
        .expect_err("Zero days accepted");
    assert!(err.is_validation());

    let err = planner
        .create_itinerary(&CreateItinerary {
            city: "Paris".to_string(),
            days: 4_000_000_000,
            list_name: "Paris Favorites".to_string(),
        })
        .await
        .expect_err("Oversized trip accepted");
    assert!(matches!(err, NomadError::InvalidInput { ref field, .. } if field == "days"));
    assert!(planner.list_itineraries().await.unwrap().is_empty());

    let paris = create_paris(&planner, 3).await;
    let err = planner
        .update_itinerary(&UpdateItinerary {
            id: paris.id,
            days: Some(i64::from(MAX_DAYS) + 1),
            ..Default::default()
        })
        .await
        .expect_err("Oversized update accepted");
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_add_and_remove_place_keeps_locations_in_sync() {
    let (_temp_dir, planner) = create_test_planner().await;
    let paris = create_paris(&planner, 3).await;

    planner
        .add_place(&add(paris.id, 2, "CORTADO"))
        .await
        .expect("Failed to add place");
    let updated = planner
        .add_place(&add(paris.id, 2, "Louvre Museum"))
        .await
        .expect("Failed to add place");
    assert_eq!(updated.locations, 2);
    assert_eq!(updated.details.len(), 1);

    let updated = planner
        .add_place(&add(paris.id, 1, "Eiffel Tower"))
        .await
        .expect("Failed to add place");
    assert_eq!(updated.locations, 3);
    let stored_days: Vec<u32> = updated.details.iter().map(|d| d.day).collect();
    assert_eq!(stored_days, vec![1, 2]);

    let updated = planner
        .remove_place(&RemovePlace {
            itinerary_id: paris.id,
            day: 1,
            place: "Eiffel Tower".to_string(),
        })
        .await
        .expect("Failed to remove place");
    assert_eq!(updated.locations, 2);
    assert_eq!(updated.details.len(), 1, "emptied day should be dropped");

    let err = planner
        .remove_place(&RemovePlace {
            itinerary_id: paris.id,
            day: 3,
            place: "CORTADO".to_string(),
        })
        .await
        .expect_err("Removed a place that was not planned");
    assert!(matches!(err, NomadError::PlaceNotFound { .. }));
}

#[tokio::test]
async fn test_remove_place_only_drops_the_edited_day() {
    let (_temp_dir, planner) = create_test_planner().await;
    let paris = create_paris(&planner, 3).await;
    planner
        .add_place(&add(paris.id, 2, "CORTADO"))
        .await
        .expect("Failed to add place");

    // An empty day entry written by another client
    planner
        .with_store(move |store| {
            store.update(
                Collection::Itineraries,
                paris.id,
                to_fields(&serde_json::json!({
                    "details": [
                        { "day": 1, "places": [] },
                        { "day": 2, "places": [{ "name": "CORTADO", "type": "food",
                          "hours": "08:00 - 20:00", "lat": 48.8582, "lng": 2.347 }] }
                    ]
                }))?,
            )
        })
        .await
        .expect("Failed to write details");

    let updated = planner
        .remove_place(&RemovePlace {
            itinerary_id: paris.id,
            day: 2,
            place: "CORTADO".to_string(),
        })
        .await
        .expect("Failed to remove place");
    let stored_days: Vec<u32> = updated.details.iter().map(|d| d.day).collect();
    assert_eq!(stored_days, vec![1]);
    assert_eq!(updated.locations, 0);
}

#[tokio::test]
async fn test_add_place_rejections() {
    let (_temp_dir, planner) = create_test_planner().await;
    let paris = create_paris(&planner, 2).await;

    planner
        .add_place(&add(paris.id, 1, "CORTADO"))
        .await
        .expect("Failed to add place");

    let err = planner
        .add_place(&add(paris.id, 1, "CORTADO"))
        .await
        .expect_err("Same place twice in one day");
    assert!(matches!(err, NomadError::InvalidInput { ref field, .. } if field == "place"));

    planner
        .add_place(&add(paris.id, 2, "CORTADO"))
        .await
        .expect("Same place on another day should be allowed");

    let err = planner
        .add_place(&add(paris.id, 3, "Louvre Museum"))
        .await
        .expect_err("Day beyond trip length");
    assert!(matches!(err, NomadError::InvalidInput { ref field, .. } if field == "day"));

    let err = planner
        .add_place(&add(paris.id, 1, "Duomo di Milano"))
        .await
        .expect_err("Place from another list");
    assert!(matches!(err, NomadError::PlaceNotFound { .. }));

    let err = planner
        .add_place(&add(999, 1, "CORTADO"))
        .await
        .expect_err("Unknown itinerary");
    assert!(matches!(err, NomadError::ItineraryNotFound { id: 999 }));
}

#[tokio::test]
async fn test_candidate_places_excludes_planned_and_sorts() {
    let (_temp_dir, planner) = create_test_planner().await;
    let paris = create_paris(&planner, 3).await;
    planner
        .add_place(&add(paris.id, 1, "Jardin du Luxembourg"))
        .await
        .expect("Failed to add place");

    let by_opening = planner
        .candidate_places(&CandidatePlaces {
            itinerary_id: paris.id,
            sort: SortMode::Opening,
            start: None,
        })
        .await
        .expect("Failed to list candidates");
    assert_eq!(by_opening.len(), 10);
    assert!(by_opening.iter().all(|p| p.name != "Jardin du Luxembourg"));
    let hours: Vec<u32> = by_opening.iter().map(|p| p.opening_hour()).collect();
    let mut sorted = hours.clone();
    sorted.sort();
    assert_eq!(hours, sorted);

    let by_distance = planner
        .candidate_places(&CandidatePlaces {
            itinerary_id: paris.id,
            sort: SortMode::Distance,
            start: Some("Louvre Museum".to_string()),
        })
        .await
        .expect("Failed to list candidates");
    assert_eq!(by_distance[0].name, "Louvre Museum");

    let err = planner
        .candidate_places(&CandidatePlaces {
            itinerary_id: paris.id,
            sort: SortMode::Distance,
            start: Some("Big Ben".to_string()),
        })
        .await
        .expect_err("Unknown start accepted");
    assert!(matches!(err, NomadError::InvalidInput { ref field, .. } if field == "start"));
}

#[tokio::test]
async fn test_update_itinerary() {
    let (_temp_dir, planner) = create_test_planner().await;
    let paris = create_paris(&planner, 3).await;
    let milano = planner
        .create_itinerary(&CreateItinerary {
            city: "Milano".to_string(),
            days: 2,
            list_name: "Milano Highlights".to_string(),
        })
        .await
        .expect("Failed to create itinerary");

    let updated = planner
        .update_itinerary(&UpdateItinerary {
            id: paris.id,
            city: Some("paris".to_string()),
            days: Some(5),
            list_name: None,
        })
        .await
        .expect("Failed to update itinerary");
    assert_eq!(updated.city, "paris");
    assert_eq!(updated.days, 5);
    assert_eq!(updated.google_maps_list.as_deref(), Some("Paris Favorites"));

    let err = planner
        .update_itinerary(&UpdateItinerary {
            id: milano.id,
            city: Some("PARIS".to_string()),
            ..Default::default()
        })
        .await
        .expect_err("Renamed onto an existing city");
    assert!(err.is_validation());

    let err = planner
        .update_itinerary(&UpdateItinerary {
            id: milano.id,
            ..Default::default()
        })
        .await
        .expect_err("Empty update accepted");
    assert!(err.is_validation());

    let err = planner
        .update_itinerary(&UpdateItinerary {
            id: milano.id,
            list_name: Some("Nope".to_string()),
            ..Default::default()
        })
        .await
        .expect_err("Unknown list accepted");
    assert!(matches!(err, NomadError::ListNotFound { .. }));
}

#[tokio::test]
async fn test_shrinking_days_hides_later_entries() {
    let (_temp_dir, planner) = create_test_planner().await;
    let paris = create_paris(&planner, 3).await;
    planner
        .add_place(&add(paris.id, 3, "Louvre Museum"))
        .await
        .expect("Failed to add place");

    planner
        .update_itinerary(&UpdateItinerary {
            id: paris.id,
            days: Some(2),
            ..Default::default()
        })
        .await
        .expect("Failed to update itinerary");

    let days = planner.itinerary_days(&Id { id: paris.id }).await.unwrap();
    assert_eq!(days.len(), 2);
    assert!(days.iter().all(|d| d.places.is_empty()));

    let stored = planner
        .get_itinerary(&Id { id: paris.id })
        .await
        .unwrap()
        .expect("Itinerary missing");
    assert_eq!(stored.details.len(), 1);
}

#[tokio::test]
async fn test_delete_itinerary_requires_confirmation() {
    let (_temp_dir, planner) = create_test_planner().await;
    let paris = create_paris(&planner, 3).await;

    let err = planner
        .delete_itinerary(&DeleteItinerary {
            id: paris.id,
            confirmed: false,
        })
        .await
        .expect_err("Deleted without confirmation");
    assert!(err.is_validation());

    let deleted = planner
        .delete_itinerary(&DeleteItinerary {
            id: paris.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete itinerary");
    assert_eq!(deleted.city, "Paris");
    assert!(planner
        .get_itinerary(&Id { id: paris.id })
        .await
        .unwrap()
        .is_none());

    let err = planner
        .delete_itinerary(&DeleteItinerary {
            id: paris.id,
            confirmed: true,
        })
        .await
        .expect_err("Deleted twice");
    assert!(matches!(err, NomadError::ItineraryNotFound { .. }));
}

#[tokio::test]
async fn test_maps_list_operations() {
    let (_temp_dir, planner) = create_test_planner().await;

    let lists = planner.list_maps_lists().await.expect("Failed to list");
    assert_eq!(lists.len(), 5);

    let nyc = planner
        .find_maps_list("NYC Must See")
        .await
        .unwrap()
        .expect("List missing");
    assert_eq!(nyc.city, "New York");
    assert!(planner.find_maps_list("nyc must see").await.unwrap().is_none());

    let fetched = planner
        .get_maps_list(&Id { id: nyc.id })
        .await
        .unwrap()
        .expect("List missing");
    assert_eq!(fetched, nyc);

    let report = planner.import_demo_lists().await.expect("Reimport failed");
    assert!(report.imported.is_empty());
    assert_eq!(report.skipped.len(), 5);

    planner
        .delete_maps_list(&DeleteMapsList {
            id: nyc.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete list");
    assert_eq!(planner.list_maps_lists().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_import_custom_lists() {
    let planner = TripPlannerBuilder::new().in_memory().build().await.unwrap();

    let report = planner
        .import_lists(vec![
            MapsListFields {
                city: "Oslo".to_string(),
                list_name: "Oslo Weekend".to_string(),
                places: Vec::new(),
            },
            MapsListFields {
                city: "Oslo".to_string(),
                list_name: "Oslo Weekend".to_string(),
                places: Vec::new(),
            },
        ])
        .await
        .expect("Import failed");
    assert_eq!(report.imported.len(), 1);
    assert_eq!(report.skipped, vec!["Oslo Weekend".to_string()]);
}

#[tokio::test]
async fn test_seed_demo_itinerary() {
    let planner = TripPlannerBuilder::new().in_memory().build().await.unwrap();

    let err = planner
        .seed_demo_itinerary()
        .await
        .expect_err("Seeded without lists");
    assert!(matches!(err, NomadError::ListNotFound { .. }));

    planner.import_demo_lists().await.unwrap();
    let paris = planner
        .seed_demo_itinerary()
        .await
        .unwrap()
        .expect("Demo itinerary not created");
    assert_eq!(paris.days, 3);
    assert_eq!(paris.locations, 9);

    assert!(planner.seed_demo_itinerary().await.unwrap().is_none());
    assert!(planner.find_itinerary_by_city("PARIS").await.unwrap().is_some());
}

#[tokio::test]
async fn test_summaries() {
    let (_temp_dir, planner) = create_test_planner().await;
    let paris = create_paris(&planner, 3).await;
    planner
        .add_place(&add(paris.id, 1, "CORTADO"))
        .await
        .unwrap();

    let summaries = planner
        .list_itinerary_summaries()
        .await
        .expect("Failed to list summaries");
    assert_eq!(summaries.0.len(), 1);
    assert_eq!(summaries.0[0].city, "Paris");
    assert_eq!(summaries.0[0].locations, 1);
}
