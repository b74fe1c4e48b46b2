//! Itinerary operations for the TripPlanner.

use log::info;
use serde::Serialize;

use super::{list_ops::find_list_by_name, TripPlanner};
use crate::{
    demo,
    display::ItinerarySummaries,
    error::{NomadError, Result},
    models::{Itinerary, ItineraryDay, ItineraryFields, Place},
    params::{
        AddPlace, CandidatePlaces, CreateItinerary, DeleteItinerary, Id, RemovePlace,
        UpdateItinerary,
    },
    partition::count_locations,
    sort::sort_places,
    store::{decode_documents, to_fields, Collection, DocumentStore, FromDocument},
};

#[derive(Serialize)]
struct DetailsPatch<'a> {
    details: &'a [ItineraryDay],
    locations: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItineraryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    google_maps_list: Option<String>,
}

fn load_itinerary(store: &dyn DocumentStore, id: u64) -> Result<Itinerary> {
    store
        .get(Collection::Itineraries, id)?
        .ok_or(NomadError::ItineraryNotFound { id })
        .and_then(Itinerary::from_document)
}

fn all_itineraries(store: &dyn DocumentStore) -> Result<Vec<Itinerary>> {
    Ok(decode_documents(store.list_all(Collection::Itineraries)?))
}

fn ensure_city_available(store: &dyn DocumentStore, city: &str, except: Option<u64>) -> Result<()> {
    let taken = all_itineraries(store)?
        .iter()
        .any(|it| Some(it.id) != except && it.matches_city(city));
    if taken {
        return Err(NomadError::invalid_input("city")
            .with_reason(format!("An itinerary for '{city}' already exists.")));
    }
    Ok(())
}

fn ensure_day_in_range(itinerary: &Itinerary, day: u32) -> Result<()> {
    if day == 0 || day > itinerary.days {
        return Err(NomadError::invalid_input("day").with_reason(format!(
            "Day {day} is outside 1..={} for {}",
            itinerary.days, itinerary.city
        )));
    }
    Ok(())
}

fn itinerary_list_name(itinerary: &Itinerary) -> Result<&str> {
    itinerary.google_maps_list.as_deref().ok_or_else(|| {
        NomadError::invalid_input("list_name").with_reason(format!(
            "Itinerary for {} has no Google Maps list",
            itinerary.city
        ))
    })
}

/// Persists `details` and the recomputed `locations` count.
fn write_details(store: &mut dyn DocumentStore, id: u64, details: &[ItineraryDay]) -> Result<()> {
    let patch = DetailsPatch {
        details,
        locations: count_locations(details),
    };
    store.update(Collection::Itineraries, id, to_fields(&patch)?)
}

fn insert_itinerary(store: &mut dyn DocumentStore, fields: &ItineraryFields) -> Result<Itinerary> {
    let id = store.insert(Collection::Itineraries, to_fields(fields)?)?;
    info!("Created itinerary for {} (ID: {id})", fields.city);
    load_itinerary(store, id)
}

fn not_found_as_itinerary(e: NomadError) -> NomadError {
    match e {
        NomadError::DocumentNotFound {
            collection: Collection::Itineraries,
            id,
        } => NomadError::ItineraryNotFound { id },
        other => other,
    }
}

impl TripPlanner {
    /// Creates an itinerary with no planned places.
    ///
    /// The city must not already have an itinerary (ignoring case) and the
    /// referenced Google Maps list must exist.
    pub async fn create_itinerary(&self, params: &CreateItinerary) -> Result<Itinerary> {
        let (city, days, list_name) = params.validate()?;

        self.with_store(move |store| {
            ensure_city_available(store, &city, None)?;
            find_list_by_name(store, &list_name)?;

            insert_itinerary(
                store,
                &ItineraryFields {
                    city,
                    days,
                    locations: 0,
                    details: Vec::new(),
                    google_maps_list: Some(list_name),
                },
            )
        })
        .await
    }

    /// Retrieves an itinerary by its ID.
    pub async fn get_itinerary(&self, params: &Id) -> Result<Option<Itinerary>> {
        let id = params.id;
        self.with_store(move |store| {
            store
                .get(Collection::Itineraries, id)?
                .map(Itinerary::from_document)
                .transpose()
        })
        .await
    }

    /// Finds an itinerary by city, ignoring case.
    pub async fn find_itinerary_by_city(&self, city: &str) -> Result<Option<Itinerary>> {
        let city = city.to_string();
        self.with_store(move |store| {
            Ok(all_itineraries(store)?
                .into_iter()
                .find(|it| it.matches_city(&city)))
        })
        .await
    }

    /// Lists all itineraries in creation order. Malformed documents are
    /// skipped.
    pub async fn list_itineraries(&self) -> Result<Vec<Itinerary>> {
        self.with_store(|store| all_itineraries(store)).await
    }

    /// Lists itineraries as summaries for list display.
    pub async fn list_itinerary_summaries(&self) -> Result<ItinerarySummaries> {
        let itineraries = self.list_itineraries().await?;
        Ok(ItinerarySummaries(
            itineraries.iter().map(Into::into).collect(),
        ))
    }

    /// Dense day-by-day view of an itinerary.
    pub async fn itinerary_days(&self, params: &Id) -> Result<Vec<ItineraryDay>> {
        let id = params.id;
        self.with_store(move |store| Ok(load_itinerary(store, id)?.partitioned_days()))
            .await
    }

    /// Edits city, day count or list of an itinerary.
    ///
    /// Reducing the day count keeps stored entries for later days; they are
    /// hidden by the day-by-day view until the count grows again.
    pub async fn update_itinerary(&self, params: &UpdateItinerary) -> Result<Itinerary> {
        if params.is_empty() {
            return Err(NomadError::invalid_input("id")
                .with_reason("Nothing to update: provide city, days or list_name"));
        }
        let (city, days, list_name) = params.validate()?;
        let id = params.id;

        self.with_store(move |store| {
            load_itinerary(store, id)?;
            if let Some(city) = &city {
                ensure_city_available(store, city, Some(id))?;
            }
            if let Some(list_name) = &list_name {
                find_list_by_name(store, list_name)?;
            }

            let patch = ItineraryPatch {
                city,
                days,
                google_maps_list: list_name,
            };
            store
                .update(Collection::Itineraries, id, to_fields(&patch)?)
                .map_err(not_found_as_itinerary)?;
            load_itinerary(store, id)
        })
        .await
    }

    /// Permanently deletes an itinerary. Requires confirmation.
    pub async fn delete_itinerary(&self, params: &DeleteItinerary) -> Result<Itinerary> {
        if !params.confirmed {
            return Err(NomadError::invalid_input("confirmed")
                .with_reason("Deleting an itinerary requires confirmation"));
        }
        let id = params.id;

        self.with_store(move |store| {
            let itinerary = load_itinerary(store, id)?;
            store
                .delete(Collection::Itineraries, id)
                .map_err(not_found_as_itinerary)?;
            info!("Deleted itinerary for {} (ID: {id})", itinerary.city);
            Ok(itinerary)
        })
        .await
    }

    /// Adds a place from the itinerary's Google Maps list to a day.
    ///
    /// The day entry is created when missing. A place already planned for
    /// that day is rejected.
    pub async fn add_place(&self, params: &AddPlace) -> Result<Itinerary> {
        let AddPlace {
            itinerary_id,
            day,
            place,
        } = params.clone();

        self.with_store(move |store| {
            let mut itinerary = load_itinerary(store, itinerary_id)?;
            ensure_day_in_range(&itinerary, day)?;

            let list = find_list_by_name(store, itinerary_list_name(&itinerary)?)?;
            let place = list
                .place(&place)
                .cloned()
                .ok_or(NomadError::PlaceNotFound { name: place })?;

            match itinerary.details.iter_mut().find(|d| d.day == day) {
                Some(entry) if entry.contains(&place.name) => {
                    return Err(NomadError::invalid_input("place").with_reason(format!(
                        "'{}' is already planned for day {day}",
                        place.name
                    )));
                }
                Some(entry) => entry.places.push(place),
                None => {
                    itinerary.details.push(ItineraryDay {
                        day,
                        places: vec![place],
                    });
                    itinerary.details.sort_by_key(|d| d.day);
                }
            }

            write_details(store, itinerary_id, &itinerary.details)?;
            load_itinerary(store, itinerary_id)
        })
        .await
    }

    /// Removes a planned place from a day.
    ///
    /// The edited day is dropped from the stored details once it has no
    /// places left. Other stored days are kept as they are.
    pub async fn remove_place(&self, params: &RemovePlace) -> Result<Itinerary> {
        let RemovePlace {
            itinerary_id,
            day,
            place,
        } = params.clone();

        self.with_store(move |store| {
            let mut itinerary = load_itinerary(store, itinerary_id)?;

            let index = itinerary
                .details
                .iter()
                .position(|d| d.day == day)
                .ok_or_else(|| NomadError::PlaceNotFound {
                    name: place.clone(),
                })?;
            let entry = &mut itinerary.details[index];
            let position = entry
                .places
                .iter()
                .position(|p| p.name == place)
                .ok_or_else(|| NomadError::PlaceNotFound {
                    name: place.clone(),
                })?;
            entry.places.remove(position);
            if entry.places.is_empty() {
                itinerary.details.remove(index);
            }

            write_details(store, itinerary_id, &itinerary.details)?;
            load_itinerary(store, itinerary_id)
        })
        .await
    }

    /// Places from the itinerary's list not yet planned on any day, ordered
    /// by the requested sort.
    ///
    /// `start` names a place in the list; distance ordering without a start
    /// keeps list order.
    pub async fn candidate_places(&self, params: &CandidatePlaces) -> Result<Vec<Place>> {
        let CandidatePlaces {
            itinerary_id,
            sort,
            start,
        } = params.clone();

        self.with_store(move |store| {
            let itinerary = load_itinerary(store, itinerary_id)?;
            let list = find_list_by_name(store, itinerary_list_name(&itinerary)?)?;

            let start = match start.as_deref() {
                Some(name) => Some(list.place(name).map(Place::coordinate).ok_or_else(|| {
                    NomadError::invalid_input("start")
                        .with_reason(format!("'{name}' is not in list '{}'", list.list_name))
                })?),
                None => None,
            };

            let candidates: Vec<Place> = list
                .places
                .iter()
                .filter(|p| !itinerary.is_planned(&p.name))
                .cloned()
                .collect();

            Ok(sort_places(&candidates, sort, start))
        })
        .await
    }

    /// Creates the demo Paris itinerary from the "Paris Favorites" list.
    ///
    /// Returns `None` when Paris already has an itinerary.
    pub async fn seed_demo_itinerary(&self) -> Result<Option<Itinerary>> {
        self.with_store(|store| {
            if all_itineraries(store)?.iter().any(|it| it.matches_city("Paris")) {
                info!("Skipped demo itinerary: Paris already planned");
                return Ok(None);
            }
            let list = find_list_by_name(store, "Paris Favorites")?;

            let details = demo::paris_itinerary_days();
            let itinerary = insert_itinerary(
                store,
                &ItineraryFields {
                    city: "Paris".to_string(),
                    days: details.len() as u32,
                    locations: count_locations(&details),
                    details,
                    google_maps_list: Some(list.list_name),
                },
            )?;
            Ok(Some(itinerary))
        })
        .await
    }
}
