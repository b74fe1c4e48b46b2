//! Google Maps list operations for the TripPlanner.

use log::info;

use super::TripPlanner;
use crate::{
    demo,
    error::{NomadError, Result},
    import::{self, ImportReport},
    models::{GoogleMapsList, MapsListFields},
    params::{DeleteMapsList, Id},
    store::{decode_documents, Collection, DocumentStore, FromDocument},
};

fn all_lists(store: &dyn DocumentStore) -> Result<Vec<GoogleMapsList>> {
    Ok(decode_documents(store.list_all(Collection::GoogleMapsLists)?))
}

/// Looks up a list by its exact name.
pub(crate) fn find_list_by_name(store: &dyn DocumentStore, name: &str) -> Result<GoogleMapsList> {
    all_lists(store)?
        .into_iter()
        .find(|list| list.list_name == name)
        .ok_or_else(|| NomadError::ListNotFound {
            name: name.to_string(),
        })
}

impl TripPlanner {
    /// Lists all Google Maps lists in import order.
    pub async fn list_maps_lists(&self) -> Result<Vec<GoogleMapsList>> {
        self.with_store(|store| all_lists(store)).await
    }

    /// Retrieves a Google Maps list by its ID.
    pub async fn get_maps_list(&self, params: &Id) -> Result<Option<GoogleMapsList>> {
        let id = params.id;
        self.with_store(move |store| {
            store
                .get(Collection::GoogleMapsLists, id)?
                .map(GoogleMapsList::from_document)
                .transpose()
        })
        .await
    }

    /// Finds a Google Maps list by name.
    pub async fn find_maps_list(&self, name: &str) -> Result<Option<GoogleMapsList>> {
        let name = name.to_string();
        self.with_store(move |store| match find_list_by_name(store, &name) {
            Ok(list) => Ok(Some(list)),
            Err(NomadError::ListNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        })
        .await
    }

    /// Permanently deletes a Google Maps list. Requires confirmation.
    ///
    /// Itineraries referencing the list keep its name; adding places to them
    /// fails until a list with that name exists again.
    pub async fn delete_maps_list(&self, params: &DeleteMapsList) -> Result<GoogleMapsList> {
        if !params.confirmed {
            return Err(NomadError::invalid_input("confirmed")
                .with_reason("Deleting a Google Maps list requires confirmation"));
        }
        let id = params.id;

        self.with_store(move |store| {
            let list = store
                .get(Collection::GoogleMapsLists, id)?
                .ok_or(NomadError::DocumentNotFound {
                    collection: Collection::GoogleMapsLists,
                    id,
                })
                .and_then(GoogleMapsList::from_document)?;
            store.delete(Collection::GoogleMapsLists, id)?;
            info!("Deleted list '{}' (ID: {id})", list.list_name);
            Ok(list)
        })
        .await
    }

    /// Imports the bundled demo lists.
    pub async fn import_demo_lists(&self) -> Result<ImportReport> {
        self.import_lists(demo::google_maps_lists()).await
    }

    /// Imports `lists`, skipping names already present, then removes
    /// duplicate documents.
    pub async fn import_lists(&self, lists: Vec<MapsListFields>) -> Result<ImportReport> {
        self.with_store(move |store| import::import_lists(store, &lists))
            .await
    }
}
