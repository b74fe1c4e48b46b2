//! Seeding of Google Maps lists with duplicate cleanup.
//!
//! The import is partial-failure tolerant rather than transactional: a list
//! that fails to insert is logged and reported while the remaining lists are
//! still processed. After inserting, a cleanup pass deletes every document
//! whose `listName` was already seen earlier in collection order, so repeated
//! or overlapping runs converge to one document per name.

use std::collections::HashSet;

use log::{error, info};

use crate::{
    error::Result,
    models::MapsListFields,
    store::{to_fields, Collection, DocumentStore},
};

const LIST_NAME_KEY: &str = "listName";

/// Outcome of an import run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    /// Lists inserted by this run as `(name, id)`
    pub imported: Vec<(String, u64)>,
    /// Names skipped because a list with that name already existed
    pub skipped: Vec<String>,
    /// Lists that failed to insert as `(name, error message)`
    pub failed: Vec<(String, String)>,
    /// Duplicate documents deleted by the cleanup pass as `(name, id)`
    pub removed_duplicates: Vec<(String, u64)>,
}

impl ImportReport {
    /// Whether every list was either imported or already present.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Imports `lists` into the Google Maps list collection, skipping names that
/// already exist, then removes leftover duplicates.
///
/// Failed inserts do not abort the run. Errors while listing the collection
/// or deleting duplicates are returned.
pub fn import_lists<S>(store: &mut S, lists: &[MapsListFields]) -> Result<ImportReport>
where
    S: DocumentStore + ?Sized,
{
    let mut report = ImportReport::default();

    let mut existing: HashSet<String> = store
        .list_all(Collection::GoogleMapsLists)?
        .iter()
        .filter_map(|doc| doc.str_field(LIST_NAME_KEY).map(String::from))
        .collect();

    for list in lists {
        if existing.contains(&list.list_name) {
            info!("Skipped duplicate list '{}'", list.list_name);
            report.skipped.push(list.list_name.clone());
            continue;
        }

        match to_fields(list).and_then(|fields| store.insert(Collection::GoogleMapsLists, fields)) {
            Ok(id) => {
                info!("Imported list '{}' (ID: {id})", list.list_name);
                existing.insert(list.list_name.clone());
                report.imported.push((list.list_name.clone(), id));
            }
            Err(e) => {
                error!("Failed to import list '{}': {e}", list.list_name);
                report.failed.push((list.list_name.clone(), e.to_string()));
            }
        }
    }
    info!("Import complete.");

    report.removed_duplicates = remove_duplicate_lists(store)?;
    Ok(report)
}

/// Deletes every list document whose `listName` already appeared earlier in
/// collection order. Documents without a name are left alone.
pub fn remove_duplicate_lists<S>(store: &mut S) -> Result<Vec<(String, u64)>>
where
    S: DocumentStore + ?Sized,
{
    let docs = store.list_all(Collection::GoogleMapsLists)?;
    let mut seen = HashSet::new();
    let mut removed = Vec::new();

    for doc in docs {
        let Some(name) = doc.str_field(LIST_NAME_KEY) else {
            continue;
        };
        if seen.insert(name.to_string()) {
            continue;
        }

        store.delete(Collection::GoogleMapsLists, doc.id)?;
        info!("Deleted duplicate list '{name}' (ID: {})", doc.id);
        removed.push((name.to_string(), doc.id));
    }

    Ok(removed)
}
