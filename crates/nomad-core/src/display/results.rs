//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{
    import::ImportReport,
    models::{GoogleMapsList, Itinerary},
};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use nomad_core::{display::CreateResult, models::Itinerary};
///
/// let itinerary = Itinerary {
///     id: 3,
///     city: "Copenhagen".to_string(),
///     days: 2,
///     locations: 0,
///     details: vec![],
///     google_maps_list: Some("Copenhagen Hygge".to_string()),
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let output = CreateResult::new(itinerary).to_string();
/// assert!(output.starts_with("Created itinerary for Copenhagen with ID: 3"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Itinerary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created itinerary for {} with ID: {}",
            self.resource.city, self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, optionally
/// listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Itinerary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated itinerary with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Itinerary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted itinerary for {} (ID: {})",
            self.resource.city, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<GoogleMapsList> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted list '{}' (ID: {})",
            self.resource.list_name, self.resource.id
        )
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Imported {} list(s), skipped {}, failed {}.",
            self.imported.len(),
            self.skipped.len(),
            self.failed.len()
        )?;

        if !self.imported.is_empty() {
            writeln!(f)?;
            writeln!(f, "Imported:")?;
            for (name, id) in &self.imported {
                writeln!(f, "- {name} (ID: {id})")?;
            }
        }
        if !self.skipped.is_empty() {
            writeln!(f)?;
            writeln!(f, "Already present:")?;
            for name in &self.skipped {
                writeln!(f, "- {name}")?;
            }
        }
        if !self.failed.is_empty() {
            writeln!(f)?;
            writeln!(f, "Failed:")?;
            for (name, reason) in &self.failed {
                writeln!(f, "- {name}: {reason}")?;
            }
        }
        if !self.removed_duplicates.is_empty() {
            writeln!(f)?;
            writeln!(f, "Removed duplicates:")?;
            for (name, id) in &self.removed_duplicates {
                writeln!(f, "- {name} (ID: {id})")?;
            }
        }
        Ok(())
    }
}
