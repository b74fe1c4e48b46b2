//! Expansion of sparse stored day entries into a dense day-by-day plan.

use std::collections::HashMap;

use crate::models::ItineraryDay;

/// Builds exactly `days` entries numbered `1..=days`.
///
/// Entry `i` is the stored day with `day == i` when one exists, otherwise an
/// empty day. Stored entries outside `1..=days` are dropped. If a day number
/// is stored more than once the first occurrence is used. The function is
/// idempotent: partitioning its own output returns the same sequence.
///
/// # Examples
///
/// ```rust
/// use nomad_core::{models::ItineraryDay, partition::partition_days};
///
/// let stored = vec![ItineraryDay::empty(2), ItineraryDay::empty(7)];
/// let days = partition_days(3, &stored);
/// assert_eq!(days.iter().map(|d| d.day).collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn partition_days(days: u32, details: &[ItineraryDay]) -> Vec<ItineraryDay> {
    let mut by_day: HashMap<u32, &ItineraryDay> = HashMap::with_capacity(details.len());
    for entry in details {
        by_day.entry(entry.day).or_insert(entry);
    }

    (1..=days)
        .map(|day| {
            by_day
                .get(&day)
                .map(|entry| (*entry).clone())
                .unwrap_or_else(|| ItineraryDay::empty(day))
        })
        .collect()
}

/// Total number of places across stored day entries.
///
/// This is the value cached in an itinerary's `locations` field.
pub fn count_locations(details: &[ItineraryDay]) -> u32 {
    details.iter().map(|d| d.places.len() as u32).sum()
}
