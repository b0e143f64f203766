//! Free-text search over record sets.
//!
//! Matching is a case-insensitive substring test against a fixed set of
//! fields per record type. A blank term matches everything.

use aerodesk_types::{CargoItem, Flight};

/// Hazardous cargo also matches any term that is a substring of this phrase,
/// so typing `hazardous` or `dangerous` surfaces every hazmat item.
pub const HAZMAT_SEARCH_PHRASE: &str = "hazardous dangerous";

/// A record that can be matched against a search term.
pub trait Searchable {
    /// Whether any searchable field contains `needle`.
    ///
    /// `needle` is already lower-cased and non-blank.
    fn matches(&self, needle: &str) -> bool;
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Searchable for Flight {
    fn matches(&self, needle: &str) -> bool {
        contains(&self.flight_number, needle)
            || contains(&self.departure_airport, needle)
            || contains(&self.arrival_airport, needle)
            || contains(self.status.as_str(), needle)
    }
}

impl Searchable for CargoItem {
    fn matches(&self, needle: &str) -> bool {
        contains(&self.flight_number, needle)
            || contains(&self.waybill_number, needle)
            || contains(&self.shipper_name, needle)
            || contains(&self.consignee_name, needle)
            || contains(&self.cargo_description, needle)
            || (self.hazardous_material && HAZMAT_SEARCH_PHRASE.contains(needle))
            || self
                .special_handling
                .as_ref()
                .is_some_and(|handling| contains(handling.as_str(), needle))
    }
}

/// Lower-cases a search term, or returns `None` when it is blank.
///
/// Non-blank terms keep their surrounding whitespace.
pub fn normalize_term(term: &str) -> Option<String> {
    if term.trim().is_empty() {
        None
    } else {
        Some(term.to_lowercase())
    }
}

/// Returns the records matching `term`, in their original order.
pub fn filter<T: Searchable + Clone>(records: &[T], term: &str) -> Vec<T> {
    match normalize_term(term) {
        None => records.to_vec(),
        Some(needle) => records
            .iter()
            .filter(|record| record.matches(&needle))
            .cloned()
            .collect(),
    }
}
