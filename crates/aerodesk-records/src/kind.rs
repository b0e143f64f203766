use aerodesk_types::{CargoItem, Flight};
use serde::de::DeserializeOwned;

use crate::fallback::{sample_cargo, sample_flights};
use crate::search::Searchable;

/// A record type served as a backend collection.
pub trait RecordKind: Searchable + Clone + DeserializeOwned + Send + Sync + 'static {
    /// Collection name. Doubles as the endpoint path segment and the
    /// payload field that holds the records.
    const COLLECTION: &'static str;

    /// Singular noun used in operator-facing messages.
    const LABEL: &'static str;

    /// The sample set shown when the collection cannot be loaded.
    fn fallback_dataset() -> Vec<Self>;
}

impl RecordKind for Flight {
    const COLLECTION: &'static str = "flights";
    const LABEL: &'static str = "flight";

    fn fallback_dataset() -> Vec<Self> {
        sample_flights()
    }
}

impl RecordKind for CargoItem {
    const COLLECTION: &'static str = "cargo";
    const LABEL: &'static str = "cargo";

    fn fallback_dataset() -> Vec<Self> {
        sample_cargo()
    }
}
