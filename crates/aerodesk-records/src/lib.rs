//! Record sets for the flight and cargo views of AeroDesk.
//!
//! Two pieces live here:
//!
//! - [`RecordFetcher`] loads a collection from a [`RecordSource`] and never
//!   leaves a view empty-handed: a transport failure or a malformed payload
//!   swaps in a fixed sample dataset with an advisory explaining why.
//! - The search and aggregation engine ([`filter`], [`CargoSummary`],
//!   [`RecordView`], [`CargoView`]) derives what the view actually shows
//!   from the current record set and the operator's search term.
//!
//! # Source states
//!
//! | State | Records | Advisory |
//! |-------|---------|----------|
//! | `Loading` | previous set, still visible | unchanged |
//! | `ReadyRemote` | server payload | server `note`, if any |
//! | `ReadyFallback` | sample dataset | fixed failure notice |
//!
//! Every full replacement of the records bumps [`RecordSet::revision`],
//! which is what views key their memoised results on.

mod fallback;
mod fetcher;
mod kind;
mod search;
mod summary;
mod view;

pub use fallback::{sample_cargo, sample_flights};
pub use fetcher::{
    fallback_advisory, FetchedRecords, LoadOutcome, RecordFetcher, RecordSet, RecordSource,
    SourceState,
};
pub use kind::RecordKind;
pub use search::{filter, normalize_term, Searchable, HAZMAT_SEARCH_PHRASE};
pub use summary::CargoSummary;
pub use view::{CargoView, RecordView};
