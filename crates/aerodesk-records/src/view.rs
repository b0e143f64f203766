//! Memoised search results for a view.

use aerodesk_types::CargoItem;

use crate::fetcher::{RecordSet, SourceState};
use crate::search::{filter, Searchable};
use crate::summary::CargoSummary;

#[derive(Debug)]
struct Memo<T> {
    revision: u64,
    term: String,
    total: usize,
    filtered: Vec<T>,
}

/// The filtered records a view shows for its current search term.
///
/// Results are recomputed only when the record set revision or the term
/// changes. A view is meant to follow a single fetcher, since revisions are
/// only comparable within one.
#[derive(Debug)]
pub struct RecordView<T> {
    term: String,
    memo: Option<Memo<T>>,
}

impl<T> Default for RecordView<T> {
    fn default() -> Self {
        Self {
            term: String::new(),
            memo: None,
        }
    }
}

impl<T: Searchable + Clone> RecordView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// Brings the filtered result up to date with `set`.
    ///
    /// While `set` is loading nothing is recomputed and the previous result,
    /// if any, is kept. Returns whether the result was recomputed.
    pub fn refresh(&mut self, set: &RecordSet<T>) -> bool {
        if set.source_state == SourceState::Loading {
            return false;
        }
        let fresh = self
            .memo
            .as_ref()
            .is_some_and(|m| m.revision == set.revision && m.term == self.term);
        if fresh {
            return false;
        }

        self.memo = Some(Memo {
            revision: set.revision,
            term: self.term.clone(),
            total: set.records.len(),
            filtered: filter(&set.records, &self.term),
        });
        true
    }

    /// The last computed result. `None` until a set has settled once.
    pub fn filtered(&self) -> Option<&[T]> {
        self.memo.as_ref().map(|m| m.filtered.as_slice())
    }

    /// `(shown, total)` for a "showing X of Y" label.
    pub fn shown_of_total(&self) -> Option<(usize, usize)> {
        self.memo.as_ref().map(|m| (m.filtered.len(), m.total))
    }
}

/// A cargo view: filtered items plus their summary.
#[derive(Debug, Default)]
pub struct CargoView {
    view: RecordView<CargoItem>,
    summary: Option<CargoSummary>,
}

impl CargoView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        self.view.term()
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.view.set_term(term);
    }

    /// Same contract as [`RecordView::refresh`]; the summary is recomputed
    /// together with the filtered items.
    pub fn refresh(&mut self, set: &RecordSet<CargoItem>) -> bool {
        let recomputed = self.view.refresh(set);
        if recomputed {
            self.summary = self.view.filtered().map(CargoSummary::compute);
        }
        recomputed
    }

    pub fn filtered(&self) -> Option<&[CargoItem]> {
        self.view.filtered()
    }

    pub fn summary(&self) -> Option<CargoSummary> {
        self.summary
    }

    pub fn shown_of_total(&self) -> Option<(usize, usize)> {
        self.view.shown_of_total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::{sample_cargo, sample_flights};
    use aerodesk_types::Flight;

    fn ready<T>(records: Vec<T>, revision: u64) -> RecordSet<T> {
        RecordSet {
            records,
            source_state: SourceState::ReadyRemote,
            advisory: None,
            revision,
        }
    }

    #[test]
    fn recomputes_only_when_inputs_change() {
        let set = ready(sample_flights(), 1);
        let mut view: RecordView<Flight> = RecordView::new();

        assert!(view.refresh(&set));
        assert!(!view.refresh(&set), "same revision and term");

        view.set_term("jfk");
        assert!(view.refresh(&set));
        assert_eq!(view.shown_of_total(), Some((2, 4)));

        let mut replaced = set.clone();
        replaced.records.truncate(1);
        replaced.revision = 2;
        assert!(view.refresh(&replaced));
        assert_eq!(view.shown_of_total(), Some((1, 1)));
    }

    #[test]
    fn loading_keeps_previous_result() {
        let mut view: RecordView<Flight> = RecordView::new();
        let loading = RecordSet::<Flight>::default();

        assert!(!view.refresh(&loading));
        assert!(view.filtered().is_none());

        let settled = ready(sample_flights(), 1);
        view.refresh(&settled);
        view.set_term("in_flight");

        let mut reloading = settled.clone();
        reloading.source_state = SourceState::Loading;
        assert!(!view.refresh(&reloading));
        assert_eq!(view.filtered().map(<[Flight]>::len), Some(4));
    }

    #[test]
    fn filtering_works_on_fallback_sets() {
        let mut set = ready(sample_cargo(), 3);
        set.source_state = SourceState::ReadyFallback;
        let mut view = CargoView::new();
        view.set_term("dangerous");

        assert!(view.refresh(&set));
        let summary = view.summary().unwrap();
        assert_eq!(summary.shipment_count, 1);
        assert_eq!(summary.hazardous_count, 1);
        assert_eq!(view.filtered().unwrap()[0].flight_number, "5Y800");
    }

    #[test]
    fn cargo_summary_tracks_term_changes() {
        let set = ready(sample_cargo(), 1);
        let mut view = CargoView::new();

        view.refresh(&set);
        assert_eq!(view.summary().unwrap().shipment_count, 2);

        view.set_term("zzz");
        view.refresh(&set);
        assert_eq!(view.summary(), Some(CargoSummary::default()));
        assert_eq!(view.shown_of_total(), Some((0, 2)));
        assert_eq!(view.term(), "zzz");
    }
}
