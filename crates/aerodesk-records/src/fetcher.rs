//! Fetch-with-fallback for backend record collections.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use aerodesk_types::BackendError;
use futures_util::future::{BoxFuture, FutureExt, Shared};
use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::kind::RecordKind;

/// Where the records currently on display came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceState {
    /// A load is in flight. Whatever was shown before stays visible.
    Loading,
    /// The backend answered with a well-formed payload.
    ReadyRemote,
    /// The backend failed; the sample dataset is shown.
    ReadyFallback,
}

impl SourceState {
    pub fn is_ready(self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// A collection as currently held by a view.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet<T> {
    pub records: Vec<T>,
    pub source_state: SourceState,
    /// Operator-facing note: the fallback notice or a server caveat.
    pub advisory: Option<String>,
    /// Bumped every time `records` is replaced.
    pub revision: u64,
}

impl<T> Default for RecordSet<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            source_state: SourceState::Loading,
            advisory: None,
            revision: 0,
        }
    }
}

/// A successful backend payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedRecords<T> {
    pub records: Vec<T>,
    /// Server-supplied caveat, shown verbatim.
    pub note: Option<String>,
}

impl<T: RecordKind> FetchedRecords<T> {
    /// Decodes a collection payload such as `{"cargo": [...], "note": "..."}`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Malformed`] when the collection field is
    /// missing or is not an array. Elements that do not decode are skipped
    /// with a warning; they never fail the whole set.
    pub fn from_payload(mut payload: Value) -> Result<Self, BackendError> {
        let elements = match payload.get_mut(T::COLLECTION).map(Value::take) {
            Some(Value::Array(elements)) => elements,
            Some(_) => {
                return Err(BackendError::Malformed(format!(
                    "`{}` is not an array",
                    T::COLLECTION
                )))
            }
            None => {
                return Err(BackendError::Malformed(format!(
                    "missing `{}` field",
                    T::COLLECTION
                )))
            }
        };

        let records: Vec<T> = elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| match serde_json::from_value(element) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(
                        collection = T::COLLECTION,
                        index,
                        error = %e,
                        "skipping undecodable {} record",
                        T::LABEL
                    );
                    None
                }
            })
            .collect();
        let note = payload
            .get("note")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self { records, note })
    }
}

/// Backend endpoint serving one record collection.
pub trait RecordSource<T>: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<FetchedRecords<T>, BackendError>> + Send;
}

/// How a load settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOutcome {
    pub source_state: SourceState,
    pub record_count: usize,
    pub revision: u64,
}

/// Advisory attached to a set that fell back to sample data.
pub fn fallback_advisory(label: &str) -> String {
    format!("Failed to load {label} data from server; showing sample data")
}

type InFlight = Shared<BoxFuture<'static, LoadOutcome>>;

/// The load currently running, if any.
///
/// Kept apart from [`Core`]: the running future owns a `Core` and only a weak
/// handle back to this slot, so a load abandoned by every caller is freed
/// together with the fetcher.
type InFlightSlot = Mutex<Option<InFlight>>;

struct Core<T, S> {
    source: S,
    fallback: Vec<T>,
    state: watch::Sender<RecordSet<T>>,
}

/// Loads one record collection and falls back to sample data on failure.
///
/// Clones share the same state, so a view and its background refresher can
/// hold the same fetcher. Only one load runs at a time; callers that ask for
/// a load while one is in flight wait for that load instead of issuing
/// another request.
pub struct RecordFetcher<T, S> {
    core: Arc<Core<T, S>>,
    in_flight: Arc<InFlightSlot>,
}

impl<T, S> Clone for RecordFetcher<T, S> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

impl<T: RecordKind, S: RecordSource<T>> RecordFetcher<T, S> {
    /// Creates a fetcher that falls back to `fallback` when `source` fails.
    pub fn new(source: S, fallback: Vec<T>) -> Self {
        let (state, _) = watch::channel(RecordSet::default());
        Self {
            core: Arc::new(Core {
                source,
                fallback,
                state,
            }),
            in_flight: Arc::new(Mutex::new(None)),
        }
    }

    /// Creates a fetcher using the record type's built-in sample dataset.
    pub fn with_default_fallback(source: S) -> Self {
        Self::new(source, T::fallback_dataset())
    }

    /// Loads the collection, or joins the load already in flight.
    pub async fn load(&self) -> LoadOutcome {
        let shared = {
            let mut slot = self
                .in_flight
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            match slot.as_ref() {
                Some(running) => {
                    debug!(collection = T::COLLECTION, "joining in-flight load");
                    running.clone()
                }
                None => {
                    self.core
                        .state
                        .send_modify(|set| set.source_state = SourceState::Loading);
                    let core = Arc::clone(&self.core);
                    let slot_handle = Arc::downgrade(&self.in_flight);
                    let running = async move { core.run_load(slot_handle).await }
                        .boxed()
                        .shared();
                    *slot = Some(running.clone());
                    running
                }
            }
        };
        shared.await
    }

    /// Reloads the collection. The current records stay visible until the
    /// new outcome is known.
    pub async fn refresh(&self) -> LoadOutcome {
        self.load().await
    }

    /// A copy of the current record set.
    pub fn snapshot(&self) -> RecordSet<T> {
        self.core.state.borrow().clone()
    }

    pub fn source_state(&self) -> SourceState {
        self.core.state.borrow().source_state
    }

    pub fn advisory(&self) -> Option<String> {
        self.core.state.borrow().advisory.clone()
    }

    /// Receives every change to the record set.
    pub fn subscribe(&self) -> watch::Receiver<RecordSet<T>> {
        self.core.state.subscribe()
    }
}

impl<T: RecordKind, S: RecordSource<T>> Core<T, S> {
    async fn run_load(&self, slot: Weak<InFlightSlot>) -> LoadOutcome {
        debug!(collection = T::COLLECTION, "loading records");
        let fetched = self.source.fetch().await;

        self.state.send_modify(|set| {
            match fetched {
                Ok(FetchedRecords { records, note }) => {
                    info!(
                        collection = T::COLLECTION,
                        count = records.len(),
                        note = note.as_deref().unwrap_or(""),
                        "records loaded"
                    );
                    set.records = records;
                    set.source_state = SourceState::ReadyRemote;
                    set.advisory = note;
                }
                Err(e) => {
                    warn!(
                        collection = T::COLLECTION,
                        error = %e,
                        fallback_count = self.fallback.len(),
                        "record load failed, using sample data"
                    );
                    set.records = self.fallback.clone();
                    set.source_state = SourceState::ReadyFallback;
                    set.advisory = Some(fallback_advisory(T::LABEL));
                }
            }
            set.revision += 1;
        });

        let outcome = {
            let set = self.state.borrow();
            LoadOutcome {
                source_state: set.source_state,
                record_count: set.records.len(),
                revision: set.revision,
            }
        };

        if let Some(slot) = slot.upgrade() {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        }

        outcome
    }
}
