//! Available-animals listing controller
//!
//! Owns the page state (`filter`, `loading`, the filter dialog) and writes the
//! shared animals context. Every filter change starts exactly one fetch:
//!
//! ```text
//!  mount ──► refresh(gen=1) ──spawn──► AnimalsApi::fetch_available
//!                 ▲                               │
//!  apply filter ──┤                               ▼
//!  clear filters ─┘                 FetchOutcome { generation, result }
//!                                                 │ (mpsc)
//!                                                 ▼
//!                                  apply_outcome: gen == current ? commit : drop
//! ```
//!
//! Only the most recently started request may touch `availableAnimals` or
//! `loading`. A superseded request is aborted, and if its outcome was already
//! queued the generation check drops it. Dropping the controller aborts the
//! in-flight task; a late send into the closed channel is ignored.

pub mod dialog;
mod view;


pub use dialog::{DialogAction, FilterDialog};
pub use view::{FilterAffordances, ListingState, ListingView};

use crate::animals::{duplicate_ids, AnimalFilter, SharedAnimals};
use crate::api::{AnimalsApi, ApiResponse, FetchError};
use crate::diagnostics::DiagnosticSink;
use crate::session::TokenSource;
use std::sync::{Arc, PoisonError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Message reported to the diagnostic sink when a fetch fails
pub const FETCH_FAILED: &str = "Falha ao buscar animais";

/// Completion of one listing request, tagged with the generation that started it
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<ApiResponse, FetchError>,
}

pub type OutcomeSender = mpsc::UnboundedSender<FetchOutcome>;
pub type OutcomeReceiver = mpsc::UnboundedReceiver<FetchOutcome>;

/// Collaborators the controller is built from
pub struct PageDeps {
    pub api: Arc<dyn AnimalsApi>,
    pub tokens: Arc<dyn TokenSource>,
    pub sink: Arc<dyn DiagnosticSink>,
    pub animals: SharedAnimals,
}

/// Controller for the "Animais disponíveis para adoção" page
pub struct AvailableAnimalsPage {
    api: Arc<dyn AnimalsApi>,
    tokens: Arc<dyn TokenSource>,
    sink: Arc<dyn DiagnosticSink>,
    animals: SharedAnimals,

    filter: Option<AnimalFilter>,
    loading: bool,
    /// Bumped on every refresh; outcomes carrying an older value are stale
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    outcome_tx: OutcomeSender,

    /// Last failure of the current generation, cleared by a successful load
    last_error: Option<FetchError>,

    /// Filter dialog; owns its own open/closed state
    pub dialog: FilterDialog,
}

impl AvailableAnimalsPage {
    /// Build the controller. Nothing is fetched until [`Self::mount`].
    pub fn new(deps: PageDeps, outcome_tx: OutcomeSender) -> Self {
        Self {
            api: deps.api,
            tokens: deps.tokens,
            sink: deps.sink,
            animals: deps.animals,
            filter: None,
            loading: true,
            generation: 0,
            in_flight: None,
            outcome_tx,
            last_error: None,
            dialog: FilterDialog::new(),
        }
    }

    /// First load, unfiltered
    pub fn mount(&mut self) -> u64 {
        tracing::debug!("Mounting available animals page");
        self.refresh()
    }

    /// Start a fetch for the current filter, superseding any request in flight.
    /// Returns the generation of the new request.
    pub fn refresh(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;

        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        let token = self.tokens.token().unwrap_or_default();
        let api = Arc::clone(&self.api);
        let tx = self.outcome_tx.clone();
        let filter = self.filter.clone();
        let generation = self.generation;

        tracing::debug!(
            generation,
            api = api.name(),
            filter = ?filter,
            has_token = !token.is_empty(),
            "Fetching available animals"
        );

        self.in_flight = Some(tokio::spawn(async move {
            let result = api.fetch_available(filter, token).await;
            // A closed channel means the page is gone; nothing to update
            let _ = tx.send(FetchOutcome { generation, result });
        }));

        generation
    }

    /// Replace the filter with `data` and reload
    pub fn handle_filter_available_animals(&mut self, data: AnimalFilter) {
        tracing::info!("Applying filter: {}", data.describe());
        self.filter = Some(data);
        self.refresh();
    }

    /// Drop the filter and reload the unfiltered list
    pub fn handle_remove_filters(&mut self) {
        tracing::info!("Clearing filters");
        self.filter = None;
        self.refresh();
    }

    /// Commit a finished request if it belongs to the current generation.
    /// Returns `true` when the outcome was applied.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.generation != self.generation {
            tracing::trace!(
                stale = outcome.generation,
                current = self.generation,
                "Discarding superseded listing response"
            );
            return false;
        }

        match outcome.result.and_then(ApiResponse::into_animals) {
            Ok(animals) => {
                {
                    let dupes = duplicate_ids(&animals);
                    if !dupes.is_empty() {
                        tracing::warn!(?dupes, "Listing contains duplicate animal ids");
                    }
                }
                tracing::debug!(count = animals.len(), "Loaded available animals");
                self.animals
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .set_available(animals);
                self.last_error = None;
            }
            Err(e) => {
                self.sink.report(FETCH_FAILED, &e);
                self.last_error = Some(e);
            }
        }

        self.loading = false;
        self.in_flight = None;
        true
    }

    /// Snapshot of everything the views derive from
    pub fn state(&self) -> ListingState {
        let animals = self
            .animals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .available()
            .to_vec();

        ListingState {
            loading: self.loading,
            animals,
            filter: self.filter.clone(),
        }
    }

    /// Name of the fetch client, for the title bar
    pub fn source(&self) -> &'static str {
        self.api.name()
    }

    pub fn filter(&self) -> Option<&AnimalFilter> {
        self.filter.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }
}

impl Drop for AvailableAnimalsPage {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
