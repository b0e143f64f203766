//! The transcript state machine.

use aerodesk_types::{
    BackendError, ConversationTurn, QueryContext, QueryRequest, QueryResponse, SourceReference,
    TurnKind,
};
use tracing::{debug, info, warn};

use crate::error::Rejection;
use crate::service::QueryService;

/// Text of the error turn appended when a query fails for any reason.
pub const QUERY_FAILED_MESSAGE: &str = "Failed to get response. Please try again.";

/// An accepted question waiting for its response.
///
/// Carries the session generation it was submitted under so a response that
/// arrives after [`ConversationSession::reset`] can be recognised as stale.
#[derive(Debug)]
#[must_use = "a pending query must be resolved or the session stays busy"]
pub struct PendingQuery {
    generation: u64,
    request: QueryRequest,
}

impl PendingQuery {
    pub fn request(&self) -> &QueryRequest {
        &self.request
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What [`ConversationSession::resolve`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A turn of this kind was appended.
    Appended(TurnKind),
    /// The outcome belonged to a generation that has since been reset.
    Discarded,
}

/// Transcript and input state for one active assistant view.
#[derive(Debug, Default)]
pub struct ConversationSession {
    transcript: Vec<ConversationTurn>,
    pending_context: QueryContext,
    draft: String,
    busy: bool,
    generation: u64,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[ConversationTurn] {
        &self.transcript
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending_context(&self) -> QueryContext {
        self.pending_context
    }

    /// Chooses the context attached to the next submitted draft.
    pub fn set_pending_context(&mut self, context: QueryContext) {
        self.pending_context = context;
    }

    /// The unsent question in the input buffer.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Accepts a question and appends its user turn.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::AlreadyBusy`] while another query is outstanding
    /// and [`Rejection::EmptyInput`] when `text` is blank. Neither appends
    /// anything.
    pub fn begin_query(
        &mut self,
        text: &str,
        context: QueryContext,
    ) -> Result<PendingQuery, Rejection> {
        if self.busy {
            return Err(Rejection::AlreadyBusy);
        }
        if text.trim().is_empty() {
            return Err(Rejection::EmptyInput);
        }

        self.transcript.push(ConversationTurn::User {
            text: text.to_string(),
            context,
        });
        self.busy = true;

        info!(
            context = %context,
            generation = self.generation,
            turns = self.transcript.len(),
            "assistant query submitted"
        );

        Ok(PendingQuery {
            generation: self.generation,
            request: QueryRequest {
                question: text.to_string(),
                context_type: context,
            },
        })
    }

    /// Records the outcome of a query started with [`begin_query`](Self::begin_query).
    ///
    /// Stale outcomes are dropped without touching the session.
    pub fn resolve(
        &mut self,
        pending: PendingQuery,
        outcome: Result<QueryResponse, BackendError>,
    ) -> Resolution {
        if pending.generation != self.generation {
            debug!(
                stale = pending.generation,
                current = self.generation,
                "discarding response from a reset session"
            );
            return Resolution::Discarded;
        }

        self.busy = false;
        match outcome {
            Ok(response) => {
                let citations: Vec<SourceReference> = response
                    .source_documents
                    .into_iter()
                    .map(SourceReference::from)
                    .collect();
                info!(citations = citations.len(), "assistant answered");
                self.transcript.push(ConversationTurn::Assistant {
                    text: response.answer,
                    citations,
                });
                self.draft.clear();
                Resolution::Appended(TurnKind::Assistant)
            }
            Err(e) => {
                warn!(error = %e, "assistant query failed");
                self.transcript.push(ConversationTurn::Error {
                    text: QUERY_FAILED_MESSAGE.to_string(),
                });
                Resolution::Appended(TurnKind::Error)
            }
        }
    }

    /// Submits a question and waits for its answer.
    ///
    /// # Errors
    ///
    /// Same as [`begin_query`](Self::begin_query). Backend failures are not
    /// errors here; they end up as an error turn in the transcript.
    pub async fn submit_query<S: QueryService>(
        &mut self,
        service: &S,
        text: &str,
        context: QueryContext,
    ) -> Result<Resolution, Rejection> {
        let pending = self.begin_query(text, context)?;
        let outcome = service.query(pending.request.clone()).await;
        Ok(self.resolve(pending, outcome))
    }

    /// Submits the input buffer under the pending context.
    ///
    /// # Errors
    ///
    /// Same as [`begin_query`](Self::begin_query).
    pub async fn submit_draft<S: QueryService>(
        &mut self,
        service: &S,
    ) -> Result<Resolution, Rejection> {
        let text = self.draft.clone();
        let context = self.pending_context;
        self.submit_query(service, &text, context).await
    }

    /// Empties the transcript and forgets any in-flight query.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.busy = false;
        self.generation += 1;
        debug!(generation = self.generation, "assistant session reset");
    }
}
