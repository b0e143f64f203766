//! Unit tests for the assistant conversation session.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use aerodesk_types::{
    BackendError, ConversationTurn, DocumentMetadata, QueryContext, QueryRequest, QueryResponse,
    SourceDocument, TurnKind,
};

use crate::{ConversationSession, QueryService, Rejection, Resolution, QUERY_FAILED_MESSAGE};

/// Query service that replays a fixed outcome and records what it was sent.
struct CannedService {
    outcome: Result<QueryResponse, BackendError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<QueryRequest>>,
}

impl CannedService {
    fn answering(answer: &str) -> Self {
        Self::with_outcome(Ok(QueryResponse {
            answer: answer.to_string(),
            source_documents: vec![SourceDocument {
                content: "Lithium ion batteries must be shipped at 30% state of charge.".into(),
                metadata: DocumentMetadata {
                    source: Some("IATA DGR".into()),
                    category: Some("cargo".into()),
                },
            }],
        }))
    }

    fn failing() -> Self {
        Self::with_outcome(Err(BackendError::Transport("connection refused".into())))
    }

    fn with_outcome(outcome: Result<QueryResponse, BackendError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl QueryService for CannedService {
    fn query(
        &self,
        request: QueryRequest,
    ) -> impl Future<Output = Result<QueryResponse, BackendError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);
        let outcome = self.outcome.clone();
        async move { outcome }
    }
}

fn kinds(session: &ConversationSession) -> Vec<TurnKind> {
    session.transcript().iter().map(ConversationTurn::kind).collect()
}

// ── submission ───────────────────────────────────────────────────────

#[tokio::test]
async fn successful_query_appends_user_then_assistant() {
    let service = CannedService::answering("Follow IATA packing instruction 965.");
    let mut session = ConversationSession::new();

    let resolution = session
        .submit_query(&service, "What are lithium battery rules?", QueryContext::Cargo)
        .await
        .expect("query should be accepted");

    assert_eq!(resolution, Resolution::Appended(TurnKind::Assistant));
    assert_eq!(kinds(&session), vec![TurnKind::User, TurnKind::Assistant]);
    assert!(!session.is_busy());
    assert_eq!(service.calls(), 1);

    let sent = service.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(sent.question, "What are lithium battery rules?");
    assert_eq!(sent.context_type, QueryContext::Cargo);

    let transcript = session.transcript();
    assert_eq!(transcript[0].context(), Some(QueryContext::Cargo));
    assert_eq!(transcript[1].text(), "Follow IATA packing instruction 965.");
    assert_eq!(transcript[1].citations().len(), 1);
    assert_eq!(transcript[1].citations()[0].origin_or_default(), "IATA DGR");
}

#[tokio::test]
async fn failed_query_keeps_user_turn_and_appends_error() {
    let service = CannedService::failing();
    let mut session = ConversationSession::new();
    session.set_draft("How should I handle a flight delay?");

    let resolution = session.submit_draft(&service).await.unwrap();

    assert_eq!(resolution, Resolution::Appended(TurnKind::Error));
    assert_eq!(kinds(&session), vec![TurnKind::User, TurnKind::Error]);
    assert_eq!(session.transcript()[1].text(), QUERY_FAILED_MESSAGE);
    assert!(!session.is_busy());
    assert_eq!(
        session.draft(),
        "How should I handle a flight delay?",
        "draft survives a failure so the operator can retry"
    );
}

#[tokio::test]
async fn successful_draft_submission_clears_draft_and_uses_pending_context() {
    let service = CannedService::answering("Check the maintenance manual.");
    let mut session = ConversationSession::new();
    session.set_pending_context(QueryContext::Maintenance);
    session.set_draft("Torque values for the APU mount?");

    session.submit_draft(&service).await.unwrap();

    assert_eq!(session.draft(), "");
    let sent = service.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(sent.context_type, QueryContext::Maintenance);
}

#[tokio::test]
async fn blank_input_is_rejected_before_any_request() {
    let service = CannedService::answering("unused");
    let mut session = ConversationSession::new();

    for text in ["", "   ", "\n\t"] {
        let result = session
            .submit_query(&service, text, QueryContext::General)
            .await;
        assert_eq!(result, Err(Rejection::EmptyInput));
    }

    assert!(session.transcript().is_empty());
    assert_eq!(service.calls(), 0);
}

// ── busy gate ────────────────────────────────────────────────────────

#[test]
fn second_query_while_busy_is_rejected() {
    let mut session = ConversationSession::new();
    let _pending = session
        .begin_query("first", QueryContext::General)
        .expect("first query accepted");
    assert!(session.is_busy());

    let second = session.begin_query("second", QueryContext::General);
    assert_eq!(second.unwrap_err(), Rejection::AlreadyBusy);
    assert_eq!(kinds(&session), vec![TurnKind::User]);
}

#[test]
fn busy_check_precedes_empty_check() {
    let mut session = ConversationSession::new();
    let _pending = session.begin_query("first", QueryContext::General).unwrap();
    assert_eq!(
        session.begin_query("  ", QueryContext::General).unwrap_err(),
        Rejection::AlreadyBusy
    );
}

#[test]
fn user_turn_is_visible_before_response_arrives() {
    let mut session = ConversationSession::new();
    let pending = session
        .begin_query("Boeing 777 loading procedure?", QueryContext::General)
        .unwrap();

    assert_eq!(session.transcript().len(), 1);
    assert_eq!(pending.request().question, "Boeing 777 loading procedure?");
    assert_eq!(pending.generation(), session.generation());
}

// ── reset and stale responses ────────────────────────────────────────

#[test]
fn response_after_reset_is_discarded() {
    let mut session = ConversationSession::new();
    let pending = session.begin_query("in flight", QueryContext::General).unwrap();

    session.reset();
    assert!(session.transcript().is_empty());
    assert!(!session.is_busy());

    let resolution = session.resolve(
        pending,
        Ok(QueryResponse {
            answer: "late answer".into(),
            source_documents: Vec::new(),
        }),
    );

    assert_eq!(resolution, Resolution::Discarded);
    assert!(session.transcript().is_empty());
    assert!(!session.is_busy());
}

#[test]
fn failure_after_reset_is_discarded() {
    let mut session = ConversationSession::new();
    let pending = session.begin_query("in flight", QueryContext::General).unwrap();
    session.reset();

    let resolution = session.resolve(pending, Err(BackendError::Malformed("not json".into())));
    assert_eq!(resolution, Resolution::Discarded);
    assert!(session.transcript().is_empty());
}

#[test]
fn stale_response_does_not_complete_newer_query() {
    let mut session = ConversationSession::new();
    let stale = session.begin_query("old", QueryContext::General).unwrap();
    session.reset();
    let fresh = session.begin_query("new", QueryContext::Cargo).unwrap();

    let ok = |answer: &str| -> Result<QueryResponse, BackendError> {
        Ok(QueryResponse {
            answer: answer.into(),
            source_documents: Vec::new(),
        })
    };

    assert_eq!(session.resolve(stale, ok("old answer")), Resolution::Discarded);
    assert!(session.is_busy(), "newer query is still outstanding");

    assert_eq!(
        session.resolve(fresh, ok("new answer")),
        Resolution::Appended(TurnKind::Assistant)
    );
    assert_eq!(kinds(&session), vec![TurnKind::User, TurnKind::Assistant]);
    assert_eq!(session.transcript()[0].text(), "new");
    assert_eq!(session.transcript()[1].text(), "new answer");
}

#[tokio::test]
async fn transcript_accumulates_in_chronological_order() {
    let ok = CannedService::answering("answer");
    let bad = CannedService::failing();
    let mut session = ConversationSession::new();

    session.submit_query(&ok, "one", QueryContext::General).await.unwrap();
    session.submit_query(&bad, "two", QueryContext::Cargo).await.unwrap();
    session.submit_query(&ok, "three", QueryContext::Regulations).await.unwrap();

    assert_eq!(
        kinds(&session),
        vec![
            TurnKind::User,
            TurnKind::Assistant,
            TurnKind::User,
            TurnKind::Error,
            TurnKind::User,
            TurnKind::Assistant,
        ]
    );
    let questions: Vec<&str> = session
        .transcript()
        .iter()
        .filter(|t| t.kind() == TurnKind::User)
        .map(ConversationTurn::text)
        .collect();
    assert_eq!(questions, vec!["one", "two", "three"]);
}
