//! Assistant conversation sessions for AeroDesk.
//!
//! A [`ConversationSession`] owns the transcript of one assistant view: the
//! ordered list of user questions, assistant answers, and error notices. It
//! talks to the backend only through the [`QueryService`] trait, so the view
//! can be driven against the real HTTP client or an in-process stub.
//!
//! # Request lifecycle
//!
//! 1. [`ConversationSession::begin_query`] validates the question, appends
//!    the user turn right away, and marks the session busy.
//! 2. The caller sends the returned [`PendingQuery`] to the query service.
//! 3. [`ConversationSession::resolve`] appends the answer or an error turn
//!    and clears the busy flag.
//!
//! [`ConversationSession::submit_query`] runs all three steps in one call.
//!
//! A session accepts one outstanding query at a time. Calling
//! [`ConversationSession::reset`] while a query is in flight bumps the
//! session generation; the late response carries the old generation and is
//! dropped instead of landing in the cleared transcript.

mod error;
mod service;
mod session;

pub use error::Rejection;
pub use service::QueryService;
pub use session::{ConversationSession, PendingQuery, Resolution, QUERY_FAILED_MESSAGE};

#[cfg(test)]
mod tests;
