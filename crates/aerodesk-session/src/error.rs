//! Reasons a query submission is refused.

/// Why [`ConversationSession::begin_query`](crate::ConversationSession::begin_query)
/// refused a question. Nothing is appended and no request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The question was empty or whitespace only.
    #[error("query text is empty")]
    EmptyInput,

    /// Another query is still waiting for its response.
    #[error("a query is already in flight")]
    AlreadyBusy,
}
