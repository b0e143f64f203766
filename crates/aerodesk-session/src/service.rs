use std::future::Future;

use aerodesk_types::{BackendError, QueryRequest, QueryResponse};

/// The AI query endpoint as seen by a session.
pub trait QueryService {
    /// Sends one question and waits for the answer.
    fn query(
        &self,
        request: QueryRequest,
    ) -> impl Future<Output = Result<QueryResponse, BackendError>> + Send;
}
