use thiserror::Error;

/// Errors constructing a [`BackendClient`](crate::BackendClient).
///
/// Request failures are not reported here; they surface as
/// [`aerodesk_types::BackendError`].
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid backend base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
