use std::future::Future;

use aerodesk_session::QueryService;
use aerodesk_types::{BackendError, CargoManifest, HealthStatus, QueryRequest, QueryResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::BackendConfig;
use crate::error::ClientError;

fn transport(e: reqwest::Error) -> BackendError {
    BackendError::Transport(e.to_string())
}

fn decode(e: reqwest::Error) -> BackendError {
    if e.is_decode() {
        BackendError::Malformed(e.to_string())
    } else {
        transport(e)
    }
}

/// Shared handle to the backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// # Errors
    ///
    /// Fails if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let base_url = config.parsed_base_url()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base}/{segments...}`, percent-encoding each segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GETs a JSON document.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, BackendError> {
        let url = self.endpoint(segments);
        debug!(%url, "GET");
        self.http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .json::<T>()
            .await
            .map_err(decode)
    }

    /// Checks the backend root.
    pub async fn health(&self) -> Result<HealthStatus, BackendError> {
        self.get_json(&[], &[]).await
    }

    /// Cargo manifest for one flight.
    pub async fn cargo_for_flight(&self, flight_number: &str) -> Result<CargoManifest, BackendError> {
        self.get_json(&["cargo", flight_number], &[]).await
    }

    /// Raw JSON of a collection endpoint; decoded by the record source.
    pub(crate) async fn collection(
        &self,
        name: &str,
        query: &[(&str, String)],
    ) -> Result<Value, BackendError> {
        self.get_json(&[name], query).await
    }

    /// Sends one assistant query.
    pub async fn send_query(&self, request: &QueryRequest) -> Result<QueryResponse, BackendError> {
        let url = self.endpoint(&["query"]);
        debug!(%url, context = %request.context_type, "POST");
        self.http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .json::<QueryResponse>()
            .await
            .map_err(decode)
    }
}

impl QueryService for BackendClient {
    fn query(
        &self,
        request: QueryRequest,
    ) -> impl Future<Output = Result<QueryResponse, BackendError>> + Send {
        let client = self.clone();
        async move { client.send_query(&request).await }
    }
}
