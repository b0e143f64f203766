//! HTTP client for the AeroDesk backend.
//!
//! [`BackendClient`] speaks the backend's JSON contract with `reqwest` and
//! plugs into the rest of the workspace through two traits:
//!
//! - [`aerodesk_session::QueryService`] for the assistant (`POST /query`)
//! - [`aerodesk_records::RecordSource`] for record collections, via
//!   [`HttpRecordSource`] (`GET /flights`, `GET /cargo`)
//!
//! It also exposes the ad hoc lookups the views use outside those
//! abstractions: the per-flight cargo manifest and the root health check.
//!
//! Every failure is reported as an [`aerodesk_types::BackendError`]:
//! `Transport` for connection problems, timeouts and non-2xx statuses,
//! `Malformed` for bodies that do not match the contract.

pub mod config;
pub mod error;
pub mod service;
pub mod source;

pub use config::{BackendConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
pub use error::ClientError;
pub use service::BackendClient;
pub use source::{FlightFilter, HttpRecordSource};
