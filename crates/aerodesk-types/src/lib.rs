//! Shared types, error definitions, and wire payloads for AeroDesk.
//!
//! This crate provides the foundational types used across all AeroDesk
//! crates: the flight and cargo record shapes returned by the backend, the
//! conversation turn model used by the assistant transcript, and the
//! request/response payloads of the AI query endpoint.
//!
//! No crate in the workspace depends on anything *except* `aerodesk-types`
//! for cross-cutting type definitions. This keeps the dependency graph clean
//! and prevents circular dependencies.

use serde::{Deserialize, Serialize};

mod cargo;
mod conversation;
mod flight;
mod wire;

pub use cargo::{CargoItem, CargoManifest, ManifestLine, SpecialHandling};
pub use conversation::{
    ConversationTurn, DocumentMetadata, QueryRequest, QueryResponse, SourceDocument,
    SourceReference, TurnKind,
};
pub use flight::{Flight, FlightStatus};

/// The domain context attached to an assistant query.
///
/// The backend uses the context to narrow document retrieval. It is sent as
/// the `context_type` field of a query and shown as a badge on user turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryContext {
    /// No particular domain.
    #[default]
    General,
    /// Cargo handling and shipping regulations.
    Cargo,
    /// Aircraft maintenance procedures.
    Maintenance,
    /// Aviation regulations.
    Regulations,
}

impl QueryContext {
    /// Every context, in the order an operator picks from.
    pub const ALL: [QueryContext; 4] = [
        Self::General,
        Self::Cargo,
        Self::Maintenance,
        Self::Regulations,
    ];

    /// Returns the wire label for this context.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Cargo => "cargo",
            Self::Maintenance => "maintenance",
            Self::Regulations => "regulations",
        }
    }
}

impl std::fmt::Display for QueryContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QueryContext {
    type Err = ParseQueryContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Self::General),
            "cargo" => Ok(Self::Cargo),
            "maintenance" => Ok(Self::Maintenance),
            "regulations" => Ok(Self::Regulations),
            _ => Err(ParseQueryContextError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown query context label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown query context: {0}")]
pub struct ParseQueryContextError(pub String);

/// Failure talking to a backend collaborator.
///
/// Record fetching folds both variants into the same fallback path; the
/// assistant transcript folds both into a single error turn. The split only
/// exists so logs can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// Network unreachable, timeout, or a non-success status.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body did not match the expected contract.
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Response of the backend root health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub message: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_context_round_trip() {
        for ctx in QueryContext::ALL {
            assert_eq!(ctx.as_str().parse::<QueryContext>(), Ok(ctx));
        }
    }

    #[test]
    fn query_context_invalid() {
        assert!("Cargo".parse::<QueryContext>().is_err());
        assert!("".parse::<QueryContext>().is_err());
        assert!("ops".parse::<QueryContext>().is_err());
    }

    #[test]
    fn query_context_serializes_lowercase() {
        let json = serde_json::to_string(&QueryContext::Maintenance).unwrap();
        assert_eq!(json, "\"maintenance\"");
        assert_eq!(QueryContext::default(), QueryContext::General);
    }

    #[test]
    fn backend_error_messages() {
        assert_eq!(
            BackendError::Transport("status 500".into()).to_string(),
            "transport failure: status 500"
        );
        assert_eq!(
            BackendError::Malformed("missing field".into()).to_string(),
            "malformed payload: missing field"
        );
    }
}
