//! Assistant transcript turns and the AI query wire format.

use serde::{Deserialize, Serialize};

use crate::QueryContext;

/// Number of excerpt characters shown before a citation is truncated.
const PREVIEW_CHARS: usize = 150;

/// A document the assistant cited in its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReference {
    /// The retrieved passage.
    pub excerpt: String,
    /// Where the passage came from, if the backend said.
    pub origin_label: Option<String>,
    /// Document category, if the backend said.
    pub category: Option<String>,
}

impl SourceReference {
    /// The excerpt cut to a short preview, with `...` appended when cut.
    pub fn preview(&self) -> String {
        let mut chars = self.excerpt.chars();
        let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }

    pub fn origin_or_default(&self) -> &str {
        self.origin_label.as_deref().unwrap_or("Unknown source")
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or("General")
    }
}

impl From<SourceDocument> for SourceReference {
    fn from(doc: SourceDocument) -> Self {
        Self {
            excerpt: doc.content,
            origin_label: doc.metadata.source,
            category: doc.metadata.category,
        }
    }
}

/// Discriminant of a [`ConversationTurn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnKind {
    User,
    Assistant,
    Error,
}

/// One entry in an assistant transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversationTurn {
    /// A question the operator asked.
    User { text: String, context: QueryContext },
    /// The assistant's answer with the documents it drew on.
    Assistant {
        text: String,
        citations: Vec<SourceReference>,
    },
    /// A request that failed; `text` is shown to the operator.
    Error { text: String },
}

impl ConversationTurn {
    pub fn kind(&self) -> TurnKind {
        match self {
            Self::User { .. } => TurnKind::User,
            Self::Assistant { .. } => TurnKind::Assistant,
            Self::Error { .. } => TurnKind::Error,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::User { text, .. } | Self::Assistant { text, .. } | Self::Error { text } => text,
        }
    }

    /// The context badge. Only user turns carry one.
    pub fn context(&self) -> Option<QueryContext> {
        match self {
            Self::User { context, .. } => Some(*context),
            _ => None,
        }
    }

    /// Cited documents. Empty for anything but assistant turns.
    pub fn citations(&self) -> &[SourceReference] {
        match self {
            Self::Assistant { citations, .. } => citations,
            _ => &[],
        }
    }
}

/// Body of `POST /query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    pub context_type: QueryContext,
}

/// Body returned by `POST /query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default)]
    pub source_documents: Vec<SourceDocument>,
}

/// A retrieved document as sent by the query service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub content: String,
    #[serde(default)]
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}
