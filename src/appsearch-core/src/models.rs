use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Paging parameters for list endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    pub current: u32,
    pub size: u32,
}

impl Page {
    pub fn new(current: u32, size: u32) -> Self {
        Self { current, size }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            current: 1,
            size: 20,
        }
    }
}

/// Body sent to list endpoints: `{"page": {"current": .., "size": ..}}`
#[derive(Debug, Serialize)]
pub struct PageRequest {
    pub page: Page,
}

impl From<Option<Page>> for PageRequest {
    fn from(page: Option<Page>) -> Self {
        Self {
            page: page.unwrap_or_default(),
        }
    }
}

/// Per-document outcome of an index or update call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentWriteResult {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A successfully written document: the write result without its `errors` key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The server rejected a document during processing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RejectedDocument {
    pub id: Option<String>,
    pub message: String,
}

impl DocumentWriteResult {
    /// Convert into a receipt, failing with the first error message if the write failed
    pub fn into_receipt(self) -> Result<DocumentReceipt, RejectedDocument> {
        if let Some(message) = self.errors.into_iter().next() {
            return Err(RejectedDocument {
                id: self.id,
                message,
            });
        }

        Ok(DocumentReceipt {
            id: self.id,
            extra: self.extra,
        })
    }
}

/// Apply the write-result rule to a whole response list.
///
/// Fails on the first element carrying errors; otherwise every element is
/// returned with its `errors` key removed, in response order.
pub fn check_write_results(
    results: Vec<DocumentWriteResult>,
) -> Result<Vec<DocumentReceipt>, RejectedDocument> {
    results
        .into_iter()
        .map(DocumentWriteResult::into_receipt)
        .collect()
}

/// Synonym set as returned by the synonyms endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SynonymSet {
    pub id: String,
    pub synonyms: Vec<String>,
}

/// Body for creating or replacing a synonym set
#[derive(Debug, Serialize)]
pub struct SynonymSetRequest<'a, S> {
    pub synonyms: &'a [S],
}

/// Body for creating an engine
#[derive(Debug, Serialize)]
pub struct CreateEngineRequest<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<&'a str>,
}

/// Body for creating a meta engine over existing source engines
#[derive(Debug, Serialize)]
pub struct CreateMetaEngineRequest<'a, S> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub engine_type: &'static str,
    pub source_engines: &'a [S],
}

impl<'a, S> CreateMetaEngineRequest<'a, S> {
    pub fn new(name: &'a str, source_engines: &'a [S]) -> Self {
        Self {
            name,
            engine_type: "meta",
            source_engines,
        }
    }
}

/// Click-through event reported to the analytics endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Click {
    pub query: String,
    pub document_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Click {
    pub fn new(query: impl Into<String>, document_id: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            document_id: document_id.into(),
            ..Default::default()
        }
    }
}

/// Curation pinning (`promoted`) or removing (`hidden`) documents for a set of queries
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Curation {
    pub queries: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub promoted: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hidden: Vec<String>,
}
