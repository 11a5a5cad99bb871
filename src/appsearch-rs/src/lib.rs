//! App Search Client Library
//!
//! Async HTTP client for App Search REST API deployments: engines, schemas,
//! documents, synonym sets, curations, search settings, search and click
//! analytics.
//!
//! ```rust,no_run
//! use appsearch_rs::{Client, SearchOptions};
//!
//! # async fn run() -> appsearch_rs::Result<()> {
//! let client = Client::new("host-2376rb", "private-xxxxxxxxxxxxxxxxxxxxxxxx")?;
//! client
//!     .index_document("national-parks", &serde_json::json!({"title": "Yosemite"}))
//!     .await?;
//! let results = client
//!     .search("national-parks", "yosemite", SearchOptions::new())
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod curations;
mod documents;
mod engines;
mod search;
mod synonyms;

pub use appsearch_core::{
    Click, ClientConfig, Curation, DocumentReceipt, MultiSearchQuery, Page, SearchOptions,
    SynonymSet, DEFAULT_BASE_ENDPOINT,
};
pub use client::Client;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Record does not exist: {0}")]
    NonExistentRecord(String),

    #[error("Record already exists: {0}")]
    RecordAlreadyExists(String),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    /// A document was rejected while being indexed or updated
    #[error("{message}")]
    InvalidDocument { id: Option<String>, message: String },

    #[error("Invalid response from server")]
    InvalidResponse,
}

impl From<appsearch_core::RejectedDocument> for ClientError {
    fn from(rejected: appsearch_core::RejectedDocument) -> Self {
        ClientError::InvalidDocument {
            id: rejected.id,
            message: rejected.message,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
