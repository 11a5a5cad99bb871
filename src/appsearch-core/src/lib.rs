//! App Search Core Library
//!
//! Transport-free building blocks shared by the App Search client:
//! - Connection configuration
//! - Request and response payload models
//! - Paging defaults
//! - Search and multi-search body construction
//! - The per-document write result rule

pub mod config;
pub mod models;
pub mod search;

// Re-export commonly used types
pub use config::{ClientConfig, DEFAULT_BASE_ENDPOINT};
pub use models::*;
pub use search::{MultiSearchQuery, SearchOptions};
