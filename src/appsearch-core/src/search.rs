use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form search options (filters, facets, page, result_fields, ...)
pub type SearchOptions = Map<String, Value>;

/// One query within a multi-search request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MultiSearchQuery {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<SearchOptions>,
}

impl MultiSearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Merge a query string into its options. The explicit query wins over any
/// `query` key already present in the options.
pub fn search_body(query: &str, options: SearchOptions) -> Value {
    let mut body = options;
    body.insert("query".to_string(), Value::String(query.to_string()));
    Value::Object(body)
}

/// Build `{"queries": [{"query": .., ...options}, ..]}` for the multi-search endpoint
pub fn multi_search_body(queries: &[MultiSearchQuery]) -> Value {
    let queries = queries
        .iter()
        .map(|search| search_body(&search.query, search.options.clone().unwrap_or_default()))
        .collect();

    let mut body = Map::new();
    body.insert("queries".to_string(), Value::Array(queries));
    Value::Object(body)
}
