use crate::{Client, Result};
use appsearch_core::search::{multi_search_body, search_body};
use appsearch_core::{Click, MultiSearchQuery, SearchOptions};
use reqwest::Method;
use serde_json::Value;

impl Client {
    /// Run a search query against an engine
    /// GET /engines/{name}/search
    #[tracing::instrument(skip(self, options))]
    pub async fn search(
        &self,
        engine_name: &str,
        query: &str,
        options: SearchOptions,
    ) -> Result<Value> {
        let path = format!("engines/{}/search", engine_name);
        self.request_with_body(Method::GET, &path, &search_body(query, options))
            .await
    }

    /// Run several queries in one round trip; results come back in query order
    /// GET /engines/{name}/multi_search
    #[tracing::instrument(skip(self, queries), fields(count = queries.len()))]
    pub async fn multi_search(
        &self,
        engine_name: &str,
        queries: &[MultiSearchQuery],
    ) -> Result<Value> {
        let path = format!("engines/{}/multi_search", engine_name);
        self.request_with_body(Method::GET, &path, &multi_search_body(queries))
            .await
    }

    /// Autocomplete suggestions for a partial query
    /// GET /engines/{name}/query_suggestion
    #[tracing::instrument(skip(self, options))]
    pub async fn query_suggestion(
        &self,
        engine_name: &str,
        query: &str,
        options: SearchOptions,
    ) -> Result<Value> {
        let path = format!("engines/{}/query_suggestion", engine_name);
        self.request_with_body(Method::GET, &path, &search_body(query, options))
            .await
    }

    /// Record a click-through on a search result. The response body is ignored.
    /// POST /engines/{name}/click
    #[tracing::instrument(skip(self))]
    pub async fn click(&self, engine_name: &str, click: &Click) -> Result<()> {
        let path = format!("engines/{}/click", engine_name);
        self.send_with_body(Method::POST, &path, click).await?;
        Ok(())
    }
}
