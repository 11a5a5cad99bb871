use crate::{Client, Result};
use appsearch_core::{CreateEngineRequest, CreateMetaEngineRequest, Page, PageRequest};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

impl Client {
    /// List engines
    /// GET /engines
    #[tracing::instrument(skip(self))]
    pub async fn list_engines(&self, page: Option<Page>) -> Result<Value> {
        self.request_with_body(Method::GET, "engines", &PageRequest::from(page))
            .await
    }

    /// Get an engine by name
    /// GET /engines/{name}
    #[tracing::instrument(skip(self))]
    pub async fn get_engine(&self, engine_name: &str) -> Result<Value> {
        self.request(Method::GET, &format!("engines/{}", engine_name))
            .await
    }

    /// Create an engine, optionally with a language for text analysis
    /// POST /engines
    #[tracing::instrument(skip(self))]
    pub async fn create_engine(&self, engine_name: &str, language: Option<&str>) -> Result<Value> {
        let req = CreateEngineRequest {
            name: engine_name,
            language,
        };
        self.request_with_body(Method::POST, "engines", &req).await
    }

    /// Delete an engine and all of its documents
    /// DELETE /engines/{name}
    #[tracing::instrument(skip(self))]
    pub async fn destroy_engine(&self, engine_name: &str) -> Result<Value> {
        self.request(Method::DELETE, &format!("engines/{}", engine_name))
            .await
    }

    /// Create a meta engine searching across existing engines
    /// POST /engines
    #[tracing::instrument(skip(self, source_engines))]
    pub async fn create_meta_engine<S>(
        &self,
        engine_name: &str,
        source_engines: &[S],
    ) -> Result<Value>
    where
        S: Serialize,
    {
        let req = CreateMetaEngineRequest::new(engine_name, source_engines);
        self.request_with_body(Method::POST, "engines", &req).await
    }

    /// POST /engines/{name}/source_engines
    #[tracing::instrument(skip(self, source_engines))]
    pub async fn add_meta_engine_sources<S>(
        &self,
        engine_name: &str,
        source_engines: &[S],
    ) -> Result<Value>
    where
        S: Serialize,
    {
        let path = format!("engines/{}/source_engines", engine_name);
        self.request_with_body(Method::POST, &path, source_engines)
            .await
    }

    /// DELETE /engines/{name}/source_engines
    #[tracing::instrument(skip(self, source_engines))]
    pub async fn delete_meta_engine_sources<S>(
        &self,
        engine_name: &str,
        source_engines: &[S],
    ) -> Result<Value>
    where
        S: Serialize,
    {
        let path = format!("engines/{}/source_engines", engine_name);
        self.request_with_body(Method::DELETE, &path, source_engines)
            .await
    }

    /// Get the field schema of an engine
    /// GET /engines/{name}/schema
    #[tracing::instrument(skip(self))]
    pub async fn get_schema(&self, engine_name: &str) -> Result<Value> {
        self.request(Method::GET, &format!("engines/{}/schema", engine_name))
            .await
    }

    /// Add or change schema fields; returns the full updated schema
    /// POST /engines/{name}/schema
    #[tracing::instrument(skip(self, schema))]
    pub async fn update_schema<S>(&self, engine_name: &str, schema: &S) -> Result<Value>
    where
        S: Serialize + ?Sized,
    {
        let path = format!("engines/{}/schema", engine_name);
        self.request_with_body(Method::POST, &path, schema).await
    }

    /// GET /engines/{name}/search_settings
    #[tracing::instrument(skip(self))]
    pub async fn get_search_settings(&self, engine_name: &str) -> Result<Value> {
        let path = format!("engines/{}/search_settings", engine_name);
        self.request(Method::GET, &path).await
    }

    /// Replace search settings (field weights, boosts, result fields)
    /// PUT /engines/{name}/search_settings
    #[tracing::instrument(skip(self, settings))]
    pub async fn update_search_settings<S>(&self, engine_name: &str, settings: &S) -> Result<Value>
    where
        S: Serialize + ?Sized,
    {
        let path = format!("engines/{}/search_settings", engine_name);
        self.request_with_body(Method::PUT, &path, settings).await
    }

    /// POST /engines/{name}/search_settings/reset
    #[tracing::instrument(skip(self))]
    pub async fn reset_search_settings(&self, engine_name: &str) -> Result<Value> {
        let path = format!("engines/{}/search_settings/reset", engine_name);
        self.request(Method::POST, &path).await
    }
}
