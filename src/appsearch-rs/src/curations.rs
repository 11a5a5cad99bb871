use crate::{Client, Result};
use appsearch_core::{Curation, Page, PageRequest};
use reqwest::Method;
use serde_json::Value;

impl Client {
    /// GET /engines/{name}/curations
    #[tracing::instrument(skip(self))]
    pub async fn list_curations(&self, engine_name: &str, page: Option<Page>) -> Result<Value> {
        let path = format!("engines/{}/curations", engine_name);
        self.request_with_body(Method::GET, &path, &PageRequest::from(page))
            .await
    }

    /// GET /engines/{name}/curations/{id}
    #[tracing::instrument(skip(self))]
    pub async fn get_curation(&self, engine_name: &str, curation_id: &str) -> Result<Value> {
        let path = format!("engines/{}/curations/{}", engine_name, curation_id);
        self.request(Method::GET, &path).await
    }

    /// Create a curation; the response carries the new curation id
    /// POST /engines/{name}/curations
    #[tracing::instrument(skip(self))]
    pub async fn create_curation(&self, engine_name: &str, curation: &Curation) -> Result<Value> {
        let path = format!("engines/{}/curations", engine_name);
        self.request_with_body(Method::POST, &path, curation).await
    }

    /// PUT /engines/{name}/curations/{id}
    #[tracing::instrument(skip(self))]
    pub async fn update_curation(
        &self,
        engine_name: &str,
        curation_id: &str,
        curation: &Curation,
    ) -> Result<Value> {
        let path = format!("engines/{}/curations/{}", engine_name, curation_id);
        self.request_with_body(Method::PUT, &path, curation).await
    }

    /// DELETE /engines/{name}/curations/{id}
    #[tracing::instrument(skip(self))]
    pub async fn destroy_curation(&self, engine_name: &str, curation_id: &str) -> Result<Value> {
        let path = format!("engines/{}/curations/{}", engine_name, curation_id);
        self.request(Method::DELETE, &path).await
    }
}
