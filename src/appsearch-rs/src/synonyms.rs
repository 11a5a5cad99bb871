use crate::{Client, Result};
use appsearch_core::{Page, PageRequest, SynonymSet, SynonymSetRequest};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

impl Client {
    /// GET /engines/{name}/synonyms
    #[tracing::instrument(skip(self))]
    pub async fn list_synonym_sets(&self, engine_name: &str, page: Option<Page>) -> Result<Value> {
        let path = format!("engines/{}/synonyms", engine_name);
        self.request_with_body(Method::GET, &path, &PageRequest::from(page))
            .await
    }

    /// GET /engines/{name}/synonyms/{id}
    #[tracing::instrument(skip(self))]
    pub async fn get_synonym_set(
        &self,
        engine_name: &str,
        synonym_set_id: &str,
    ) -> Result<SynonymSet> {
        let path = format!("engines/{}/synonyms/{}", engine_name, synonym_set_id);
        self.request(Method::GET, &path).await
    }

    /// POST /engines/{name}/synonyms
    #[tracing::instrument(skip(self, synonyms))]
    pub async fn create_synonym_set<S>(
        &self,
        engine_name: &str,
        synonyms: &[S],
    ) -> Result<SynonymSet>
    where
        S: Serialize,
    {
        let path = format!("engines/{}/synonyms", engine_name);
        self.request_with_body(Method::POST, &path, &SynonymSetRequest { synonyms })
            .await
    }

    /// Replace the terms of an existing synonym set
    /// PUT /engines/{name}/synonyms/{id}
    #[tracing::instrument(skip(self, synonyms))]
    pub async fn update_synonym_set<S>(
        &self,
        engine_name: &str,
        synonym_set_id: &str,
        synonyms: &[S],
    ) -> Result<SynonymSet>
    where
        S: Serialize,
    {
        let path = format!("engines/{}/synonyms/{}", engine_name, synonym_set_id);
        self.request_with_body(Method::PUT, &path, &SynonymSetRequest { synonyms })
            .await
    }

    /// DELETE /engines/{name}/synonyms/{id}
    #[tracing::instrument(skip(self))]
    pub async fn destroy_synonym_set(
        &self,
        engine_name: &str,
        synonym_set_id: &str,
    ) -> Result<Value> {
        let path = format!("engines/{}/synonyms/{}", engine_name, synonym_set_id);
        self.request(Method::DELETE, &path).await
    }
}
