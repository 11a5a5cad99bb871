use crate::{Client, ClientError, Result};
use appsearch_core::{check_write_results, DocumentReceipt, DocumentWriteResult, Page, PageRequest};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

fn documents_path(engine_name: &str) -> String {
    format!("engines/{}/documents", engine_name)
}

impl Client {
    /// Index a single document, returning its receipt
    /// POST /engines/{name}/documents
    #[tracing::instrument(skip(self, document))]
    pub async fn index_document<D>(
        &self,
        engine_name: &str,
        document: &D,
    ) -> Result<DocumentReceipt>
    where
        D: Serialize,
    {
        self.index_documents(engine_name, std::slice::from_ref(document))
            .await?
            .into_iter()
            .next()
            .ok_or(ClientError::InvalidResponse)
    }

    /// Create or replace documents. Fails with `InvalidDocument` when any
    /// document was rejected.
    /// POST /engines/{name}/documents
    #[tracing::instrument(skip(self, documents), fields(count = documents.len()))]
    pub async fn index_documents<D>(
        &self,
        engine_name: &str,
        documents: &[D],
    ) -> Result<Vec<DocumentReceipt>>
    where
        D: Serialize,
    {
        self.write_documents(Method::POST, engine_name, documents)
            .await
    }

    /// Partially update existing documents
    /// PATCH /engines/{name}/documents
    #[tracing::instrument(skip(self, documents), fields(count = documents.len()))]
    pub async fn update_documents<D>(
        &self,
        engine_name: &str,
        documents: &[D],
    ) -> Result<Vec<DocumentReceipt>>
    where
        D: Serialize,
    {
        self.write_documents(Method::PATCH, engine_name, documents)
            .await
    }

    async fn write_documents<D>(
        &self,
        method: Method,
        engine_name: &str,
        documents: &[D],
    ) -> Result<Vec<DocumentReceipt>>
    where
        D: Serialize,
    {
        let results: Vec<DocumentWriteResult> = self
            .request_with_body(method, &documents_path(engine_name), documents)
            .await?;

        check_write_results(results).map_err(|rejected| {
            tracing::warn!(
                engine = %engine_name,
                id = ?rejected.id,
                error = %rejected.message,
                "Document rejected"
            );
            ClientError::from(rejected)
        })
    }

    /// Fetch documents by id. Unknown ids come back as `null` entries.
    /// GET /engines/{name}/documents
    #[tracing::instrument(skip(self, ids))]
    pub async fn get_documents<S>(&self, engine_name: &str, ids: &[S]) -> Result<Vec<Value>>
    where
        S: Serialize,
    {
        self.request_with_body(Method::GET, &documents_path(engine_name), ids)
            .await
    }

    /// List documents one page at a time
    /// GET /engines/{name}/documents/list
    #[tracing::instrument(skip(self))]
    pub async fn list_documents(&self, engine_name: &str, page: Option<Page>) -> Result<Value> {
        let path = format!("engines/{}/documents/list", engine_name);
        self.request_with_body(Method::GET, &path, &PageRequest::from(page))
            .await
    }

    /// Delete documents by id
    /// DELETE /engines/{name}/documents
    #[tracing::instrument(skip(self, ids))]
    pub async fn destroy_documents<S>(&self, engine_name: &str, ids: &[S]) -> Result<Vec<Value>>
    where
        S: Serialize,
    {
        self.request_with_body(Method::DELETE, &documents_path(engine_name), ids)
            .await
    }
}
