use crate::{ClientError, Result};
use appsearch_core::ClientConfig;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

const CLIENT_NAME: &str = "appsearch-rs";
const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App Search REST API Client
///
/// Stateless apart from its credentials: every operation is a single HTTP
/// call. Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    host_identifier: String,
    client: HttpClient,
}

impl Client {
    /// Create a client for a hosted account
    pub fn new(host_identifier: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(host_identifier, api_key))
    }

    /// Create a client from a full configuration
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(
            |_| ClientError::InvalidCredentials("API key is not a valid header value".into()),
        )?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("x-swiftype-client", HeaderValue::from_static(CLIENT_NAME));
        headers.insert(
            "x-swiftype-client-version",
            HeaderValue::from_static(CLIENT_VERSION),
        );

        let client = HttpClient::builder()
            .default_headers(headers)
            .user_agent(format!("{}/{}", CLIENT_NAME, CLIENT_VERSION))
            .build()?;

        let base_url = config.base_url();
        tracing::debug!(base_url = %base_url, "App Search client created");

        Ok(Self {
            base_url,
            host_identifier: config.host_identifier,
            client,
        })
    }

    /// Root URL all endpoint paths are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn host_identifier(&self) -> &str {
        &self.host_identifier
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(method = %method, url = %url, "Sending request");
        self.client.request(method, url)
    }

    /// Issue a request without a body and decode the JSON response
    pub(crate) async fn request<T>(&self, method: Method, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(self.builder(method, path)).await?;
        decode(response).await
    }

    /// Issue a request with a JSON body and decode the JSON response
    pub(crate) async fn request_with_body<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send_with_body(method, path, body).await?;
        decode(response).await
    }

    /// Issue a request with a JSON body, checking only the status
    pub(crate) async fn send_with_body<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body)?;
        self.send(self.builder(method, path).body(payload)).await
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        error_for_status(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Map non-2xx responses onto typed errors carrying the response body
async fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let message = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), url = %url, "Request failed");

    Err(match status {
        StatusCode::UNAUTHORIZED => ClientError::InvalidCredentials(message),
        StatusCode::FORBIDDEN => ClientError::Forbidden(message),
        StatusCode::BAD_REQUEST => ClientError::BadRequest(message),
        StatusCode::NOT_FOUND => ClientError::NonExistentRecord(message),
        StatusCode::CONFLICT => ClientError::RecordAlreadyExists(message),
        _ => ClientError::Server {
            status: status.as_u16(),
            message,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_path() {
        let config = ClientConfig::new("", "api_key")
            .with_base_endpoint("localhost:3002/api/as/v1")
            .with_https(false);
        let client = Client::from_config(config).unwrap();
        assert_eq!(
            client.url("engines/some-engine-name/search"),
            "http://localhost:3002/api/as/v1/engines/some-engine-name/search"
        );
    }

    #[test]
    fn test_rejects_api_key_with_newline() {
        let result = Client::new("host", "bad\nkey");
        assert!(matches!(result, Err(ClientError::InvalidCredentials(_))));
    }

    #[test]
    fn test_keeps_host_identifier() {
        let client = Client::new("host_identifier", "api_key").unwrap();
        assert_eq!(client.host_identifier(), "host_identifier");
        assert_eq!(
            client.base_url(),
            "https://host_identifier.api.swiftype.com/api/as/v1"
        );
    }
}
