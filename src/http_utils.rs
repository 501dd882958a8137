//! HTTP utilities for the tenantctl client.
//!
//! This module wraps `reqwest` with the settings every backend call shares:
//! a fixed timeout, the JSON content headers, and the API key header. Each
//! call is sent exactly once; failures are classified into [`ClientError`].

use crate::client::ClientError;
use crate::configuration::{Configuration, ConfigurationError};
use reqwest::{Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, error, trace};
use url::Url;

pub const HEADER_API_KEY: &str = "X-API-KEY";
pub const MEDIA_TYPE_JSON: &str = "application/json";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Configuration for HTTP requests with common settings
#[derive(Debug, Clone)]
pub struct HttpRequestConfig {
    /// Request timeout covering connect, send and reading the body
    pub timeout: Duration,
    /// Value of the User-Agent header
    pub user_agent: String,
}

impl Default for HttpRequestConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpRequestConfig {
    pub fn from_configuration(
        configuration: &Configuration,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            timeout: configuration.request_timeout()?,
            ..Self::default()
        })
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }
}

/// HTTP client wrapper that authenticates every request with an API key
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpRequestConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: HttpRequestConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|source| ClientError::Transport {
                context: "failed to initialize the HTTP client".to_string(),
                source,
            })?;

        Ok(Self { client, config })
    }

    /// Make a GET request and decode the JSON response
    pub async fn get<T>(&self, url: Url, api_key: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let (url, text) = self.execute(Method::GET, url, None, api_key).await?;
        decode(&url, &text)
    }

    /// Make a POST request with a JSON body and decode the JSON response
    pub async fn post<T, B>(&self, url: Url, body: &B, api_key: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body = encode(&url, body)?;
        let (url, text) = self.execute(Method::POST, url, Some(body), api_key).await?;
        decode(&url, &text)
    }

    /// Make a PUT request with a JSON body and decode the JSON response
    pub async fn put<T, B>(&self, url: Url, body: &B, api_key: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body = encode(&url, body)?;
        let (url, text) = self.execute(Method::PUT, url, Some(body), api_key).await?;
        decode(&url, &text)
    }

    /// Make a DELETE request; any response body is ignored
    pub async fn delete(&self, url: Url, api_key: &str) -> Result<(), ClientError> {
        self.execute(Method::DELETE, url, None, api_key).await?;
        Ok(())
    }

    /// Send one request and return the body of a successful response.
    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
        api_key: &str,
    ) -> Result<(Url, String), ClientError> {
        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(reqwest::header::CONTENT_TYPE, MEDIA_TYPE_JSON)
            .header(reqwest::header::ACCEPT, MEDIA_TYPE_JSON)
            .header(HEADER_API_KEY, api_key);

        if let Some(body) = body {
            request = request.body(body);
        }

        debug!(%method, %url, "sending HTTP request");
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, url.as_str(), self.config.timeout))?;

        let status = response.status();
        debug!(%method, %url, %status, "received HTTP response");

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::from_reqwest(e, url.as_str(), self.config.timeout))?;
        trace!("Raw response text: {}", text);

        if status.is_success() {
            Ok((url, text))
        } else {
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                debug!("Received authentication error ({}), check the API key", status);
            }
            Err(ClientError::Remote { status, body: text })
        }
    }
}

fn encode<B: Serialize>(url: &Url, body: &B) -> Result<Vec<u8>, ClientError> {
    serde_json::to_vec(body).map_err(|source| ClientError::Serialization {
        context: format!("failed to encode request body for {}", url),
        source,
    })
}

fn decode<T: DeserializeOwned>(url: &Url, text: &str) -> Result<T, ClientError> {
    serde_json::from_str::<T>(text).map_err(|source| {
        error!("Failed to deserialize response: {}. Raw response: {}", source, text);
        ClientError::Serialization {
            context: format!("failed to decode response from {}", url),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, PartialEq, Deserialize)]
    struct Echo {
        value: String,
    }

    fn client_with_timeout(millis: u64) -> HttpClient {
        HttpClient::new(HttpRequestConfig::with_timeout(Duration::from_millis(millis))).unwrap()
    }

    fn url(server: &MockServer, path: &str) -> Url {
        Url::parse(&format!("{}{}", server.uri(), path)).unwrap()
    }

    #[test]
    fn test_http_client_config_default() {
        let config = HttpRequestConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("tenantctl/"));
    }

    #[tokio::test]
    async fn test_get_sends_required_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/echo"))
            .and(header("X-API-KEY", "abc"))
            .and(header("Accept", "application/json"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let echo: Echo = client_with_timeout(2000)
            .get(url(&server, "/echo"), "abc")
            .await
            .unwrap();
        assert_eq!(echo.value, "ok");
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(body_json(serde_json::json!({"value": "hello"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"value": "hello"})))
            .expect(1)
            .mount(&server)
            .await;

        let echo: Echo = client_with_timeout(2000)
            .post(url(&server, "/echo"), &serde_json::json!({"value": "hello"}), "abc")
            .await
            .unwrap();
        assert_eq!(echo.value, "hello");
    }

    #[tokio::test]
    async fn test_non_success_status_is_remote_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let error = client_with_timeout(2000)
            .get::<Echo>(url(&server, "/echo"), "abc")
            .await
            .unwrap_err();
        match error {
            ClientError::Remote { status, body } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "boom");
            }
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_serialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let error = client_with_timeout(2000)
            .get::<Echo>(url(&server, "/echo"), "abc")
            .await
            .unwrap_err();
        assert_eq!(error.kind(), "SerializationError");
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"value": "late"}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let error = client_with_timeout(200)
            .get::<Echo>(url(&server, "/echo"), "abc")
            .await
            .unwrap_err();
        assert_eq!(error.kind(), "Timeout");
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let error = client_with_timeout(2000)
            .delete(Url::parse(&format!("http://{}/policies/1", addr)).unwrap(), "abc")
            .await
            .unwrap_err();
        assert_eq!(error.kind(), "TransportError");
    }
}
