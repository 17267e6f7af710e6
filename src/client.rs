//! HTTP client for the remote tool store.
//!
//! Thin request/response glue around the store's REST surface: fetch a
//! tool record, save the editor's latest output back, list a project's
//! tools. The editor itself never does I/O - fetching happens once at
//! activation and saving is an explicit caller action, so this client is
//! deliberately stateless beyond its connection pool.

use crate::error::{Error, Result};
use crate::types::{CollectionResponse, ToolPayload, ToolRecord};
use std::time::Duration;

/// Connection options for [`ToolsClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the tool store API (e.g. `http://api.localhost/v1`).
    pub base_url: String,

    /// Bearer token for the session, if the store requires one.
    pub api_token: Option<String>,

    /// Request timeout in seconds.
    pub timeout: u64,
}

impl ClientOptions {
    /// Create a new builder for ClientOptions.
    pub fn builder() -> ClientOptionsBuilder {
        ClientOptionsBuilder::default()
    }
}

/// Builder for [`ClientOptions`].
#[derive(Debug, Default)]
pub struct ClientOptionsBuilder {
    base_url: Option<String>,
    api_token: Option<String>,
    timeout: Option<u64>,
}

impl ClientOptionsBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ClientOptions> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::config("base_url is required"))?;

        Ok(ClientOptions {
            base_url,
            api_token: self.api_token,
            timeout: self.timeout.unwrap_or(30),
        })
    }
}

/// Async client for the remote tool store.
pub struct ToolsClient {
    http: reqwest::Client,
    options: ClientOptions,
}

impl ToolsClient {
    /// Create a client with a pooled HTTP connection and the configured
    /// timeout.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(options.timeout))
            .build()
            .map_err(Error::Http)?;

        Ok(Self { http, options })
    }

    /// Fetch a single tool record by id (GET /tools/{id}).
    pub async fn fetch_tool(&self, tool_id: &str) -> Result<ToolRecord> {
        let url = format!("{}/tools/{}", self.options.base_url, tool_id);
        log::debug!("fetching tool record from {}", url);

        let response = self.authorize(self.http.get(&url)).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Save a tool definition back to the store (POST /tools/{id}).
    ///
    /// The payload is the editor's latest generated output; the store
    /// responds with the updated record.
    pub async fn save_tool(&self, tool_id: &str, payload: &ToolPayload) -> Result<ToolRecord> {
        let url = format!("{}/tools/{}", self.options.base_url, tool_id);
        log::debug!("saving tool {} ({})", tool_id, payload.name);

        let response = self
            .authorize(self.http.post(&url))
            .json(payload)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// List the tool records of one project (GET /tools?project_id=...).
    pub async fn list_tools(&self, project_id: &str) -> Result<CollectionResponse<ToolRecord>> {
        let url = format!("{}/tools", self.options.base_url);
        log::debug!("listing tools for project {}", project_id);

        let response = self
            .authorize(self.http.get(&url))
            .query(&[("project_id", project_id)])
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.options.api_token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Turn a non-2xx response into an API error carrying status and body.
    /// A body that cannot be read is tolerated rather than masking the
    /// original status.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error (failed to read response body)".to_string());
        Err(Error::api(format!("API error {}: {}", status, body)))
    }
}

impl std::fmt::Debug for ToolsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolsClient")
            .field("base_url", &self.options.base_url)
            .field("api_token", &self.options.api_token.as_ref().map(|_| "***"))
            .field("timeout", &self.options.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_options_builder() {
        let options = ClientOptions::builder()
            .base_url("http://api.localhost/v1")
            .api_token("jwt-token")
            .timeout(10)
            .build()
            .unwrap();

        assert_eq!(options.base_url, "http://api.localhost/v1");
        assert_eq!(options.api_token.as_deref(), Some("jwt-token"));
        assert_eq!(options.timeout, 10);
    }

    #[test]
    fn test_client_options_builder_defaults() {
        let options = ClientOptions::builder()
            .base_url("http://api.localhost/v1")
            .build()
            .unwrap();

        assert!(options.api_token.is_none());
        assert_eq!(options.timeout, 30);
    }

    #[test]
    fn test_client_options_builder_missing_base_url() {
        let result = ClientOptions::builder().api_token("jwt-token").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_fetch_tool_surfaces_connection_errors() {
        // Discard-port endpoint: the request fails at the transport layer
        // and must come back as an Http error, not a panic.
        let options = ClientOptions::builder()
            .base_url("http://127.0.0.1:9/v1")
            .timeout(1)
            .build()
            .unwrap();
        let client = ToolsClient::new(options).unwrap();

        let result = client.fetch_tool("tool-1").await;
        assert!(matches!(result, Err(Error::Http(_))));
    }

    #[test]
    fn test_client_construction() {
        let options = ClientOptions::builder()
            .base_url("http://api.localhost/v1")
            .build()
            .unwrap();

        let client = ToolsClient::new(options).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("api.localhost"));
        // Token is never echoed in debug output
        assert!(!debug.contains("jwt"));
    }
}
