//! HTTP client for making requests to the upstream API

use crate::config::OutgoingSettings;
use crate::upstream::{UpstreamRequest, UpstreamResponse};
use anyhow::Result;
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP client wrapper with service-specific configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            user_agent: format!("guides-searcher/{}", crate::VERSION),
        })
    }

    /// Execute an upstream request
    pub async fn execute(&self, request: &UpstreamRequest) -> Result<UpstreamResponse> {
        let response = self
            .client
            .get(&request.url)
            .header("User-Agent", &self.user_agent)
            .query(&request.params)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Parse a response into an UpstreamResponse
    async fn parse_response(response: Response) -> Result<UpstreamResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(UpstreamResponse { status, text, url })
    }
}
