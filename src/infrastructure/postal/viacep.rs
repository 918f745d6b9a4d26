//! Reqwest-backed ViaCEP adapter.
//!
//! Owns transport details only: URL construction, timeout and user agent.
//! The upstream body is never decoded.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Url};
use tracing::{debug, warn};

use crate::config::PostalSettings;
use crate::domain::{DomainError, DomainResult, PostalCodeLookup, PostalLookupResponse};
use crate::support::errors::InfraError;

/// Postal-code lookup against a ViaCEP-compatible endpoint
/// (`GET {base}/ws/{code}/json/`).
pub struct ViaCepClient {
    client: Client,
    base_url: Url,
}

impl ViaCepClient {
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, InfraError> {
        let base_url = Url::parse(base_url).map_err(|e| InfraError::Url(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(InfraError::Url(format!("{} cannot be a base URL", base_url)));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_settings(settings: &PostalSettings) -> Result<Self, InfraError> {
        Self::new(
            &settings.base_url,
            Duration::from_secs(settings.timeout_secs),
            &settings.user_agent,
        )
    }

    /// `{base}/ws/{code}/json/`, with `code` pushed as a single
    /// percent-encoded segment.
    fn lookup_url(&self, code: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["ws", code, "json", ""]);
        }
        url
    }
}

#[async_trait]
impl PostalCodeLookup for ViaCepClient {
    async fn lookup(&self, code: &str) -> DomainResult<PostalLookupResponse> {
        let url = self.lookup_url(code);
        debug!(%url, "Querying postal-code service");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.bytes().await.map_err(map_transport_error)?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Postal-code service returned an error status");
        }

        Ok(PostalLookupResponse {
            status: status.as_u16(),
            content_type,
            body: body.to_vec(),
        })
    }
}

fn map_transport_error(error: reqwest::Error) -> DomainError {
    if error.is_timeout() {
        DomainError::Unavailable("postal-code service timed out".to_string())
    } else {
        DomainError::Unavailable(error.to_string())
    }
}
