//! HTTP client for the postal code provider.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client builds the lookup URL,
//! issues exactly one GET per call and maps transport errors. It never parses
//! the body; that is the classifier's job.

mod async_wrapper;
pub use async_wrapper::{AsyncLookupClient, LookupGateway};

use crate::config::{Config, CODE_PLACEHOLDER};
use crate::domain::ValidationError;
use crate::error::{ResolutionError, ResolutionResult, GENERIC_TRANSPORT_MESSAGE};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::RawProviderResponse;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the postal code provider.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct LookupClient {
    /// Base URL for the provider
    base_url: String,

    /// Path template containing `{code}`
    lookup_path: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl LookupClient {
    /// Create a new LookupClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            lookup_path: config.lookup_path.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a LookupClient with a custom base URL and path (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, lookup_path: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            lookup_path,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build the lookup URL for a postal code.
    fn build_url(&self, code: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self
            .lookup_path
            .trim_start_matches('/')
            .replace(CODE_PLACEHOLDER, &urlencoding::encode(code));
        format!("{}/{}", base, path)
    }

    /// Fetch the raw provider body for a postal code.
    ///
    /// Sends exactly one GET. `PostalCode` callers are already trimmed; the
    /// blank check here guards direct `&str` callers, which fail with
    /// `InvalidInput` before any request is made.
    pub fn fetch_raw(&self, code: &str) -> ResolutionResult<RawProviderResponse> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ValidationError::EmptyPostalCode.into());
        }

        let url = self.build_url(code);
        tracing::debug!("GET {}", url);

        let timer = HttpTimer::new(self.metrics.clone());
        let response = match self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
        {
            Ok(response) => {
                timer.complete();
                response
            }
            Err(e) => {
                timer.complete_with_error();
                let err = Self::map_error(e);
                tracing::error!("GET {} - Error: {}", url, err);
                return Err(err);
            }
        };

        let status = response.status();
        let body = response.into_string().map_err(|e| {
            ResolutionError::transport(format!("Failed to read response body: {}", e))
        })?;

        tracing::debug!(
            "GET {} - Success (status: {}, {} bytes)",
            url,
            status,
            body.len()
        );
        Ok(RawProviderResponse::new(body))
    }

    /// Map a ureq error to a ResolutionError.
    fn map_error(error: ureq::Error) -> ResolutionError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .ok()
                    .and_then(|body| Self::provider_message(&body))
                    .unwrap_or_else(|| GENERIC_TRANSPORT_MESSAGE.to_string());

                ResolutionError::TransportFailure {
                    status: Some(code),
                    message,
                }
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed | ureq::ErrorKind::Dns => {
                    ResolutionError::transport("Connection failed")
                }
                ureq::ErrorKind::Io if Self::is_timeout(&transport) => {
                    ResolutionError::transport("Request timed out")
                }
                _ => ResolutionError::transport(transport.to_string()),
            },
        }
    }

    /// Whether a transport error wraps an I/O timeout.
    fn is_timeout(transport: &ureq::Transport) -> bool {
        std::error::Error::source(transport)
            .and_then(|source| source.downcast_ref::<std::io::Error>())
            .map(|e| {
                matches!(
                    e.kind(),
                    std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                )
            })
            .unwrap_or(false)
    }

    /// Extract the provider's error message from a failed response body.
    ///
    /// JSON bodies contribute their `message` or `error` string field; other
    /// non-empty bodies are used verbatim.
    fn provider_message(body: &str) -> Option<String> {
        let body = body.trim();
        if body.is_empty() {
            return None;
        }

        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => ["message", "error"]
                .iter()
                .copied()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()))
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .map(str::to_string),
            Err(_) => Some(body.to_string()),
        }
    }
}
