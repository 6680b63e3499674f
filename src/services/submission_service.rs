//! Submission workflow.
//!
//! The single entry point a host calls with raw user input: trim and
//! validate, one gateway lookup, classification. Every failure, whatever its
//! origin, comes back as `ResolutionOutcome::Failed`.

use crate::classifier::classify;
use crate::client::LookupGateway;
use crate::domain::PostalCode;
use crate::error::ResolutionError;
use crate::metrics::Metrics;
use crate::models::ResolutionOutcome;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Submission service trait for business operations.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Resolve raw user input against `expected_country`.
    ///
    /// Blank input fails with `InvalidInput` without calling the gateway;
    /// anything else makes exactly one gateway call. No retries.
    async fn submit(&self, raw_input: &str, expected_country: &str) -> ResolutionOutcome;

    /// Same as [`submit`](Self::submit), abandoning the lookup with
    /// `Cancelled` once `cancel` fires.
    ///
    /// A token that is already cancelled prevents the gateway call. A lookup
    /// already running on the blocking pool finishes in the background and
    /// its result is dropped.
    async fn submit_with_cancellation(
        &self,
        raw_input: &str,
        expected_country: &str,
        cancel: &CancellationToken,
    ) -> ResolutionOutcome;
}

/// Default implementation of SubmissionService.
pub struct SubmissionServiceImpl {
    gateway: Arc<dyn LookupGateway>,
    metrics: Metrics,
}

impl SubmissionServiceImpl {
    /// Create a new submission service.
    pub fn new(gateway: Arc<dyn LookupGateway>) -> Self {
        Self::with_metrics(gateway, Metrics::new())
    }

    /// Create a submission service recording into an existing collector.
    pub fn with_metrics(gateway: Arc<dyn LookupGateway>, metrics: Metrics) -> Self {
        Self { gateway, metrics }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    async fn run(
        &self,
        raw_input: &str,
        expected_country: &str,
        cancel: Option<&CancellationToken>,
    ) -> ResolutionOutcome {
        let outcome = self.resolve_outcome(raw_input, expected_country, cancel).await;
        self.metrics.record_outcome(&outcome);
        outcome
    }

    async fn resolve_outcome(
        &self,
        raw_input: &str,
        expected_country: &str,
        cancel: Option<&CancellationToken>,
    ) -> ResolutionOutcome {
        let code = match PostalCode::new(raw_input) {
            Ok(code) => code,
            Err(e) => {
                tracing::warn!("Rejected submission: {}", e);
                return ResolutionOutcome::failed(e);
            }
        };

        let lookup = match cancel {
            Some(token) => {
                if token.is_cancelled() {
                    tracing::info!("Lookup for {} cancelled before dispatch", code);
                    return ResolutionOutcome::failed(ResolutionError::Cancelled);
                }

                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        tracing::info!("Lookup for {} cancelled in flight", code);
                        return ResolutionOutcome::failed(ResolutionError::Cancelled);
                    }
                    result = self.gateway.resolve(&code) => result,
                }
            }
            None => self.gateway.resolve(&code).await,
        };

        match lookup {
            Ok(raw) => classify(&raw, expected_country),
            Err(e) => {
                tracing::warn!("Lookup for {} failed: {}", code, e);
                ResolutionOutcome::failed(e)
            }
        }
    }
}

#[async_trait]
impl SubmissionService for SubmissionServiceImpl {
    async fn submit(&self, raw_input: &str, expected_country: &str) -> ResolutionOutcome {
        self.run(raw_input, expected_country, None).await
    }

    async fn submit_with_cancellation(
        &self,
        raw_input: &str,
        expected_country: &str,
        cancel: &CancellationToken,
    ) -> ResolutionOutcome {
        self.run(raw_input, expected_country, Some(cancel)).await
    }
}
