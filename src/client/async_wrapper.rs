//! Async lookup gateway over the synchronous LookupClient.
//!
//! `LookupClient` is blocking, so the gateway runs it on tokio's blocking
//! pool with `spawn_blocking` to keep the async runtime free.

use crate::client::LookupClient;
use crate::domain::PostalCode;
use crate::error::{ResolutionError, ResolutionResult};
use crate::models::RawProviderResponse;
use async_trait::async_trait;
use std::sync::Arc;

/// One outbound lookup per call, returning the provider body unparsed.
///
/// Implementations must not retry, cache or coalesce requests.
#[async_trait]
pub trait LookupGateway: Send + Sync {
    async fn resolve(&self, code: &PostalCode) -> ResolutionResult<RawProviderResponse>;
}

/// Async wrapper around synchronous LookupClient.
#[derive(Clone)]
pub struct AsyncLookupClient {
    client: Arc<LookupClient>,
}

impl AsyncLookupClient {
    pub fn new(client: LookupClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl LookupGateway for AsyncLookupClient {
    async fn resolve(&self, code: &PostalCode) -> ResolutionResult<RawProviderResponse> {
        let client = self.client.clone();
        let code = code.as_str().to_string();

        tokio::task::spawn_blocking(move || client.fetch_raw(&code))
            .await
            .map_err(|e| ResolutionError::transport(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[tokio::test]
    async fn test_async_client_creation() {
        let client = LookupClient::new(&Config::default());
        let async_client = AsyncLookupClient::new(client);

        // Should be able to clone and share as a trait object
        let _gateway: Arc<dyn LookupGateway> = Arc::new(async_client.clone());
    }
}
