use async_trait::async_trait;
use postal_resolver::error::{ResolutionError, ResolutionResult};
use postal_resolver::{LookupGateway, PostalCode, RawProviderResponse};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock lookup gateway for testing.
///
/// Answers from a table keyed by postal code and records every code it was
/// asked for. Unknown codes fail like a provider 404.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockLookupGateway {
    responses: Arc<Mutex<HashMap<String, ResolutionResult<RawProviderResponse>>>>,
    requested: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
}

#[allow(dead_code)]
impl MockLookupGateway {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requested: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Delay every answer, to leave room for cancellation.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn add_response(&self, code: &str, body: &str) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(code.to_string(), Ok(RawProviderResponse::from(body)));
    }

    pub fn add_error(&self, code: &str, error: ResolutionError) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(code.to_string(), Err(error));
    }

    pub fn get_call_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    pub fn requested_codes(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Default for MockLookupGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LookupGateway for MockLookupGateway {
    async fn resolve(&self, code: &PostalCode) -> ResolutionResult<RawProviderResponse> {
        self.requested.lock().unwrap().push(code.as_str().to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let responses = self.responses.lock().unwrap();
        responses.get(code.as_str()).cloned().unwrap_or_else(|| {
            Err(ResolutionError::TransportFailure {
                status: Some(404),
                message: "An error occurred".to_string(),
            })
        })
    }
}
