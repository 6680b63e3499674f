//! Postal Resolver - command line host.
//!
//! Resolves the postal code given on the command line once and prints the
//! outcome as JSON on stdout. Logs go to stderr.

use anyhow::Result;
use postal_resolver::{
    AsyncLookupClient, Config, LookupClient, LookupGateway, Metrics, SubmissionService,
    SubmissionServiceImpl,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so stdout carries just the outcome)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let raw_input = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    info!(
        "Resolving against {} (expected country: {})",
        config.api_base_url, config.expected_country
    );

    let metrics = Metrics::new();
    let client = LookupClient::new(&config).with_metrics(metrics.clone());
    let gateway = Arc::new(AsyncLookupClient::new(client)) as Arc<dyn LookupGateway>;
    let service = SubmissionServiceImpl::with_metrics(gateway, metrics.clone());

    // Ctrl-C abandons the in-flight lookup
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let outcome = service
        .submit_with_cancellation(&raw_input, &config.expected_country, &cancel)
        .await;

    println!("{}", serde_json::to_string_pretty(&outcome)?);

    let summary = metrics.summary();
    info!(
        "HTTP requests: {} ({} errors, avg {:.1} ms)",
        summary.http_requests_total, summary.http_errors_total, summary.http_duration_avg_ms
    );

    match outcome.error() {
        Some(reason) => {
            error!("Resolution failed: {}", reason);
            Err(reason.clone().into())
        }
        None => Ok(()),
    }
}
