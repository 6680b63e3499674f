//! Postal Resolver - a postal code resolution client.
//!
//! Takes a postal code typed by a user, fetches locality data from a remote
//! provider, and classifies the result by country so hosts can render it.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`PostalCode`)
//! - **models**: Provider document, locality records and the resolution outcome
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client and the async lookup gateway
//! - **classifier**: Pure classification of provider responses
//! - **services**: The submission workflow hosts call into
//! - **metrics**: Request and outcome counters

pub mod classifier;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod services;

pub use classifier::classify;
pub use client::{AsyncLookupClient, LookupClient, LookupGateway};
pub use config::Config;
pub use domain::PostalCode;
pub use error::{ConfigError, ErrorKind, ResolutionError, ResolutionResult};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{LocalityRecord, RawProviderResponse, ResolutionOutcome};
pub use services::{SubmissionService, SubmissionServiceImpl};
