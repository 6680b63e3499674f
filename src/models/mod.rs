//! Data models for postal code resolution.
//!
//! This module contains the provider document, the locality records parsed
//! from it, and the outcome handed back to callers.

pub mod locality;
pub mod outcome;
pub mod response;

pub use locality::LocalityRecord;
pub use outcome::ResolutionOutcome;
pub use response::{ProviderResponse, RawProviderResponse};
