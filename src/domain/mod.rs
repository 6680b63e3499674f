//! Domain value objects and types.
//!
//! Value objects validate at construction time so an invalid postal code can
//! never reach the lookup gateway.

pub mod errors;
pub mod postal_code;

pub use errors::ValidationError;
pub use postal_code::PostalCode;
