//! Application service layer.
//!
//! Services orchestrate the lookup gateway and the classifier. They are the
//! boundary hosts (UI, CLI, tests) call into.

mod submission_service;

pub use submission_service::{SubmissionService, SubmissionServiceImpl};
