//! HTTP API module for the Compliance Validation Engine.
//!
//! This module provides the REST endpoint that the schedule workflow
//! calls to validate a draft schedule's shifts before publishing.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ValidationRequest;
pub use response::{ApiError, ValidationResponse};
pub use state::AppState;
