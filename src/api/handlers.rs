//! HTTP request handlers for the Compliance Validation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Shift, ValidationReport};
use crate::validation::{validate_all, validate_employee};

use super::request::ValidationRequest;
use super::response::{ApiError, ValidationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/validate", post(validate_handler))
        .with_state(state)
}

/// Handler for the POST /validate endpoint.
///
/// Accepts the shift set of a draft schedule and returns the violations
/// found, with the publish gate derived from their severities.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let shifts: Vec<Shift> = request.shifts.into_iter().map(Into::into).collect();
    let rules = state.rules().rules();

    let start_time = Instant::now();
    let violations = match &request.employee_id {
        Some(employee_id) => validate_employee(&shifts, employee_id, rules),
        None => validate_all(&shifts, rules),
    };
    let duration = start_time.elapsed();

    let report = ValidationReport::new(violations);
    info!(
        correlation_id = %correlation_id,
        shifts_count = shifts.len(),
        errors = report.totals.errors,
        warnings = report.totals.warnings,
        can_publish = report.can_publish,
        duration_us = duration.as_micros(),
        "Validation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ValidationResponse::from_report(report)),
    )
        .into_response()
}
