//! HTTP request handlers for the leave desk API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::LeaveRequest;

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_handler).post(submit_handler))
        .route("/employees/", get(list_handler).post(submit_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /employees.
///
/// Runs the request through the pipeline. Notification failures still
/// produce a 200 response; the delivery flags in the body report them.
async fn submit_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(rejection);
            warn!(
                correlation_id = %correlation_id,
                code = %error.code,
                error = %error.message,
                "Rejected request body"
            );
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let start_time = Instant::now();
    match state.pipeline().handle(&request).await {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                id = %outcome.id,
                emp_id = %request.emp_id,
                outcome = ?outcome.decision.outcome,
                admin_email_sent = outcome.admin_email_sent,
                employee_email_sent = outcome.employee_email_sent,
                duration_us = start_time.elapsed().as_micros(),
                "Leave request completed"
            );
            (StatusCode::OK, Json(outcome)).into_response()
        }
        Err(err) if err.is_validation() => {
            info!(
                correlation_id = %correlation_id,
                emp_id = %request.emp_id,
                error = %err,
                "Leave request rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                emp_id = %request.emp_id,
                error = %err,
                "Leave request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /employees.
async fn list_handler(State(state): State<AppState>) -> Response {
    match state.pipeline().list().await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => {
            warn!(error = %err, "Failed to fetch records");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}
