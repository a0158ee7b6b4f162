//! HTTP API module for the leave desk service.
//!
//! This module provides the REST endpoints for submitting and listing leave
//! requests.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
