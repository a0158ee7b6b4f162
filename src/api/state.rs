//! Application state for the leave desk API.

use std::sync::Arc;

use crate::pipeline::LeavePipeline;

/// Shared application state.
///
/// Holds the pipeline, which owns the store and transport handles shared by
/// all requests.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<LeavePipeline>,
}

impl AppState {
    /// Creates a new application state around `pipeline`.
    pub fn new(pipeline: LeavePipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Returns the pipeline.
    pub fn pipeline(&self) -> &LeavePipeline {
        &self.pipeline
    }
}
