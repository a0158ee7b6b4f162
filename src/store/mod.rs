//! Persistence contract for leave records.
//!
//! The pipeline only needs two operations from a store: insert one record
//! and list everything. Implementations must make a single insert atomic.

mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{EmployeeRecord, RecordId, StoredRecord};

pub use memory::InMemoryLeaveStore;

/// Store failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing service could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// The store refused the record.
    #[error("store rejected record: {0}")]
    Rejected(String),
}

/// Document store holding leave records.
#[async_trait]
pub trait LeaveStore: Send + Sync {
    /// Persists `record` and returns its new identifier.
    async fn insert(&self, record: EmployeeRecord) -> Result<RecordId, StoreError>;

    /// Returns every stored record in insertion order.
    async fn find_all(&self) -> Result<Vec<StoredRecord>, StoreError>;
}
