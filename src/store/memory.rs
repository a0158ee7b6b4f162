use tokio::sync::RwLock;

use crate::models::{EmployeeRecord, RecordId, StoredRecord};

use super::{LeaveStore, StoreError};

/// Process-local store used by the binary and by tests.
#[derive(Default)]
pub struct InMemoryLeaveStore {
    records: RwLock<Vec<StoredRecord>>,
}

impl InMemoryLeaveStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true when nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl LeaveStore for InMemoryLeaveStore {
    async fn insert(&self, record: EmployeeRecord) -> Result<RecordId, StoreError> {
        let id = RecordId::new();
        let mut records = self.records.write().await;
        records.push(StoredRecord { id, record });
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<StoredRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.clone())
    }
}
