use crate::{Snapshot, StdResult};

/// A trait for persisting a snapshot to a storage medium.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SnapshotPersister: Sync + Send {
    /// Persists the snapshot to a storage medium.
    async fn persist(&self, snapshot: &Snapshot) -> StdResult<()>;
}
