use crate::{AggregationConfig, Snapshot, StdResult};

/// A trait for aggregating GitHub data into a snapshot.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SnapshotAggregator: Sync + Send {
    /// Aggregates the user's repositories into a snapshot.
    async fn aggregate(&self, config: &AggregationConfig) -> StdResult<Snapshot>;
}
