use std::collections::HashMap;

use crate::{Credential, StdResult};

/// A trait for counting the merged pull requests a user authored in repositories.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PullRequestCounter: Sync + Send {
    /// Counts merged pull requests per repository full name.
    ///
    /// Repositories missing from the result are counted as zero by callers.
    async fn count_merged_pull_requests(
        &self,
        username: &str,
        full_names: &[String],
        credential: &Credential,
    ) -> StdResult<HashMap<String, u32>>;
}
