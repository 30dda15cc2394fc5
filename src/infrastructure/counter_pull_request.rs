use std::{collections::HashMap, sync::Arc};

use log::debug;
use serde_json::json;

use crate::{Credential, GitHubApiClient, PullRequestCounter, SearchCountsData, StdResult};

/// The number of repositories searched in one GraphQL query.
pub const PULL_REQUEST_COUNT_BATCH_SIZE: usize = 24;

/// Escapes a value embedded in a GraphQL string literal.
pub fn escape_graphql_string(input: &str) -> String {
    input.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Counts merged pull requests with one aliased `search` field per repository, in sequential batches.
pub struct BatchedPullRequestCounter {
    client: Arc<dyn GitHubApiClient>,
    batch_size: usize,
}

impl BatchedPullRequestCounter {
    /// Creates a new `BatchedPullRequestCounter` with the default batch size.
    pub fn new(client: Arc<dyn GitHubApiClient>) -> Self {
        Self::with_batch_size(client, PULL_REQUEST_COUNT_BATCH_SIZE)
    }

    /// Creates a new `BatchedPullRequestCounter` with the given batch size.
    pub fn with_batch_size(client: Arc<dyn GitHubApiClient>, batch_size: usize) -> Self {
        Self {
            client,
            batch_size: batch_size.max(1),
        }
    }

    fn build_batch_query(username: &str, full_names: &[String]) -> String {
        let fields = full_names
            .iter()
            .enumerate()
            .map(|(index, full_name)| {
                let search = format!("repo:{full_name} is:pr is:merged author:{username}");
                format!(
                    "  r{index}: search(query: \"{}\", type: ISSUE, first: 1) {{ issueCount }}",
                    escape_graphql_string(&search)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("query {{\n{fields}\n}}")
    }
}

#[async_trait::async_trait]
impl PullRequestCounter for BatchedPullRequestCounter {
    async fn count_merged_pull_requests(
        &self,
        username: &str,
        full_names: &[String],
        credential: &Credential,
    ) -> StdResult<HashMap<String, u32>> {
        let mut counts = HashMap::new();
        for (batch_index, batch) in full_names.chunks(self.batch_size).enumerate() {
            debug!(
                "Counting merged pull requests of {username}: batch #{}, repositories={}",
                batch_index + 1,
                batch.len()
            );
            let query = Self::build_batch_query(username, batch);
            let data = self
                .client
                .post_graphql(&query, json!({}), credential)
                .await?;
            let mut data: SearchCountsData = serde_json::from_value(data)?;
            for (index, full_name) in batch.iter().enumerate() {
                let count = data
                    .remove(&format!("r{index}"))
                    .flatten()
                    .map(|search| search.issueCount)
                    .unwrap_or_default();
                counts.insert(full_name.to_owned(), count);
            }
        }

        Ok(counts)
    }
}
