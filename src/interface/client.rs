use serde_json::Value;

use crate::{Credential, StdResult};

/// A trait for the GitHub API transport, REST and GraphQL.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GitHubApiClient: Sync + Send {
    /// Performs a GET on a REST path and returns the decoded JSON body.
    ///
    /// The `Authorization` header is only sent when a credential is given.
    async fn get_json(&self, path: &str, credential: Option<Credential>) -> StdResult<Value>;

    /// Performs a GraphQL query and returns its `data` payload.
    async fn post_graphql(
        &self,
        query: &str,
        variables: Value,
        credential: &Credential,
    ) -> StdResult<Value>;
}
