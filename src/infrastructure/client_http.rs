use std::time::Duration;

use anyhow::Context;
use log::debug;
use reqwest::{
    Client, RequestBuilder,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use serde_json::{Value, json};

use crate::{ApiError, Credential, GitHubApiClient, GraphQlEnvelope, StdResult};

/// The production REST API base URL for GitHub.
pub const GITHUB_API_URL: &str = "https://api.github.com";

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION_HEADER: &str = "x-github-api-version";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Talks to the GitHub REST and GraphQL APIs over HTTP.
pub struct HttpApiClient {
    client: Client,
    api_url: String,
}

impl HttpApiClient {
    /// Creates a new `HttpApiClient` for the given API base URL, identified by `user_agent`.
    pub fn try_new(api_url: &str, user_agent: &str) -> StdResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            GITHUB_API_VERSION_HEADER,
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .with_context(|| format!("Invalid user agent: {user_agent}"))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn rest_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.api_url, path.trim_start_matches('/'))
        }
    }

    fn graphql_url(&self) -> String {
        format!("{}/graphql", self.api_url)
    }

    fn authorize(request: RequestBuilder, credential: Option<&Credential>) -> RequestBuilder {
        match credential {
            Some(credential) => {
                request.header(AUTHORIZATION, format!("Bearer {}", credential.token()))
            }
            None => request,
        }
    }
}

#[async_trait::async_trait]
impl GitHubApiClient for HttpApiClient {
    async fn get_json(&self, path: &str, credential: Option<Credential>) -> StdResult<Value> {
        let url = self.rest_url(path);
        debug!("GET {url}");
        let response = Self::authorize(self.client.get(&url), credential.as_ref())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                url,
            }
            .into());
        }

        Ok(response.json().await?)
    }

    async fn post_graphql(
        &self,
        query: &str,
        variables: Value,
        credential: &Credential,
    ) -> StdResult<Value> {
        let url = self.graphql_url();
        debug!("POST {url}");
        let response = Self::authorize(self.client.post(&url), Some(credential))
            .header(CONTENT_TYPE, "application/json")
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                url,
            }
            .into());
        }

        let envelope: GraphQlEnvelope = response.json().await?;
        match envelope {
            GraphQlEnvelope {
                errors: Some(errors),
                ..
            } if !errors.is_empty() => Err(ApiError::GraphQl(
                errors
                    .into_iter()
                    .map(|error| error.message)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
            .into()),
            GraphQlEnvelope {
                data: Some(data), ..
            } => Ok(data),
            GraphQlEnvelope { data: None, .. } => Err(ApiError::EmptyData.into()),
        }
    }
}
