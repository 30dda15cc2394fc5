use std::sync::Arc;

use log::{debug, info, warn};
use serde_json::json;

use crate::{
    ContributedData, ContributedRepositoriesRequest, ContributedRepository, Credential,
    GitHubApiClient, PinnedItemsData, PullRequestCounter, Repository, RepositoriesRequest,
    RepositoryFetcher, RepositoryNode, Request, RequestCaches, RestRepository, RestUser,
    StdResult, User, UserRequest, dedup_by_key,
};

/// The maximum page size of the REST repositories listing.
const REST_PAGE_SIZE: u32 = 100;

const PINNED_QUERY: &str = r#"
query ($login: String!, $first: Int!) {
  user(login: $login) {
    pinnedItems(first: $first, types: [REPOSITORY]) {
      nodes {
        ... on Repository {
          name
          nameWithOwner
          url
          description
          isFork
          isArchived
          stargazerCount
          pushedAt
          primaryLanguage { name }
        }
      }
    }
  }
}
"#;

const CONTRIBUTED_QUERY: &str = r#"
query ($login: String!, $first: Int!) {
  user(login: $login) {
    repositoriesContributedTo(
      first: $first
      includeUserRepositories: false
      contributionTypes: [COMMIT, ISSUE, PULL_REQUEST, PULL_REQUEST_REVIEW]
      orderBy: { field: STARGAZERS, direction: DESC }
    ) {
      nodes {
        name
        nameWithOwner
        url
        description
        isFork
        isArchived
        stargazerCount
        pushedAt
        primaryLanguage { name }
      }
    }
  }
}
"#;

const CONTRIBUTED_FALLBACK_QUERY: &str = r#"
query ($login: String!, $first: Int!) {
  user(login: $login) {
    repositoriesContributedTo(
      first: $first
      includeUserRepositories: false
    ) {
      nodes {
        name
        nameWithOwner
        url
        description
        isFork
        isArchived
        stargazerCount
        pushedAt
        primaryLanguage { name }
      }
    }
  }
}
"#;

/// A shape of the contributed repositories query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributedQuery {
    /// Filters by contribution type and orders by stars on the server.
    Primary,
    /// Omits the filter and ordering, for servers rejecting the primary shape.
    Fallback,
}

impl ContributedQuery {
    /// The query shapes attempted in order; the first success wins.
    pub const STRATEGY: [ContributedQuery; 2] =
        [ContributedQuery::Primary, ContributedQuery::Fallback];

    fn query(&self) -> &'static str {
        match self {
            ContributedQuery::Primary => CONTRIBUTED_QUERY,
            ContributedQuery::Fallback => CONTRIBUTED_FALLBACK_QUERY,
        }
    }
}

/// Fetches a user's profile and repositories from the GitHub REST and GraphQL APIs.
pub struct GitHubFetcher {
    client: Arc<dyn GitHubApiClient>,
    counter: Arc<dyn PullRequestCounter>,
    credential: Option<Credential>,
    caches: Arc<RequestCaches>,
}

impl GitHubFetcher {
    /// Creates a new `GitHubFetcher` instance.
    pub fn new(
        client: Arc<dyn GitHubApiClient>,
        counter: Arc<dyn PullRequestCounter>,
        credential: Option<Credential>,
        caches: Arc<RequestCaches>,
    ) -> Self {
        Self {
            client,
            counter,
            credential,
            caches,
        }
    }

    fn fail_soft<T: Default>(request: &Request, result: StdResult<T>) -> T {
        result.unwrap_or_else(|e| {
            warn!("{request} failed, using an empty result: {e:#}");
            T::default()
        })
    }

    fn keep_sources(nodes: Vec<RepositoryNode>) -> Vec<Repository> {
        let repositories = nodes
            .into_iter()
            .map(Repository::from)
            .filter(Repository::is_active_source)
            .collect();

        dedup_by_key(repositories, |r| &r.full_name)
    }

    async fn load_user(&self, request: &UserRequest) -> StdResult<Option<User>> {
        let path = format!("users/{}", request.username);
        let value = self.client.get_json(&path, self.credential.clone()).await?;
        let user: RestUser = serde_json::from_value(value)?;

        Ok(Some(user.into()))
    }

    async fn load_own_repositories(
        &self,
        request: &RepositoriesRequest,
    ) -> StdResult<Vec<Repository>> {
        let path = format!(
            "users/{}/repos?per_page={REST_PAGE_SIZE}&sort=pushed&direction=desc",
            request.username
        );
        let value = self.client.get_json(&path, self.credential.clone()).await?;
        let repositories: Vec<RestRepository> = serde_json::from_value(value)?;
        let mut repositories: Vec<Repository> = repositories
            .into_iter()
            .map(Repository::from)
            .filter(Repository::is_active_source)
            .collect();
        repositories.sort_by(Repository::cmp_by_push_desc);
        let mut repositories = dedup_by_key(repositories, |r| &r.full_name);
        repositories.truncate(request.limit as usize);

        Ok(repositories)
    }

    async fn load_pinned_repositories(
        &self,
        request: &RepositoriesRequest,
        credential: &Credential,
    ) -> StdResult<Vec<Repository>> {
        let variables = json!({ "login": request.username, "first": request.limit });
        let data = self
            .client
            .post_graphql(PINNED_QUERY, variables, credential)
            .await?;
        let data: PinnedItemsData = serde_json::from_value(data)?;

        Ok(Self::keep_sources(data.into_nodes()))
    }

    async fn query_contributed_repositories(
        &self,
        request: &ContributedRepositoriesRequest,
        credential: &Credential,
    ) -> StdResult<ContributedData> {
        let variables = json!({ "login": request.username, "first": request.limit });
        let mut last_error = None;
        for shape in ContributedQuery::STRATEGY {
            let result = self
                .client
                .post_graphql(shape.query(), variables.clone(), credential)
                .await
                .and_then(|data| {
                    serde_json::from_value::<ContributedData>(data).map_err(anyhow::Error::from)
                });
            match result {
                Ok(data) => return Ok(data),
                Err(e) => {
                    warn!("Contributed repositories query {shape:?} rejected: {e:#}");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| anyhow::anyhow!("No contributed repositories query attempted")))
    }

    async fn load_contributed_repositories(
        &self,
        request: &ContributedRepositoriesRequest,
        credential: &Credential,
    ) -> StdResult<Vec<ContributedRepository>> {
        let data = self
            .query_contributed_repositories(request, credential)
            .await?;
        let candidates: Vec<Repository> = Self::keep_sources(data.into_nodes())
            .into_iter()
            .filter(|repository| repository.stargazers_count >= request.min_stars)
            .collect();
        if candidates.is_empty() {
            debug!("No contributed repository candidate for {}", request.username);
            return Ok(vec![]);
        }

        let full_names: Vec<String> = candidates.iter().map(|r| r.full_name.clone()).collect();
        let counts = self
            .counter
            .count_merged_pull_requests(&request.username, &full_names, credential)
            .await
            .unwrap_or_else(|e| {
                warn!("Failed to count merged pull requests, counting zero: {e:#}");
                Default::default()
            });

        Ok(candidates
            .into_iter()
            .map(|repository| {
                let pr_count = counts.get(&repository.full_name).copied().unwrap_or(0);
                ContributedRepository::new(repository, pr_count)
            })
            .collect())
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for GitHubFetcher {
    async fn fetch_user(&self, username: &str) -> Option<User> {
        let user_request = UserRequest::new(username);
        let request = Request::User(user_request.clone());
        let key = request.cache_key(self.credential.as_ref());
        self.caches
            .users
            .get_or_fetch(key, || async {
                Self::fail_soft(&request, self.load_user(&user_request).await)
            })
            .await
    }

    async fn fetch_own_repositories(&self, username: &str, limit: u32) -> Vec<Repository> {
        let repositories_request = RepositoriesRequest::new(username, limit);
        let request = Request::OwnRepositories(repositories_request.clone());
        let key = request.cache_key(self.credential.as_ref());
        self.caches
            .own_repositories
            .get_or_fetch(key, || async {
                let repositories = Self::fail_soft(
                    &request,
                    self.load_own_repositories(&repositories_request).await,
                );
                info!("Fetched {} own repositories of {username}", repositories.len());
                repositories
            })
            .await
    }

    async fn fetch_pinned_repositories(&self, username: &str, limit: u32) -> Vec<Repository> {
        let Some(credential) = self.credential.as_ref() else {
            debug!("No GitHub credential, skipping pinned repositories of {username}");
            return vec![];
        };
        let repositories_request = RepositoriesRequest::new(username, limit);
        let request = Request::PinnedRepositories(repositories_request.clone());
        let key = request.cache_key(Some(credential));
        self.caches
            .pinned_repositories
            .get_or_fetch(key, || async {
                Self::fail_soft(
                    &request,
                    self.load_pinned_repositories(&repositories_request, credential)
                        .await,
                )
            })
            .await
    }

    async fn fetch_contributed_repositories(
        &self,
        username: &str,
        limit: u32,
        min_stars: u32,
    ) -> Vec<ContributedRepository> {
        let Some(credential) = self.credential.as_ref() else {
            debug!("No GitHub credential, skipping contributed repositories of {username}");
            return vec![];
        };
        let contributed_request = ContributedRepositoriesRequest::new(username, limit, min_stars);
        let request = Request::ContributedRepositories(contributed_request.clone());
        let key = request.cache_key(Some(credential));
        self.caches
            .contributed_repositories
            .get_or_fetch(key, || async {
                let repositories = Self::fail_soft(
                    &request,
                    self.load_contributed_repositories(&contributed_request, credential)
                        .await,
                );
                info!(
                    "Fetched {} contributed repositories of {username}",
                    repositories.len()
                );
                repositories
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use anyhow::anyhow;
    use chrono::{Duration, TimeZone, Utc};
    use mockall::predicate::{always, eq};
    use serde_json::Value;

    use crate::{ApiError, MockGitHubApiClient, MockPullRequestCounter};

    use super::*;

    fn rest_repository(name: &str, days_ago: i64, fork: bool, archived: bool) -> Value {
        let pushed_at = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap() - Duration::days(days_ago);
        json!({
            "name": name,
            "full_name": format!("octocat/{name}"),
            "html_url": format!("https://github.com/octocat/{name}"),
            "description": null,
            "fork": fork,
            "archived": archived,
            "stargazers_count": 3,
            "language": "Rust",
            "pushed_at": pushed_at.to_rfc3339(),
        })
    }

    fn graphql_node(full_name: &str, stars: u32, fork: bool, archived: bool) -> Value {
        let name = full_name.rsplit('/').next().unwrap();
        json!({
            "name": name,
            "nameWithOwner": full_name,
            "url": format!("https://github.com/{full_name}"),
            "description": "A repository",
            "isFork": fork,
            "isArchived": archived,
            "stargazerCount": stars,
            "pushedAt": "2025-01-01T00:00:00Z",
            "primaryLanguage": null
        })
    }

    fn contributed_data(nodes: Vec<Value>) -> Value {
        json!({ "user": { "repositoriesContributedTo": { "nodes": nodes } } })
    }

    fn fetcher(
        client: MockGitHubApiClient,
        counter: MockPullRequestCounter,
        credential: Option<Credential>,
    ) -> GitHubFetcher {
        GitHubFetcher::new(
            Arc::new(client),
            Arc::new(counter),
            credential,
            Arc::new(RequestCaches::default()),
        )
    }

    mod own_repositories {
        use super::*;

        fn fixture() -> Value {
            json!([
                rest_repository("r1", 1, false, false),
                rest_repository("fork-1", 2, true, false),
                rest_repository("r2", 3, false, false),
                rest_repository("archived-1", 4, false, true),
                rest_repository("r3", 6, false, false),
                rest_repository("r4", 5, false, false),
                rest_repository("fork-2", 7, true, false),
                rest_repository("r5", 8, false, false),
                rest_repository("r6", 9, false, false),
                rest_repository("r7", 10, false, false),
            ])
        }

        #[tokio::test]
        async fn fetch_returns_most_recently_pushed_sources_up_to_limit() {
            let client = {
                let mut client = MockGitHubApiClient::new();
                client
                    .expect_get_json()
                    .with(
                        eq("users/octocat/repos?per_page=100&sort=pushed&direction=desc"),
                        eq(None::<Credential>),
                    )
                    .returning(|_, _| Ok(fixture()))
                    .times(1);

                client
            };
            let fetcher = fetcher(client, MockPullRequestCounter::new(), None);

            let repositories = fetcher.fetch_own_repositories("octocat", 6).await;

            assert_eq!(
                vec!["r1", "r2", "r4", "r3", "r5", "r6"],
                repositories
                    .iter()
                    .map(|r| r.name.as_str())
                    .collect::<Vec<_>>()
            );
            assert!(repositories.iter().all(Repository::is_active_source));
        }

        #[tokio::test]
        async fn fetch_is_a_prefix_of_larger_limits() {
            let client = {
                let mut client = MockGitHubApiClient::new();
                client
                    .expect_get_json()
                    .returning(|_, _| Ok(fixture()))
                    .times(2);

                client
            };
            let fetcher = fetcher(client, MockPullRequestCounter::new(), None);

            let short = fetcher.fetch_own_repositories("octocat", 3).await;
            let long = fetcher.fetch_own_repositories("octocat", 100).await;

            assert_eq!(7, long.len());
            assert_eq!(short[..], long[..3]);
        }

        #[tokio::test]
        async fn fetch_degrades_to_empty_on_http_error() {
            let client = {
                let mut client = MockGitHubApiClient::new();
                client
                    .expect_get_json()
                    .returning(|_, _| {
                        Err(ApiError::Http {
                            status: 500,
                            url: "https://api.github.com/users/octocat/repos".to_string(),
                        }
                        .into())
                    })
                    .times(1);

                client
            };
            let fetcher = fetcher(client, MockPullRequestCounter::new(), None);

            let repositories = fetcher.fetch_own_repositories("octocat", 6).await;

            assert!(repositories.is_empty());
        }

        #[tokio::test]
        async fn concurrent_identical_fetches_share_one_network_call() {
            let client = {
                let mut client = MockGitHubApiClient::new();
                client
                    .expect_get_json()
                    .returning(|_, _| Ok(fixture()))
                    .times(1);

                client
            };
            let fetcher = fetcher(
                client,
                MockPullRequestCounter::new(),
                Some(Credential::dummy()),
            );

            let (first, second) = tokio::join!(
                fetcher.fetch_own_repositories("octocat", 6),
                fetcher.fetch_own_repositories("octocat", 6)
            );

            assert_eq!(first, second);
        }

        #[tokio::test]
        async fn fetch_sends_the_credential_when_available() {
            let client = {
                let mut client = MockGitHubApiClient::new();
                client
                    .expect_get_json()
                    .with(always(), eq(Some(Credential::dummy())))
                    .returning(|_, _| Ok(json!([])))
                    .times(1);

                client
            };
            let fetcher = fetcher(
                client,
                MockPullRequestCounter::new(),
                Some(Credential::dummy()),
            );

            let repositories = fetcher.fetch_own_repositories("octocat", 6).await;

            assert!(repositories.is_empty());
        }
    }

    mod user {
        use super::*;

        #[tokio::test]
        async fn fetch_normalizes_rest_user() {
            let client = {
                let mut client = MockGitHubApiClient::new();
                client
                    .expect_get_json()
                    .with(eq("users/octocat"), eq(None::<Credential>))
                    .returning(|_, _| {
                        Ok(json!({
                            "login": "octocat",
                            "id": 1,
                            "name": "The Octocat",
                            "html_url": "https://github.com/octocat",
                            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
                            "bio": null,
                            "blog": "https://github.blog",
                            "company": "@github",
                            "location": "San Francisco",
                            "twitter_username": null,
                            "public_repos": 8,
                            "followers": 100,
                            "following": 9,
                            "created_at": "2011-01-25T18:44:36Z"
                        }))
                    })
                    .times(1);

                client
            };
            let fetcher = fetcher(client, MockPullRequestCounter::new(), None);

            let user = fetcher.fetch_user("octocat").await.unwrap();

            assert_eq!("octocat", user.login);
            assert_eq!(Some("The Octocat".to_string()), user.name);
            assert_eq!(8, user.public_repos);
        }

        #[tokio::test]
        async fn fetch_degrades_to_none_on_failure() {
            let client = {
                let mut client = MockGitHubApiClient::new();
                client
                    .expect_get_json()
                    .returning(|_, _| Err(anyhow!("Error fetching data")))
                    .times(1);

                client
            };
            let fetcher = fetcher(client, MockPullRequestCounter::new(), None);

            assert_eq!(None, fetcher.fetch_user("octocat").await);
            assert_eq!(None, fetcher.fetch_user("octocat").await);
        }
    }

    mod pinned_repositories {
        use super::*;

        #[tokio::test]
        async fn fetch_without_credential_performs_no_network_call() {
            let fetcher = fetcher(
                MockGitHubApiClient::new(),
                MockPullRequestCounter::new(),
                None,
            );

            let repositories = fetcher.fetch_pinned_repositories("octocat", 6).await;

            assert!(repositories.is_empty());
        }

        #[tokio::test]
        async fn fetch_excludes_forks_and_archived() {
            let client = {
                let mut client = MockGitHubApiClient::new();
                client
                    .expect_post_graphql()
                    .with(
                        eq(PINNED_QUERY),
                        eq(json!({ "login": "octocat", "first": 6 })),
                        eq(Credential::dummy()),
                    )
                    .returning(|_, _, _| {
                        Ok(json!({
                            "user": {
                                "pinnedItems": {
                                    "nodes": [
                                        graphql_node("octocat/a", 10, false, false),
                                        graphql_node("octocat/b", 20, true, false),
                                        null,
                                        graphql_node("octocat/c", 30, false, true),
                                        graphql_node("octocat/d", 40, false, false),
                                    ]
                                }
                            }
                        }))
                    })
                    .times(1);

                client
            };
            let fetcher = fetcher(
                client,
                MockPullRequestCounter::new(),
                Some(Credential::dummy()),
            );

            let repositories = fetcher.fetch_pinned_repositories("octocat", 6).await;

            assert_eq!(
                vec![
                    Repository {
                        description: Some("A repository".to_string()),
                        language: None,
                        pushed_at: Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
                        ..Repository::dummy("octocat/a", 10)
                    },
                    Repository {
                        description: Some("A repository".to_string()),
                        language: None,
                        pushed_at: Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
                        ..Repository::dummy("octocat/d", 40)
                    },
                ],
                repositories
            );
        }

        #[tokio::test]
        async fn fetch_degrades_to_empty_on_graphql_error() {
            let client = {
                let mut client = MockGitHubApiClient::new();
                client
                    .expect_post_graphql()
                    .returning(|_, _, _| Err(ApiError::GraphQl("Bad credentials".to_string()).into()))
                    .times(1);

                client
            };
            let fetcher = fetcher(
                client,
                MockPullRequestCounter::new(),
                Some(Credential::dummy()),
            );

            assert!(fetcher.fetch_pinned_repositories("octocat", 6).await.is_empty());
        }
    }

    mod contributed_repositories {
        use super::*;

        #[tokio::test]
        async fn fetch_without_credential_performs_no_network_call() {
            let fetcher = fetcher(
                MockGitHubApiClient::new(),
                MockPullRequestCounter::new(),
                None,
            );

            let repositories = fetcher
                .fetch_contributed_repositories("octocat", 100, 1000)
                .await;

            assert!(repositories.is_empty());
        }

        #[tokio::test]
        async fn fetch_filters_candidates_and_merges_pull_request_counts() {
            let client = {
                let mut client = MockGitHubApiClient::new();
                client
                    .expect_post_graphql()
                    .with(
                        eq(CONTRIBUTED_QUERY),
                        eq(json!({ "login": "octocat", "first": 100 })),
                        always(),
                    )
                    .returning(|_, _, _| {
                        Ok(contributed_data(vec![
                            graphql_node("rust-lang/rust", 100000, false, false),
                            graphql_node("someone/fork", 5000, true, false),
                            graphql_node("someone/archived", 5000, false, true),
                            graphql_node("someone/small", 999, false, false),
                            graphql_node("tokio-rs/tokio", 1000, false, false),
                        ]))
                    })
                    .times(1);

                client
            };
            let counter = {
                let mut counter = MockPullRequestCounter::new();
                counter
                    .expect_count_merged_pull_requests()
                    .with(
                        eq("octocat"),
                        eq(vec!["rust-lang/rust".to_string(), "tokio-rs/tokio".to_string()]),
                        always(),
                    )
                    .returning(|_, _, _| Ok(HashMap::from([("rust-lang/rust".to_string(), 3)])))
                    .times(1);

                counter
            };
            let fetcher = fetcher(client, counter, Some(Credential::dummy()));

            let repositories = fetcher
                .fetch_contributed_repositories("octocat", 100, 1000)
                .await;

            assert_eq!(
                vec![("rust-lang/rust", 3), ("tokio-rs/tokio", 0)],
                repositories
                    .iter()
                    .map(|r| (r.full_name(), r.pr_count))
                    .collect::<Vec<_>>()
            );
            assert!(
                repositories
                    .iter()
                    .all(|r| r.repository.stargazers_count >= 1000)
            );
        }

        #[tokio::test]
        async fn fetch_retries_once_with_fallback_query() {
            let client = {
                let mut client = MockGitHubApiClient::new();
                client
                    .expect_post_graphql()
                    .with(eq(CONTRIBUTED_QUERY), always(), always())
                    .returning(|_, _, _| {
                        Err(ApiError::GraphQl("Field 'contributionTypes' doesn't exist".to_string()).into())
                    })
                    .times(1);
                client
                    .expect_post_graphql()
                    .with(eq(CONTRIBUTED_FALLBACK_QUERY), always(), always())
                    .returning(|_, _, _| {
                        Ok(contributed_data(vec![graphql_node(
                            "rust-lang/rust",
                            100000,
                            false,
                            false,
                        )]))
                    })
                    .times(1);

                client
            };
            let counter = {
                let mut counter = MockPullRequestCounter::new();
                counter
                    .expect_count_merged_pull_requests()
                    .returning(|_, _, _| Ok(HashMap::from([("rust-lang/rust".to_string(), 1)])))
                    .times(1);

                counter
            };
            let fetcher = fetcher(client, counter, Some(Credential::dummy()));

            let repositories = fetcher
                .fetch_contributed_repositories("octocat", 100, 1000)
                .await;

            assert_eq!(1, repositories.len());
            assert_eq!(1, repositories[0].pr_count);
        }

        #[tokio::test]
        async fn fetch_degrades_to_empty_when_both_queries_fail() {
            let client = {
                let mut client = MockGitHubApiClient::new();
                client
                    .expect_post_graphql()
                    .returning(|_, _, _| Err(anyhow!("Error fetching data")))
                    .times(2);

                client
            };
            let fetcher = fetcher(
                client,
                MockPullRequestCounter::new(),
                Some(Credential::dummy()),
            );

            let repositories = fetcher
                .fetch_contributed_repositories("octocat", 100, 1000)
                .await;

            assert!(repositories.is_empty());
        }

        #[tokio::test]
        async fn fetch_skips_pull_request_counts_without_candidates() {
            let client = {
                let mut client = MockGitHubApiClient::new();
                client
                    .expect_post_graphql()
                    .returning(|_, _, _| {
                        Ok(contributed_data(vec![graphql_node(
                            "someone/small",
                            10,
                            false,
                            false,
                        )]))
                    })
                    .times(1);

                client
            };
            let fetcher = fetcher(
                client,
                MockPullRequestCounter::new(),
                Some(Credential::dummy()),
            );

            let repositories = fetcher
                .fetch_contributed_repositories("octocat", 100, 1000)
                .await;

            assert!(repositories.is_empty());
        }

        #[tokio::test]
        async fn fetch_counts_zero_when_pull_request_counter_fails() {
            let client = {
                let mut client = MockGitHubApiClient::new();
                client
                    .expect_post_graphql()
                    .returning(|_, _, _| {
                        Ok(contributed_data(vec![
                            graphql_node("rust-lang/rust", 100000, false, false),
                            graphql_node("tokio-rs/tokio", 30000, false, false),
                        ]))
                    })
                    .times(1);

                client
            };
            let counter = {
                let mut counter = MockPullRequestCounter::new();
                counter
                    .expect_count_merged_pull_requests()
                    .returning(|_, _, _| Err(anyhow!("Error counting pull requests")))
                    .times(1);

                counter
            };
            let fetcher = fetcher(client, counter, Some(Credential::dummy()));

            let repositories = fetcher
                .fetch_contributed_repositories("octocat", 100, 1000)
                .await;

            assert_eq!(2, repositories.len());
            assert!(repositories.iter().all(|r| r.pr_count == 0));
        }
    }
}
