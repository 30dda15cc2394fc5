use crate::{ContributedRepository, Repository, User};

/// A trait for fetching a user's profile and repositories.
///
/// Implementations are fail-soft: every failure resolves to an empty result.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Sync + Send {
    /// Fetches the user profile.
    async fn fetch_user(&self, username: &str) -> Option<User>;

    /// Fetches the user's own repositories, most recently pushed first.
    async fn fetch_own_repositories(&self, username: &str, limit: u32) -> Vec<Repository>;

    /// Fetches the user's pinned repositories.
    async fn fetch_pinned_repositories(&self, username: &str, limit: u32) -> Vec<Repository>;

    /// Fetches the external repositories the user contributed to, with their merged pull requests counts.
    async fn fetch_contributed_repositories(
        &self,
        username: &str,
        limit: u32,
        min_stars: u32,
    ) -> Vec<ContributedRepository>;
}
