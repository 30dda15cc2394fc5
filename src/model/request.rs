use std::fmt::Display;

use super::Credential;

/// A request to the GitHub API, identified by its parameters.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Request {
    /// A request to fetch a user profile.
    User(UserRequest),

    /// A request to fetch the repositories owned by a user.
    OwnRepositories(RepositoriesRequest),

    /// A request to fetch the repositories pinned by a user.
    PinnedRepositories(RepositoriesRequest),

    /// A request to fetch the external repositories a user contributed to.
    ContributedRepositories(ContributedRepositoriesRequest),
}

impl Request {
    /// Derives the cache key of the request for the given credential context.
    ///
    /// Results fetched with different credentials never share a key.
    pub fn cache_key(&self, credential: Option<&Credential>) -> String {
        let credential = credential
            .map(|credential| credential.fingerprint())
            .unwrap_or_else(|| "anonymous".to_string());

        format!("{self}::{credential}")
    }
}

impl Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Request::User(request) => write!(f, "User: {request}"),
            Request::OwnRepositories(request) => write!(f, "OwnRepositories: {request}"),
            Request::PinnedRepositories(request) => write!(f, "PinnedRepositories: {request}"),
            Request::ContributedRepositories(request) => {
                write!(f, "ContributedRepositories: {request}")
            }
        }
    }
}

/// A user profile request
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct UserRequest {
    /// The login of the user.
    pub(crate) username: String,
}

impl UserRequest {
    /// Creates a new `UserRequest` for the given login.
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
        }
    }
}

impl Display for UserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "username={}", self.username)
    }
}

/// A bounded repository list request
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct RepositoriesRequest {
    /// The login of the user.
    pub(crate) username: String,

    /// The maximum number of repositories to return.
    pub(crate) limit: u32,
}

impl RepositoriesRequest {
    /// Creates a new `RepositoriesRequest` with the given login and limit.
    pub fn new(username: &str, limit: u32) -> Self {
        Self {
            username: username.to_string(),
            limit,
        }
    }
}

impl Display for RepositoriesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "username={}, limit={}", self.username, self.limit)
    }
}

/// A contributed repositories request
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct ContributedRepositoriesRequest {
    /// The login of the user.
    pub(crate) username: String,

    /// The maximum number of repositories requested from the API.
    pub(crate) limit: u32,

    /// The minimum number of stars a repository must have.
    pub(crate) min_stars: u32,
}

impl ContributedRepositoriesRequest {
    /// Creates a new `ContributedRepositoriesRequest`.
    pub fn new(username: &str, limit: u32, min_stars: u32) -> Self {
        Self {
            username: username.to_string(),
            limit,
            min_stars,
        }
    }
}

impl Display for ContributedRepositoriesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "username={}, limit={}, min_stars={}",
            self.username, self.limit, self.min_stars
        )
    }
}
