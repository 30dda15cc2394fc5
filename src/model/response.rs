#![allow(non_snake_case)]

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Repository, User};

/// A user profile as returned by the REST API.
#[derive(Deserialize, Debug)]
pub struct RestUser {
    login: String,
    name: Option<String>,
    html_url: String,
    avatar_url: String,
    bio: Option<String>,
    blog: Option<String>,
    company: Option<String>,
    location: Option<String>,
    twitter_username: Option<String>,
    #[serde(default)]
    public_repos: u32,
    #[serde(default)]
    followers: u32,
    #[serde(default)]
    following: u32,
    created_at: DateTime<Utc>,
}

impl From<RestUser> for User {
    fn from(user: RestUser) -> Self {
        Self {
            login: user.login,
            name: user.name,
            html_url: user.html_url,
            avatar_url: user.avatar_url,
            bio: user.bio,
            blog: user.blog,
            company: user.company,
            location: user.location,
            twitter_username: user.twitter_username,
            public_repos: user.public_repos,
            followers: user.followers,
            following: user.following,
            created_at: user.created_at,
        }
    }
}

/// A repository as returned by the REST API.
#[derive(Deserialize, Debug)]
pub struct RestRepository {
    name: String,
    full_name: String,
    html_url: String,
    description: Option<String>,
    #[serde(default)]
    fork: bool,
    #[serde(default)]
    archived: bool,
    #[serde(default)]
    stargazers_count: u32,
    language: Option<String>,
    pushed_at: Option<DateTime<Utc>>,
}

impl From<RestRepository> for Repository {
    fn from(repository: RestRepository) -> Self {
        Self {
            name: repository.name,
            full_name: repository.full_name,
            html_url: repository.html_url,
            description: repository.description,
            fork: repository.fork,
            archived: repository.archived,
            stargazers_count: repository.stargazers_count,
            language: repository.language,
            pushed_at: repository.pushed_at,
        }
    }
}

/// A repository node as returned by the GraphQL API.
#[derive(Deserialize, Debug)]
pub struct RepositoryNode {
    name: String,
    nameWithOwner: String,
    url: String,
    description: Option<String>,
    isFork: bool,
    isArchived: bool,
    stargazerCount: u32,
    pushedAt: Option<DateTime<Utc>>,
    primaryLanguage: Option<Language>,
}

#[derive(Deserialize, Debug)]
struct Language {
    name: String,
}

impl From<RepositoryNode> for Repository {
    fn from(node: RepositoryNode) -> Self {
        Self {
            name: node.name,
            full_name: node.nameWithOwner,
            html_url: node.url,
            description: node.description,
            fork: node.isFork,
            archived: node.isArchived,
            stargazers_count: node.stargazerCount,
            language: node.primaryLanguage.map(|language| language.name),
            pushed_at: node.pushedAt,
        }
    }
}

/// A GraphQL connection exposing its nodes.
#[derive(Deserialize, Debug)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct NodeList<T> {
    #[serde(default)]
    nodes: Vec<Option<T>>,
}

impl<T> NodeList<T> {
    /// Consumes the list, dropping null nodes.
    pub fn into_nodes(self) -> Vec<T> {
        self.nodes.into_iter().flatten().collect()
    }
}

/// The data of the pinned repositories query.
#[derive(Deserialize, Debug)]
pub struct PinnedItemsData {
    user: Option<PinnedItemsUser>,
}

#[derive(Deserialize, Debug)]
struct PinnedItemsUser {
    pinnedItems: NodeList<RepositoryNode>,
}

impl PinnedItemsData {
    /// Retrieves the pinned repository nodes, empty if the user is unknown.
    pub fn into_nodes(self) -> Vec<RepositoryNode> {
        self.user
            .map(|user| user.pinnedItems.into_nodes())
            .unwrap_or_default()
    }
}

/// The data of the contributed repositories query.
#[derive(Deserialize, Debug)]
pub struct ContributedData {
    user: Option<ContributedUser>,
}

#[derive(Deserialize, Debug)]
struct ContributedUser {
    repositoriesContributedTo: NodeList<RepositoryNode>,
}

impl ContributedData {
    /// Retrieves the contributed repository nodes, empty if the user is unknown.
    pub fn into_nodes(self) -> Vec<RepositoryNode> {
        self.user
            .map(|user| user.repositoriesContributedTo.into_nodes())
            .unwrap_or_default()
    }
}

/// The result of an aliased `search` field.
#[derive(Deserialize, Debug)]
pub struct SearchCount {
    /// The number of matching issues or pull requests.
    pub issueCount: u32,
}

/// The data of a batched search query, keyed by alias.
pub type SearchCountsData = HashMap<String, Option<SearchCount>>;

/// A GraphQL response envelope.
#[derive(Deserialize, Debug)]
pub struct GraphQlEnvelope {
    /// The data payload.
    pub data: Option<serde_json::Value>,
    /// The errors reported by the server.
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorMessage>>,
}

/// A GraphQL error entry.
#[derive(Deserialize, Debug)]
pub struct GraphQlErrorMessage {
    /// The error message.
    pub message: String,
}
