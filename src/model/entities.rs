use std::{cmp::Ordering, collections::HashSet, fmt::Display};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub user profile.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// The login of the user.
    pub login: String,
    /// The display name.
    pub name: Option<String>,
    /// The profile URL.
    pub html_url: String,
    /// The avatar URL.
    pub avatar_url: String,
    /// The biography.
    pub bio: Option<String>,
    /// The blog URL.
    pub blog: Option<String>,
    /// The company.
    pub company: Option<String>,
    /// The location.
    pub location: Option<String>,
    /// The social handle.
    pub twitter_username: Option<String>,
    /// The number of public repositories.
    pub public_repos: u32,
    /// The number of followers.
    pub followers: u32,
    /// The number of followed users.
    pub following: u32,
    /// The account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User: {}, Repositories: {}, Followers: {}",
            self.login, self.public_repos, self.followers
        )
    }
}

/// Metadata of a GitHub repository, identical whether sourced from REST or GraphQL.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// The name of the repository.
    pub name: String,
    /// The `owner/name` of the repository.
    pub full_name: String,
    /// The web URL.
    pub html_url: String,
    /// The description.
    pub description: Option<String>,
    /// Whether the repository is a fork.
    pub fork: bool,
    /// Whether the repository is archived.
    pub archived: bool,
    /// The number of stars.
    pub stargazers_count: u32,
    /// The primary language.
    pub language: Option<String>,
    /// The last push timestamp.
    pub pushed_at: Option<DateTime<Utc>>,
}

impl Repository {
    /// Whether the repository is neither a fork nor archived.
    pub fn is_active_source(&self) -> bool {
        !self.fork && !self.archived
    }

    /// Orders repositories by most recent push first, repositories never pushed last.
    pub fn cmp_by_push_desc(&self, other: &Self) -> Ordering {
        match (&self.pushed_at, &other.pushed_at) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Creates a dummy `Repository` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(full_name: &str, stargazers_count: u32) -> Self {
        let name = full_name.rsplit('/').next().unwrap_or(full_name);
        Self {
            name: name.to_string(),
            full_name: full_name.to_string(),
            html_url: format!("https://github.com/{full_name}"),
            description: None,
            fork: false,
            archived: false,
            stargazers_count,
            language: Some("Rust".to_string()),
            pushed_at: None,
        }
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repository: {}, Stars: {}",
            self.full_name, self.stargazers_count
        )
    }
}

/// A repository the user contributed to, with the merged pull requests they authored there.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContributedRepository {
    /// The repository.
    #[serde(flatten)]
    pub repository: Repository,
    /// The number of merged pull requests authored by the user.
    pub pr_count: u32,
}

impl ContributedRepository {
    /// Creates a new `ContributedRepository` instance.
    pub fn new(repository: Repository, pr_count: u32) -> Self {
        Self {
            repository,
            pr_count,
        }
    }

    /// Retrieves the `owner/name` of the repository.
    pub fn full_name(&self) -> &str {
        &self.repository.full_name
    }

    /// Orders by pull requests descending, then stars descending, then full name ascending.
    pub fn cmp_by_contribution(&self, other: &Self) -> Ordering {
        other
            .pr_count
            .cmp(&self.pr_count)
            .then_with(|| {
                other
                    .repository
                    .stargazers_count
                    .cmp(&self.repository.stargazers_count)
            })
            .then_with(|| self.repository.full_name.cmp(&other.repository.full_name))
    }
}

impl Display for ContributedRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, Merged PRs: {}", self.repository, self.pr_count)
    }
}

/// Drops every entry whose key was already seen, keeping the first occurrence.
pub fn dedup_by_key<T, F>(items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item).to_string()))
        .collect()
}

/// The aggregated GitHub data persisted for the site build.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// The generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// The user profile, if it could be fetched.
    pub user: Option<User>,
    /// The most recently pushed own repositories.
    pub recent: Vec<Repository>,
    /// The pinned repositories.
    pub pinned: Vec<Repository>,
    /// The external repositories contributed to.
    pub contributed: Vec<ContributedRepository>,
    /// The star threshold applied to contributed repositories.
    pub contributed_min_stars: u32,
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "user={} recent={} pinned={} contributed={} (>={}★, merged PRs only)",
            self.user
                .as_ref()
                .map(|user| user.login.as_str())
                .unwrap_or("null"),
            self.recent.len(),
            self.pinned.len(),
            self.contributed.len(),
            self.contributed_min_stars
        )
    }
}
