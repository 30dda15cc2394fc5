use std::{collections::HashSet, sync::Arc};

use chrono::Utc;
use log::{debug, info};

use crate::{
    AggregationConfig, ContributedRepository, Repository, RepositoryFetcher, Snapshot,
    SnapshotAggregator, StdResult, dedup_by_key,
};

/// Keeps the contributed repositories worth displaying next to the `recent` ones, best first.
///
/// Drops repositories already displayed as recent, below `min_stars`, or without merged pull requests.
pub fn select_contributed(
    recent: &[Repository],
    contributed: Vec<ContributedRepository>,
    min_stars: u32,
) -> Vec<ContributedRepository> {
    let displayed: HashSet<&str> = recent.iter().map(|r| r.full_name.as_str()).collect();
    let mut contributed: Vec<ContributedRepository> = contributed
        .into_iter()
        .filter(|r| !displayed.contains(r.full_name()))
        .filter(|r| r.repository.stargazers_count >= min_stars)
        .filter(|r| r.pr_count > 0)
        .collect();
    contributed.sort_by(ContributedRepository::cmp_by_contribution);

    dedup_by_key(contributed, |r| r.full_name())
}

/// An aggregator running the user and repository fetchers concurrently.
pub struct ConcurrentAggregator {
    fetcher: Arc<dyn RepositoryFetcher>,
}

impl ConcurrentAggregator {
    /// Creates a new `ConcurrentAggregator` instance with the given fetcher.
    pub fn new(fetcher: Arc<dyn RepositoryFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait::async_trait]
impl SnapshotAggregator for ConcurrentAggregator {
    async fn aggregate(&self, config: &AggregationConfig) -> StdResult<Snapshot> {
        config.validate()?;
        let username = config.username.trim();
        info!("Aggregating GitHub repositories of {username}");

        let (user, own_repositories, pinned, contributed) = tokio::join!(
            self.fetcher.fetch_user(username),
            self.fetcher
                .fetch_own_repositories(username, config.recent_limit),
            self.fetcher
                .fetch_pinned_repositories(username, config.pinned_limit),
            self.fetcher.fetch_contributed_repositories(
                username,
                config.contributed_limit,
                config.contributed_min_stars
            ),
        );
        debug!(
            "Fetched own={}, pinned={}, contributed={} repositories",
            own_repositories.len(),
            pinned.len(),
            contributed.len()
        );

        let recent: Vec<Repository> = own_repositories
            .into_iter()
            .take(config.effective_display_limit() as usize)
            .collect();
        let contributed = select_contributed(&recent, contributed, config.contributed_min_stars);

        Ok(Snapshot {
            generated_at: Utc::now(),
            user,
            recent,
            pinned,
            contributed,
            contributed_min_stars: config.contributed_min_stars,
        })
    }
}
