use std::{collections::HashMap, future::Future, sync::Arc};

use log::debug;
use tokio::sync::{Mutex, OnceCell};

use crate::{ContributedRepository, Repository, User};

/// A process-scoped memoization of request results with single-flight semantics.
///
/// Concurrent callers with the same key share one in-flight computation. Entries are never evicted.
pub struct RequestCache<T> {
    entries: Mutex<HashMap<String, Arc<OnceCell<T>>>>,
}

impl<T: Clone> RequestCache<T> {
    /// Creates a new empty `RequestCache`.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the result cached for `key`, running `producer` only if no entry exists yet.
    pub async fn get_or_fetch<F, Fut>(&self, key: String, producer: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let cell = {
            let mut entries = self.entries.lock().await;
            if entries.contains_key(&key) {
                debug!("Request cache hit: {key}");
            }
            Arc::clone(entries.entry(key).or_default())
        };

        cell.get_or_init(producer).await.clone()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl<T: Clone> Default for RequestCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The request caches of one aggregation run, one per request kind.
#[derive(Default)]
pub struct RequestCaches {
    /// The user profiles.
    pub users: RequestCache<Option<User>>,
    /// The own repositories.
    pub own_repositories: RequestCache<Vec<Repository>>,
    /// The pinned repositories.
    pub pinned_repositories: RequestCache<Vec<Repository>>,
    /// The contributed repositories.
    pub contributed_repositories: RequestCache<Vec<ContributedRepository>>,
}
