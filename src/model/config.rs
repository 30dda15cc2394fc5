use anyhow::anyhow;

use super::StdResult;

/// The parameters of one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationConfig {
    /// The login of the user.
    pub username: String,

    /// The number of own repositories fetched.
    pub recent_limit: u32,

    /// The number of own repositories displayed, at most `recent_limit`.
    pub recent_display_limit: u32,

    /// The number of pinned repositories fetched.
    pub pinned_limit: u32,

    /// The number of contributed repositories requested from the API.
    pub contributed_limit: u32,

    /// The minimum number of stars of a contributed repository.
    pub contributed_min_stars: u32,
}

impl AggregationConfig {
    /// Checks the configuration, failing on a missing username.
    pub fn validate(&self) -> StdResult<()> {
        if self.username.trim().is_empty() {
            return Err(anyhow!("Missing GitHub username"));
        }

        Ok(())
    }

    /// The number of recent repositories displayed, never more than fetched.
    pub fn effective_display_limit(&self) -> u32 {
        self.recent_display_limit.min(self.recent_limit)
    }

    /// Creates a dummy `AggregationConfig` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self {
            username: "octocat".to_string(),
            recent_limit: 8,
            recent_display_limit: 6,
            pinned_limit: 6,
            contributed_limit: 100,
            contributed_min_stars: 1000,
        }
    }
}
