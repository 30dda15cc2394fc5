use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use log::{info, warn};

use github_contributions::{
    AggregationConfig, BatchedPullRequestCounter, ConcurrentAggregator, Credential,
    CredentialResolver, GITHUB_API_URL, GitHubFetcher, HttpApiClient, JsonFilePersister,
    RequestCaches, SnapshotAggregator, SnapshotPersister, StdResult,
};

/// Command line arguments for the GitHub contributions snapshot
#[derive(Parser)]
#[command(version)]
struct Args {
    /// GitHub login of the user
    #[arg(short, long, env = "GITHUB_USERNAME")]
    username: String,

    /// Minimum stars of a contributed repository
    #[arg(long, env = "CONTRIBUTED_MIN_STARS", default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    contributed_min_stars: u32,

    /// Number of own repositories fetched
    #[arg(long, env = "RECENT_LIMIT", default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    recent_limit: u32,

    /// Number of own repositories displayed
    #[arg(long, env = "RECENT_DISPLAY_LIMIT", default_value_t = 6, value_parser = clap::value_parser!(u32).range(1..))]
    recent_display_limit: u32,

    /// Number of contributed repositories requested from the API
    #[arg(long, env = "CONTRIBUTED_LIMIT", default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    contributed_limit: u32,

    /// Number of pinned repositories fetched
    #[arg(long, env = "PINNED_LIMIT", default_value_t = 6, value_parser = clap::value_parser!(u32).range(1..))]
    pinned_limit: u32,

    /// Path of the JSON snapshot
    #[arg(short, long, env = "GITHUB_SNAPSHOT_PATH", default_value = "src/data/github.json")]
    output: PathBuf,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_URL)]
    api_url: String,

    /// User agent identifying the site
    #[arg(long, env = "GITHUB_USER_AGENT", default_value = "github-contributions")]
    user_agent: String,

    /// GitHub token, overriding GITHUB_TOKEN, GH_TOKEN and GITHUB_API_TOKEN
    #[arg(long)]
    token: Option<String>,
}

impl Args {
    fn aggregation_config(&self) -> AggregationConfig {
        AggregationConfig {
            username: self.username.clone(),
            recent_limit: self.recent_limit,
            recent_display_limit: self.recent_display_limit,
            pinned_limit: self.pinned_limit,
            contributed_limit: self.contributed_limit,
            contributed_min_stars: self.contributed_min_stars,
        }
    }

    fn credential(&self) -> Option<Credential> {
        self.token
            .as_deref()
            .and_then(Credential::new)
            .or_else(CredentialResolver::resolve)
    }
}

#[tokio::main]
async fn main() -> StdResult<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let credential = args.credential();
    if credential.is_none() {
        warn!("No GitHub token found, pinned and contributed repositories are skipped");
    }
    let aggregator = build_aggregator(&args, credential)?;
    let persister = JsonFilePersister::new(&args.output);

    let snapshot = aggregator.aggregate(&args.aggregation_config()).await?;
    persister.persist(&snapshot).await?;
    info!("Wrote {}", persister.path().display());
    info!("{snapshot}");
    if snapshot.contributed.is_empty() {
        warn!("Contributed is empty: set GITHUB_TOKEN in .env to fetch contributed repositories");
    }

    Ok(())
}

fn build_aggregator(
    args: &Args,
    credential: Option<Credential>,
) -> StdResult<Arc<dyn SnapshotAggregator>> {
    let client = Arc::new(HttpApiClient::try_new(&args.api_url, &args.user_agent)?);
    let counter = Arc::new(BatchedPullRequestCounter::new(client.clone()));
    let fetcher = Arc::new(GitHubFetcher::new(
        client,
        counter,
        credential,
        Arc::new(RequestCaches::default()),
    ));

    Ok(Arc::new(ConcurrentAggregator::new(fetcher)))
}
