mod aggregator_concurrent;
mod client_http;
mod counter_pull_request;
mod fetcher_github;
mod persister_json;
mod request_cache;

pub use aggregator_concurrent::*;
pub use client_http::*;
pub use counter_pull_request::*;
pub use fetcher_github::*;
pub use persister_json::*;
pub use request_cache::*;
