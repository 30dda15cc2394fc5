mod aggregator;
mod client;
mod counter;
mod fetcher;
mod persister;

pub use aggregator::*;
pub use client::*;
pub use counter::*;
pub use fetcher::*;
pub use persister::*;
