//! Aggregates a GitHub user's own repositories and the external repositories they contributed to
//! into a snapshot consumed by a static site build.
//!
//! Every GitHub API is treated as optional: a missing credential or a failing endpoint degrades
//! the snapshot to empty lists instead of failing the build.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
