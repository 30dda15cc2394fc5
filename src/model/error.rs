use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// GitHub API transport error
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Non-success HTTP status from the REST or GraphQL endpoint
    #[error("GitHub API {status} for {url}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },
    /// Error list returned in an otherwise successful GraphQL response
    #[error("GitHub GraphQL errors: {0}")]
    GraphQl(String),
    /// GraphQL response without data nor errors
    #[error("GitHub GraphQL empty data")]
    EmptyData,
}
