use thiserror::Error;

/// Failure reported by the GitHub REST API or the transport underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub code: String,
    pub message: String,
    // None when the request never produced an HTTP response.
    pub status: Option<u16>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Team '{team}' not found in org '{org}'")]
    NotFound { team: String, org: String },

    #[error("GitHub API error: {0}")]
    Api(#[from] ApiError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
