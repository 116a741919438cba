use thiserror::Error;

/// Failure to read a configuration document. Always recovered by falling back to defaults.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("config fetch failed: {0}")]
    Transport(String),

    #[error("config decode failed: {0}")]
    Decode(String),
}

/// Failure of the live query against the hosting service.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("remote query transport failed: {0}")]
    Transport(String),

    #[error("remote query rejected: {0}")]
    Api(String),

    #[error("repository not found: {owner}/{repo}")]
    MissingRepository { owner: String, repo: String },
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error(transparent)]
    Query(#[from] QueryError),
}
