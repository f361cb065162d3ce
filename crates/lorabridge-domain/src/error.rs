use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors for uplink processing
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid uplink envelope: {0}")]
    InvalidUplink(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] anyhow::Error),
}
