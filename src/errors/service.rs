use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,
}
