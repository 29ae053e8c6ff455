//! Service layer orchestrating repositories on behalf of the HTTP routes.

use thiserror::Error;

use crate::query::ValidationError;
use crate::repository::errors::RepositoryError;

pub mod customers;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller supplied unusable input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backing store failed or returned corrupt data.
    #[error("repository failure: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
