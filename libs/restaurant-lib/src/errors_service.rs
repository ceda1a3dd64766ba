use crate::repository::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error("resource not found")]
    NotFound,

    #[error("forbidden")]
    Forbidden,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email already exists")]
    EmailAlreadyExists,

    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("invalid UUID in database: {0}")]
    InvalidUuid(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::EmailAlreadyExists => ServiceError::EmailAlreadyExists,
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Sqlx(e) => ServiceError::Internal(e.into()),
        }
    }
}
