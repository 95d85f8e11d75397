use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.title_empty")]
    TitleEmpty,
    #[error("product.not_found: {0}")]
    NotFound(String),
    #[error("product.duplicated: {0}")]
    Duplicated(String),
    #[error("repository.persistence")]
    Repository(RepositoryError),
}

/// Duplicate-key detail is safe to show to the caller; every other
/// repository failure stays opaque behind `Repository`.
impl From<RepositoryError> for ProductError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicated(detail) => ProductError::Duplicated(detail),
            other => ProductError::Repository(other),
        }
    }
}
