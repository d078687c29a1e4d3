use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Resource not found")]
    NotFound,

    #[error("Quantity must be a positive number")]
    InvalidQuantity,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal server error")]
    InternalServerError,
}
