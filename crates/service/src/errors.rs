use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("internal error: {0}")]
    Internal(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} is not found", entity)) }

    pub fn unauthorized() -> Self { Self::Unauthorized("Unauthorized".into()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Conflict(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Unauthorized(_) => 1004,
            ServiceError::Internal(_) => 1101,
            ServiceError::Db(_) => 1200,
            ServiceError::Model(models::errors::ModelError::Validation(_)) => 1001,
            ServiceError::Model(models::errors::ModelError::Duplicate(_)) => 1002,
            ServiceError::Model(models::errors::ModelError::Db(_)) => 1200,
        }
    }
}
