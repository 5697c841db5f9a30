use db::schema::SchemaError;
use sea_orm::DbErr;
use thiserror::Error;

/// Failures a collection operation can report to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no document with id {id}")]
    NotFound { id: String },

    #[error("invalid document: {0}")]
    InvalidInput(#[from] SchemaError),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl ServiceError {
    pub fn not_found(id: impl Into<String>) -> Self {
        ServiceError::NotFound { id: id.into() }
    }
}
