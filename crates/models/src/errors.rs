use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("duplicate key: {0}")]
    Duplicate(String),
    #[error("missing reference: {0}")]
    MissingReference(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// Replace the engine's unique-violation text with the offending key.
    pub fn keyed(self, what: &str, value: &str) -> Self {
        match self {
            ModelError::Duplicate(_) => ModelError::Duplicate(format!("{what} '{value}' already exists")),
            other => other,
        }
    }
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => return ModelError::Duplicate(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return ModelError::MissingReference(msg),
            _ => {}
        }
        match e {
            // update matched zero rows: the record was deleted underneath us
            DbErr::RecordNotUpdated => ModelError::MissingReference("record vanished before update".into()),
            other => ModelError::Db(other.to_string()),
        }
    }
}

pub(crate) fn require(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}

/// Site-relative urls: leading slash, no whitespace.
pub(crate) fn require_path(field: &str, value: &str) -> Result<(), ModelError> {
    if !value.starts_with('/') {
        return Err(ModelError::Validation(format!("{field} must start with '/'")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ModelError::Validation(format!("{field} must not contain whitespace")));
    }
    Ok(())
}
