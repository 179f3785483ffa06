use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

/// Failure taxonomy surfaced to callers of the query and consistency services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("dependency missing: {0}")]
    DependencyMissing(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Prefix the message with the step of a composite write that failed.
    pub fn at_step(self, step: &str) -> Self {
        let tag = |msg: String| format!("{step}: {msg}");
        match self {
            Self::Validation(m) => Self::Validation(tag(m)),
            Self::NotFound(m) => Self::NotFound(tag(m)),
            Self::DuplicateKey(m) => Self::DuplicateKey(tag(m)),
            Self::DependencyMissing(m) => Self::DependencyMissing(tag(m)),
            Self::Storage(m) => Self::Storage(tag(m)),
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            Self::Validation(_) => 2001,
            Self::NotFound(_) => 2002,
            Self::DuplicateKey(_) => 2003,
            Self::DependencyMissing(_) => 2004,
            Self::Storage(_) => 2100,
        }
    }

    /// Only storage failures are worth retrying; the whole operation is rerun.
    pub fn is_retryable(&self) -> bool { matches!(self, Self::Storage(_)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => Self::Validation(m),
            ModelError::Duplicate(m) => Self::DuplicateKey(m),
            ModelError::MissingReference(m) => Self::DependencyMissing(m),
            ModelError::Db(m) => Self::Storage(m),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { ModelError::from(e).into() }
}

/// `map_err` adapter tagging a model failure with its step name.
pub(crate) fn step(name: &'static str) -> impl FnOnce(ModelError) -> ServiceError {
    move |e| ServiceError::from(e).at_step(name)
}
