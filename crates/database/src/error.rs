use sea_orm::DbErr;
use thiserror::Error;

/// Domain errors produced by the service layer
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Db(#[from] DbErr),

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Duplicate(String),

    #[error("a course with code {0} already exists")]
    DuplicateCourse(String),

    #[error("course {0} is used by at least one curriculum")]
    CourseInUse(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("blacklist is already attached to this curriculum")]
    AlreadyAttached,

    #[error("blacklist is not attached to this curriculum")]
    NotAttached,
}

impl ServiceError {
    pub fn not_found(entity: &'static str) -> Self {
        ServiceError::NotFound { entity }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
