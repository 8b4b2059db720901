use rollcall_core::error::FieldError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RosterError {
    #[error("a student with id {id} already exists")]
    DuplicateId {
        id: i64,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("the student store lock is poisoned")]
    LockPoisoned,

    #[error("student {id} not found")]
    NotFound {
        id: i64,
    },
}

/// Domain failures are shown to the caller; a poisoned lock is not their
/// problem and is reported as internal.
impl From<RosterError> for FieldError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::LockPoisoned => FieldError::internal(err.to_string()),
            RosterError::DuplicateId { .. }
            | RosterError::InvalidArgument(_)
            | RosterError::NotFound { .. } => FieldError::resolver(err.to_string()),
        }
    }
}
