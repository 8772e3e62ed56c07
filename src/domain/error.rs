use thiserror::Error;

use crate::domain::validation::Violation;

/// Outcome of a failed creation attempt. The three kinds are mutually
/// exclusive: decoding failures never reach the usecase, validation runs
/// before the store is touched, and a conflict is only reachable once
/// validation has passed.
#[derive(Debug, Error)]
pub enum CreateUserError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<Violation>),

    #[error("unique index or primary key violation")]
    Duplicate,

    #[error(transparent)]
    Repository(RepositoryError),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A unique constraint rejected the insert. The store does not say
    /// which column collided.
    #[error("unique constraint violated")]
    UniqueViolation,

    #[error("database error: {0}")]
    Database(String),
}
