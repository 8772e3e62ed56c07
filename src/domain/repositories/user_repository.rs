use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::user::{NewUser, User},
};

#[async_trait]
pub trait UserRepository {
    /// Persists a validated candidate. The store enforces uniqueness of
    /// email and userName atomically with the insert and reports either
    /// collision as `RepositoryError::UniqueViolation`.
    async fn save(&self, candidate: &NewUser) -> Result<User, RepositoryError>;
}
