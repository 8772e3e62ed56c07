use crate::domain::{
    error::{CreateUserError, RepositoryError},
    models::user::{NewUser, User},
    repositories::user_repository::UserRepository,
    validation::Validator,
};

pub struct CreateUserUsecase<R: UserRepository> {
    repository: R,
    validator: Validator,
}

impl<R: UserRepository> CreateUserUsecase<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            validator: Validator::new(),
        }
    }

    /// Validates the candidate and, only if every rule passes, hands it to
    /// the store. A rejected candidate leaves no state behind.
    pub async fn create_user(&self, candidate: NewUser) -> Result<User, CreateUserError>
    where
        R: Send + Sync,
    {
        self.validator
            .validate(&candidate)
            .map_err(CreateUserError::Invalid)?;

        match self.repository.save(&candidate).await {
            Ok(user) => Ok(user),
            Err(RepositoryError::UniqueViolation) => Err(CreateUserError::Duplicate),
            Err(err) => Err(CreateUserError::Repository(err)),
        }
    }
}
