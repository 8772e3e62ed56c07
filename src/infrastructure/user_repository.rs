use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema, SqlErr,
};

use crate::{
    domain::{
        error::RepositoryError,
        models::user::{NewUser, User},
        repositories::user_repository::UserRepository,
    },
    infrastructure::entity::users,
};

/// Creates the users table (with its unique indexes on email and user_name)
/// if it does not exist yet. The default store is an in-memory SQLite
/// database, so the schema has to be set up on every start.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut statement = schema.create_table_from_entity(users::Entity);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;
    Ok(())
}

#[derive(Clone)]
pub struct SqlUserRepository {
    db: DatabaseConnection,
}

impl SqlUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn save(&self, candidate: &NewUser) -> Result<User, RepositoryError> {
        let model = users::ActiveModel {
            id: NotSet,
            email: Set(candidate.email.clone()),
            user_name: Set(candidate.user_name.clone()),
            first_name: Set(candidate.first_name.clone()),
            last_name: Set(candidate.last_name.clone()),
        };

        let inserted = users::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => RepositoryError::UniqueViolation,
                _ => RepositoryError::Database(err.to_string()),
            })?;

        Ok(User::from_candidate(inserted.last_insert_id, candidate))
    }
}
