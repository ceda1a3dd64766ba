use async_trait::async_trait;
use sqlx::{query, query_as, query_scalar, MySqlPool};
use uuid::Uuid;

use crate::repository::errors::RepositoryError;
use crate::repository::models::{NewUserRow, UserRow};
use crate::repository::traits::UserRepositoryTrait;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pub pool: MySqlPool,
}

impl UserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create_user(&self, user: &NewUserRow) -> Result<UserRow, RepositoryError> {
        let id = Uuid::new_v4();

        query(
            r#"
            INSERT INTO users (id, email, password_hash, nationality, date_of_birth, role)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.nationality)
        .bind(user.date_of_birth)
        .bind(&user.role)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        let row = query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, nationality, date_of_birth, role
            FROM users WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>, RepositoryError> {
        let row = query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, nationality, date_of_birth, role
            FROM users WHERE LOWER(email) = LOWER(?)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row)
    }

    async fn get_registered_emails(&self) -> Result<Vec<String>, RepositoryError> {
        let emails = query_scalar::<_, String>("SELECT email FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(emails)
    }
}
