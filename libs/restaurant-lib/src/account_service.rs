use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::auth::JwtAuth;
use crate::entities::User;
use crate::errors_service::ServiceError;
use crate::password::{hash_password, verify_password};
use crate::repository::models::{NewUserRow, UserRow};
use crate::repository::traits::UserRepositoryTrait;
use crate::repository::UserRepository;
use crate::validation::{validate_registration, RegisterRequest};

/// Role given to every newly registered account.
pub const DEFAULT_ROLE: &str = "User";

fn parse_uuid(s: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(s).map_err(|_| ServiceError::InvalidUuid(s.to_string()))
}

fn user_from_row(row: UserRow) -> Result<User, ServiceError> {
    Ok(User {
        id: parse_uuid(&row.id)?,
        email: row.email,
        nationality: row.nationality,
        date_of_birth: row.date_of_birth,
        roles: vec![row.role],
    })
}

#[derive(Clone)]
pub struct AccountService<U = UserRepository>
where
    U: UserRepositoryTrait,
{
    pub user_repo: Arc<U>,
    jwt: JwtAuth,
}

impl AccountService<UserRepository> {
    pub fn new(user_repo: UserRepository, jwt: JwtAuth) -> Self {
        Self::with_repo(Arc::new(user_repo), jwt)
    }
}

impl<U> AccountService<U>
where
    U: UserRepositoryTrait,
{
    pub fn with_repo(user_repo: Arc<U>, jwt: JwtAuth) -> Self {
        Self { user_repo, jwt }
    }

    /// Register a new account. The request is validated against the current
    /// set of registered emails; every violated rule is reported at once.
    pub async fn register(&self, request: RegisterRequest) -> Result<User, ServiceError> {
        let existing_emails: HashSet<String> = self
            .user_repo
            .get_registered_emails()
            .await
            .map_err(ServiceError::from)?
            .into_iter()
            .map(|e| e.to_lowercase())
            .collect();

        let validation = validate_registration(&request, &existing_emails);
        if !validation.is_ok() {
            return Err(ServiceError::Validation(validation.messages()));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::Internal(e.into()))?;

        let row = self
            .user_repo
            .create_user(&NewUserRow {
                email: request.email,
                password_hash,
                nationality: request.nationality,
                date_of_birth: request.date_of_birth,
                role: DEFAULT_ROLE.to_string(),
            })
            .await
            .map_err(ServiceError::from)?;

        user_from_row(row)
    }

    /// Verify credentials and issue an access token. Unknown emails and
    /// wrong passwords are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ServiceError> {
        let row = self
            .user_repo
            .get_user_by_email(email)
            .await
            .map_err(ServiceError::from)?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !verify_password(password, &row.password_hash) {
            return Err(ServiceError::InvalidCredentials);
        }

        let user = user_from_row(row)?;
        self.jwt
            .issue(&user)
            .map_err(|e| ServiceError::Internal(e.into()))
    }
}
