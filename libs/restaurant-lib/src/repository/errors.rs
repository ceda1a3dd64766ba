#[derive(Debug)]
pub enum RepositoryError {
    EmailAlreadyExists,
    NotFound,
    Sqlx(sqlx::Error),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryError::EmailAlreadyExists => write!(f, "email already exists"),
            RepositoryError::NotFound => write!(f, "not found"),
            RepositoryError::Sqlx(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RepositoryError::EmailAlreadyExists => None,
            RepositoryError::NotFound => None,
            RepositoryError::Sqlx(e) => Some(e),
        }
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(value: sqlx::Error) -> Self {
        map_sqlx_error(value)
    }
}

fn extract_mysql_key_name(msg_lower: &str) -> Option<String> {
    // msg_lower is already lowercased
    let marker = "for key '";
    let start = msg_lower.find(marker)? + marker.len();
    let rest = &msg_lower[start..];
    let end = rest.find('\'')?;
    Some(rest[..end].to_string())
}

pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    const USER_EMAIL_UNIQUE: &str = "user_email_unique";

    if let sqlx::Error::Database(db_err) = &err {
        // MySQL duplicate key violations surface as SQLSTATE 23000 with a
        // message like "Duplicate entry '...' for key 'users.user_email_unique'".
        let msg = db_err.message().to_lowercase();
        let is_duplicate_key = db_err.code().as_deref() == Some("23000")
            && msg.contains("duplicate entry")
            && msg.contains("for key");

        if is_duplicate_key {
            // MySQL may prefix the key with the table name, so match the tail.
            let key = extract_mysql_key_name(&msg).unwrap_or_default();
            if key.ends_with(USER_EMAIL_UNIQUE) || msg.contains(USER_EMAIL_UNIQUE) {
                return RepositoryError::EmailAlreadyExists;
            }
        }
    }

    RepositoryError::Sqlx(err)
}
