//! Registration request validation.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use validator::ValidateEmail;

use crate::validation::rules::{RuleSet, ValidationResult};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterErrorKind {
    InvalidEmailFormat,
    EmailAlreadyRegistered,
    PasswordMismatch,
    WeakPassword,
}

impl fmt::Display for RegisterErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterErrorKind::InvalidEmailFormat => write!(f, "is not a valid email address"),
            RegisterErrorKind::EmailAlreadyRegistered => write!(f, "is already registered"),
            RegisterErrorKind::PasswordMismatch => write!(f, "does not match the password"),
            RegisterErrorKind::WeakPassword => write!(
                f,
                "must be at least {MIN_PASSWORD_LENGTH} characters and contain a digit"
            ),
        }
    }
}

fn is_strong_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LENGTH && password.chars().any(|c| c.is_ascii_digit())
}

/// Validate a registration request against the currently registered emails.
///
/// `existing_emails` is a read-only snapshot supplied by the caller and is
/// expected to be lowercased. All violated rules are reported together.
pub fn validate_registration(
    request: &RegisterRequest,
    existing_emails: &HashSet<String>,
) -> ValidationResult<RegisterErrorKind> {
    RuleSet::new()
        .rule(
            "email",
            RegisterErrorKind::InvalidEmailFormat,
            |r: &RegisterRequest| r.email.validate_email(),
        )
        .rule("email", RegisterErrorKind::EmailAlreadyRegistered, |r| {
            !existing_emails.contains(&r.email.to_lowercase())
        })
        .rule("password", RegisterErrorKind::WeakPassword, |r| {
            is_strong_password(&r.password)
        })
        .rule("confirmPassword", RegisterErrorKind::PasswordMismatch, |r| {
            r.password == r.confirm_password
        })
        .evaluate(request)
}
