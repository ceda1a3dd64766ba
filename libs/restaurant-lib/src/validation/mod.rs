pub mod query;
pub mod register;
pub mod rules;

pub use query::{PageQuery, QueryErrorKind, QueryValidator, SortDirection};
pub use register::{validate_registration, RegisterErrorKind, RegisterRequest};
pub use rules::{Failure, RuleSet, ValidationResult};
