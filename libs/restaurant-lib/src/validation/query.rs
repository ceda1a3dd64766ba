//! Pagination and sorting query validation.

use std::fmt;

use crate::validation::rules::{RuleSet, ValidationResult};

/// Page sizes accepted by list endpoints.
pub const ALLOWED_PAGE_SIZES: &[u32] = &[5, 10, 15];

/// Fields restaurants may be sorted by.
pub const RESTAURANT_SORT_FIELDS: &[&str] = &["Name", "Description", "Category"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A parsed pagination query. Construction (including rejecting requests
/// that carry no pagination parameters at all) is the HTTP layer's job;
/// this type only holds the values to validate.
#[derive(Debug, Clone)]
pub struct PageQuery {
    pub page_number: u32,
    pub page_size: u32,
    pub search_phrase: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: SortDirection,
}

impl PageQuery {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
            search_phrase: None,
            sort_by: None,
            sort_direction: SortDirection::Ascending,
        }
    }

    pub fn sorted_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorKind {
    OutOfRange,
    DisallowedPageSize,
    UnknownSortField,
}

impl fmt::Display for QueryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryErrorKind::OutOfRange => {
                write!(f, "page number must be greater than or equal to 1")
            }
            QueryErrorKind::DisallowedPageSize => {
                write!(f, "page size is not in the allowed set")
            }
            QueryErrorKind::UnknownSortField => {
                write!(f, "sort field is not allowed")
            }
        }
    }
}

/// Validates pagination bounds and the sort-field allow-list for one
/// entity's list endpoint. Stateless apart from its static configuration.
#[derive(Debug, Clone)]
pub struct QueryValidator {
    allowed_page_sizes: Vec<u32>,
    allowed_sort_fields: Vec<String>,
}

impl QueryValidator {
    pub fn new(
        allowed_page_sizes: impl Into<Vec<u32>>,
        allowed_sort_fields: &[&str],
    ) -> Self {
        Self {
            allowed_page_sizes: allowed_page_sizes.into(),
            allowed_sort_fields: allowed_sort_fields.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Validator for restaurant list queries.
    pub fn restaurants() -> Self {
        Self::new(ALLOWED_PAGE_SIZES, RESTAURANT_SORT_FIELDS)
    }

    pub fn validate(&self, query: &PageQuery) -> ValidationResult<QueryErrorKind> {
        RuleSet::new()
            .rule("pageNumber", QueryErrorKind::OutOfRange, |q: &PageQuery| {
                q.page_number >= 1
            })
            .rule("pageSize", QueryErrorKind::DisallowedPageSize, |q| {
                self.allowed_page_sizes.contains(&q.page_size)
            })
            .rule("sortBy", QueryErrorKind::UnknownSortField, |q| {
                match &q.sort_by {
                    // Absent sort field means default ordering.
                    None => true,
                    Some(field) => self.allowed_sort_fields.iter().any(|a| a == field),
                }
            })
            .evaluate(query)
    }
}
