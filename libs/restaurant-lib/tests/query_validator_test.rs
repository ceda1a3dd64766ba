use restaurant_lib::validation::{PageQuery, QueryErrorKind, QueryValidator, SortDirection};

// ==================== VALID QUERY TESTS ====================

#[test]
fn test_valid_page_combinations_pass() {
    let validator = QueryValidator::restaurants();

    for (page_number, page_size) in [(1, 5), (1, 10), (2, 15), (22, 5), (60, 15)] {
        let result = validator.validate(&PageQuery::new(page_number, page_size));
        assert!(
            result.is_ok(),
            "pageNumber={page_number} pageSize={page_size} should be accepted"
        );
    }
}

#[test]
fn test_allowed_sort_fields_pass() {
    let validator = QueryValidator::restaurants();

    for field in ["Name", "Description", "Category"] {
        let result = validator.validate(&PageQuery::new(1, 10).sorted_by(field));
        assert!(result.is_ok(), "sortBy={field} should be accepted");
    }
}

#[test]
fn test_absent_sort_field_passes() {
    let validator = QueryValidator::restaurants();
    let query = PageQuery::new(1, 5);
    assert!(query.sort_by.is_none());

    assert!(validator.validate(&query).is_ok());
}

#[test]
fn test_default_sort_direction_is_ascending() {
    assert_eq!(PageQuery::new(1, 5).sort_direction, SortDirection::Ascending);
}

// ==================== INVALID QUERY TESTS ====================

#[test]
fn test_page_number_zero_is_out_of_range() {
    let validator = QueryValidator::restaurants();

    let result = validator.validate(&PageQuery::new(0, 10));
    assert!(!result.is_ok());
    assert!(result.has(&QueryErrorKind::OutOfRange));
    assert_eq!(result.failures()[0].field, "pageNumber");
}

#[test]
fn test_disallowed_page_sizes_fail() {
    let validator = QueryValidator::restaurants();

    for page_size in [4, 11, 13] {
        let result = validator.validate(&PageQuery::new(1, page_size));
        assert!(!result.is_ok(), "pageSize={page_size} should be rejected");
        assert!(result.has(&QueryErrorKind::DisallowedPageSize));
        assert!(!result.has(&QueryErrorKind::OutOfRange));
    }
}

#[test]
fn test_unknown_sort_field_fails() {
    let validator = QueryValidator::restaurants();

    let result = validator.validate(&PageQuery::new(1, 10).sorted_by("ContactNumber"));
    assert!(!result.is_ok());
    assert!(result.has(&QueryErrorKind::UnknownSortField));
    assert_eq!(result.failures().len(), 1);
}

#[test]
fn test_sort_field_matching_is_case_sensitive() {
    let validator = QueryValidator::restaurants();

    let result = validator.validate(&PageQuery::new(1, 10).sorted_by("name"));
    assert!(result.has(&QueryErrorKind::UnknownSortField));
}

// ==================== FAILURE ACCUMULATION TESTS ====================

#[test]
fn test_all_violations_reported_together() {
    let validator = QueryValidator::restaurants();

    let result = validator.validate(&PageQuery::new(0, 4).sorted_by("Owner"));
    let failures = result.failures();

    assert_eq!(failures.len(), 3);
    assert!(result.has(&QueryErrorKind::OutOfRange));
    assert!(result.has(&QueryErrorKind::DisallowedPageSize));
    assert!(result.has(&QueryErrorKind::UnknownSortField));
}

#[test]
fn test_failures_come_in_rule_order() {
    let validator = QueryValidator::restaurants();

    let result = validator.validate(&PageQuery::new(0, 7));
    let fields: Vec<_> = result.failures().iter().map(|f| f.field).collect();
    assert_eq!(fields, vec!["pageNumber", "pageSize"]);
}

#[test]
fn test_messages_name_the_offending_field() {
    let validator = QueryValidator::restaurants();

    let messages = validator.validate(&PageQuery::new(1, 7)).messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("pageSize:"));
}

// ==================== DETERMINISM TESTS ====================

#[test]
fn test_validation_is_repeatable() {
    let validator = QueryValidator::restaurants();
    let query = PageQuery::new(0, 4).sorted_by("Owner");

    let first = validator.validate(&query);
    let second = validator.validate(&query);

    assert_eq!(first, second);
}

#[test]
fn test_validation_does_not_mutate_the_query() {
    let validator = QueryValidator::restaurants();
    let query = PageQuery::new(3, 10).sorted_by("Category");

    let _ = validator.validate(&query);

    assert_eq!(query.page_number, 3);
    assert_eq!(query.page_size, 10);
    assert_eq!(query.sort_by.as_deref(), Some("Category"));
}
