use std::collections::HashSet;

use restaurant_lib::validation::{validate_registration, RegisterErrorKind, RegisterRequest};

fn registered_emails() -> HashSet<String> {
    ["test2@test.pl", "test3@test.pl"]
        .iter()
        .map(|e| e.to_string())
        .collect()
}

fn request(email: &str, password: &str, confirm_password: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
        nationality: None,
        date_of_birth: None,
    }
}

// ==================== VALID REQUEST TESTS ====================

#[test]
fn test_fresh_email_and_strong_password_pass() {
    let result = validate_registration(
        &request("test@test.pl", "qwe123", "qwe123"),
        &registered_emails(),
    );

    assert!(result.is_ok());
    assert!(result.failures().is_empty());
}

#[test]
fn test_minimum_acceptable_password_passes() {
    // Six characters with a digit is the weakest accepted password.
    let result = validate_registration(
        &request("new@test.pl", "qwe123", "qwe123"),
        &HashSet::new(),
    );
    assert!(result.is_ok());
}

// ==================== SINGLE RULE TESTS ====================

#[test]
fn test_malformed_email_fails() {
    let result = validate_registration(
        &request("not-an-email", "qwe123", "qwe123"),
        &registered_emails(),
    );

    assert!(result.has(&RegisterErrorKind::InvalidEmailFormat));
    assert_eq!(result.failures().len(), 1);
    assert_eq!(result.failures()[0].field, "email");
}

#[test]
fn test_registered_email_fails() {
    let result = validate_registration(
        &request("test2@test.pl", "qwe123", "qwe123"),
        &registered_emails(),
    );

    assert!(result.has(&RegisterErrorKind::EmailAlreadyRegistered));
    assert!(!result.has(&RegisterErrorKind::InvalidEmailFormat));
}

#[test]
fn test_email_comparison_ignores_case() {
    let result = validate_registration(
        &request("TEST3@TEST.PL", "qwe123", "qwe123"),
        &registered_emails(),
    );

    assert!(result.has(&RegisterErrorKind::EmailAlreadyRegistered));
}

#[test]
fn test_short_password_is_weak() {
    let result = validate_registration(
        &request("test@test.pl", "qwe12", "qwe12"),
        &registered_emails(),
    );

    assert!(result.has(&RegisterErrorKind::WeakPassword));
    assert_eq!(result.failures()[0].field, "password");
}

#[test]
fn test_password_without_digit_is_weak() {
    let result = validate_registration(
        &request("test@test.pl", "abcdefgh", "abcdefgh"),
        &registered_emails(),
    );

    assert!(result.has(&RegisterErrorKind::WeakPassword));
}

#[test]
fn test_mismatched_confirmation_fails() {
    let result = validate_registration(
        &request("test@test.pl", "qwe123", "qwe124"),
        &registered_emails(),
    );

    assert!(result.has(&RegisterErrorKind::PasswordMismatch));
    assert_eq!(result.failures()[0].field, "confirmPassword");
}

// ==================== FAILURE ACCUMULATION TESTS ====================

#[test]
fn test_every_violated_rule_is_reported() {
    // Registered email, weak password, mismatched confirmation: all three
    // must surface in a single pass.
    let result = validate_registration(
        &request("test2@test.pl", "qwe12", "nope"),
        &registered_emails(),
    );

    assert_eq!(result.failures().len(), 3);
    assert!(result.has(&RegisterErrorKind::EmailAlreadyRegistered));
    assert!(result.has(&RegisterErrorKind::WeakPassword));
    assert!(result.has(&RegisterErrorKind::PasswordMismatch));
}

#[test]
fn test_failure_messages_name_the_fields() {
    let result = validate_registration(
        &request("broken", "qwe12", "qwe12"),
        &registered_emails(),
    );

    let messages = result.messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("email:"));
    assert!(messages[1].starts_with("password:"));
}

// ==================== DETERMINISM TESTS ====================

#[test]
fn test_validation_is_repeatable() {
    let emails = registered_emails();
    let req = request("test2@test.pl", "qwe12", "nope");

    assert_eq!(
        validate_registration(&req, &emails),
        validate_registration(&req, &emails)
    );
}

#[test]
fn test_validation_does_not_touch_the_snapshot() {
    let emails = registered_emails();
    let _ = validate_registration(&request("test@test.pl", "qwe123", "qwe123"), &emails);

    assert_eq!(emails.len(), 2);
    assert!(emails.contains("test2@test.pl"));
}
