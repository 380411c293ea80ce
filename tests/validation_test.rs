//! Field rules: email format, password length, required messages.

use login_form::validation::{is_valid_email, Field, FormValues, Rules};

#[test]
fn accepts_conventional_addresses() {
    for email in [
        "user@example.com",
        "first.last@sub.example.co.id",
        "a+tag@domain.io",
        "x_y-z@host-name.org",
    ] {
        assert!(is_valid_email(email), "{email} should be valid");
        assert_eq!(Rules::default().check_email(email), None);
    }
}

#[test]
fn rejects_malformed_addresses() {
    for email in [
        "bad-email",
        "user@",
        "@example.com",
        "user@example",
        "user@@example.com",
        "user example@example.com",
        " user@example.com",
        "user@example.c",
    ] {
        assert!(!is_valid_email(email), "{email} should be invalid");
        assert_eq!(
            Rules::default().check_email(email).as_deref(),
            Some("Format email tidak valid")
        );
    }
}

#[test]
fn empty_fields_get_required_messages() {
    let rules = Rules::default();
    assert_eq!(rules.check_email("").as_deref(), Some("Email wajib diisi"));
    assert_eq!(rules.check_password("").as_deref(), Some("Password wajib diisi"));
}

#[test]
fn password_needs_six_characters() {
    let rules = Rules::default();
    assert_eq!(
        rules.check_password("12345").as_deref(),
        Some("Password minimal 6 karakter")
    );
    assert_eq!(rules.check_password("123456"), None);
}

#[test]
fn password_length_counts_characters_not_bytes() {
    let rules = Rules::default();
    // six characters, more than six bytes
    assert_eq!(rules.check_password("kataäö"), None);
    assert!(rules.check_password("äöü").is_some());
}

#[test]
fn validate_reports_each_failing_field() {
    let rules = Rules::default();

    let errors = rules.validate(&FormValues::new("bad-email", "123"));
    assert_eq!(errors.len(), 2);
    assert!(errors.contains(Field::Email));
    assert!(errors.contains(Field::Password));

    let errors = rules.validate(&FormValues::new("user@example.com", "123456"));
    assert!(errors.is_empty());
}

#[test]
fn form_values_get_set_clear() {
    let mut values = FormValues::default();
    values.set(Field::Email, "a@b.co".to_string());
    values.set(Field::Password, "secret".to_string());
    assert_eq!(values.get(Field::Email), "a@b.co");
    assert_eq!(values.get(Field::Password), "secret");
    values.clear();
    assert!(values.is_empty());
}
