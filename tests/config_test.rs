use login_form::config::{FormConfig, DEFAULT_SUCCESS_TTL};
use login_form::form::LoginForm;
use login_form::validation::Field;
use std::collections::HashMap;
use std::time::Duration;

fn config_from(pairs: &[(&str, &str)]) -> FormConfig {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    FormConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn empty_environment_gives_defaults() {
    let config = config_from(&[]);
    assert_eq!(config, FormConfig::default());
    assert_eq!(config.success_message_ttl, DEFAULT_SUCCESS_TTL);
    assert_eq!(config.success_message_ttl, Duration::from_millis(5000));
    assert_eq!(config.auth_url, None);
}

#[test]
fn reads_every_key() {
    let config = config_from(&[
        ("LOGIN_FORM_DEBUG", "off"),
        ("LOGIN_FORM_SUCCESS_TTL_MS", "1500"),
        ("LOGIN_FORM_AUTH_URL", " http://127.0.0.1:8000 "),
    ]);
    assert!(!config.debug);
    assert_eq!(config.success_message_ttl, Duration::from_millis(1500));
    assert_eq!(config.auth_url.as_deref(), Some("http://127.0.0.1:8000"));
}

#[test]
fn invalid_values_fall_back() {
    let defaults = FormConfig::default();
    let config = config_from(&[
        ("LOGIN_FORM_DEBUG", "maybe"),
        ("LOGIN_FORM_SUCCESS_TTL_MS", "soon"),
        ("LOGIN_FORM_AUTH_URL", "   "),
    ]);
    assert_eq!(config.debug, defaults.debug);
    assert_eq!(config.success_message_ttl, defaults.success_message_ttl);
    assert_eq!(config.auth_url, None);
}

#[test]
fn debug_flag_accepts_common_spellings() {
    for on in ["1", "true", "YES", "On"] {
        assert!(config_from(&[("LOGIN_FORM_DEBUG", on)]).debug, "{on}");
    }
    for off in ["0", "false", "no", "OFF"] {
        assert!(!config_from(&[("LOGIN_FORM_DEBUG", off)]).debug, "{off}");
    }
}

#[test]
fn password_minimum_cannot_be_lowered_from_environment() {
    let config = config_from(&[("LOGIN_FORM_MIN_PASSWORD_LEN", "3")]);
    assert_eq!(config, FormConfig::default());
    assert_eq!(
        config.rules().check_password("12345").as_deref(),
        Some("Password minimal 6 karakter")
    );

    let mut form = LoginForm::new(config);
    form.set_field(Field::Email, "user@example.com");
    form.set_field(Field::Password, "12345");
    assert_eq!(form.error(Field::Password), Some("Password minimal 6 karakter"));
    assert!(!form.can_submit());
}
