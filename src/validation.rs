//! Field rules for the login form: email format and minimum password length.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Conventional address shape: local part, `@`, dotted domain with an alphabetic TLD.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("valid email regex")
});

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Email, Field::Password];

    /// Name used for the input's `name`/`id` attributes.
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

/// Current value of every field, owned by the form controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub email: String,
    pub password: String,
}

impl FormValues {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

/// Per-field validation messages. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: String) {
        self.0.insert(field, message);
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Copy of these errors restricted to the fields `keep` accepts.
    pub fn filtered(&self, keep: impl Fn(Field) -> bool) -> FieldErrors {
        FieldErrors(
            self.0
                .iter()
                .filter(|(f, _)| keep(**f))
                .map(|(f, m)| (*f, m.clone()))
                .collect(),
        )
    }
}

/// The two field rules. Both are fixed; there is nothing to configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rules;

impl Rules {
    pub fn check_email(&self, email: &str) -> Option<String> {
        if email.is_empty() {
            Some("Email wajib diisi".to_string())
        } else if !EMAIL_RE.is_match(email) {
            Some("Format email tidak valid".to_string())
        } else {
            None
        }
    }

    /// Length is counted in characters, not bytes.
    pub fn check_password(&self, password: &str) -> Option<String> {
        if password.is_empty() {
            Some("Password wajib diisi".to_string())
        } else if password.chars().count() < MIN_PASSWORD_LEN {
            Some(format!("Password minimal {MIN_PASSWORD_LEN} karakter"))
        } else {
            None
        }
    }

    pub fn check(&self, field: Field, value: &str) -> Option<String> {
        match field {
            Field::Email => self.check_email(value),
            Field::Password => self.check_password(value),
        }
    }

    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            if let Some(message) = self.check(field, values.get(field)) {
                errors.insert(field, message);
            }
        }
        errors
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
