use crate::validation::Rules;
use std::env;
use std::time::Duration;

pub const DEFAULT_SUCCESS_TTL: Duration = Duration::from_millis(5000);

/// Read once when the form is constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct FormConfig {
    /// Render the diagnostics block under the form.
    pub debug: bool,
    /// How long the welcome message stays up.
    pub success_message_ttl: Duration,
    /// Login endpoint base; `None` means the local demo authenticator.
    pub auth_url: Option<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            debug: cfg!(debug_assertions),
            success_message_ttl: DEFAULT_SUCCESS_TTL,
            auth_url: None,
        }
    }
}

impl FormConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unparsable values fall back to the default and log a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            debug: lookup("LOGIN_FORM_DEBUG")
                .map(|v| parse_bool("LOGIN_FORM_DEBUG", &v).unwrap_or(defaults.debug))
                .unwrap_or(defaults.debug),
            success_message_ttl: lookup("LOGIN_FORM_SUCCESS_TTL_MS")
                .map(|v| match v.trim().parse::<u64>() {
                    Ok(ms) => Duration::from_millis(ms),
                    Err(_) => {
                        tracing::warn!(value = %v, "invalid LOGIN_FORM_SUCCESS_TTL_MS, using default");
                        defaults.success_message_ttl
                    }
                })
                .unwrap_or(defaults.success_message_ttl),
            auth_url: lookup("LOGIN_FORM_AUTH_URL")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        }
    }

    pub fn rules(&self) -> Rules {
        Rules
    }
}

fn parse_bool(key: &str, value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!(key, value, "invalid boolean, using default");
            None
        }
    }
}
