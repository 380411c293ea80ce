use super::{AuthError, Authenticator};
use crate::models::User;
use crate::timer;
use crate::validation::Rules;
use std::time::Duration;

/// Demo authenticator: any credentials that pass the field rules are accepted.
#[derive(Clone, Debug, Default)]
pub struct LocalAuthenticator {
    rules: Rules,
    latency: Duration,
}

impl LocalAuthenticator {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            latency: Duration::ZERO,
        }
    }

    /// Simulated round trip before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Authenticator for LocalAuthenticator {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if !self.latency.is_zero() {
            timer::sleep(self.latency).await;
        }
        if self.rules.check_email(email).is_some() || self.rules.check_password(password).is_some() {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(User::new(User::display_name_for(email), email))
    }
}
