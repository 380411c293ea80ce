//! Authentication collaborator: the `Authenticator` seam, its two
//! implementations, and the per-app `AuthSession` that carries the
//! current user, loading flag and last error.

mod error;
mod http;
mod local;
mod store;

pub use error::AuthError;
pub use http::HttpAuthenticator;
pub use local::LocalAuthenticator;
pub use store::{default_store, MemoryStore, SessionStore};
#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;
#[cfg(target_arch = "wasm32")]
pub use store::BrowserStore;

use crate::config::FormConfig;
use crate::models::User;
use std::time::Duration;

/// Checks credentials. Where and how is entirely up to the implementation.
#[allow(async_fn_in_trait)]
pub trait Authenticator {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError>;
}

/// Result of a login attempt. On `Failure` the reason is on the session's `error()`.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    Success(User),
    Failure,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            LoginOutcome::Success(user) => Some(user),
            LoginOutcome::Failure => None,
        }
    }
}

/// Authenticator chosen from configuration: HTTP when an auth URL is set, local demo otherwise.
#[derive(Clone, Debug)]
pub enum AppAuthenticator {
    Local(LocalAuthenticator),
    Http(HttpAuthenticator),
}

impl AppAuthenticator {
    pub fn from_config(config: &FormConfig) -> Self {
        match config.auth_url.as_deref() {
            Some(url) => AppAuthenticator::Http(HttpAuthenticator::new(url)),
            None => AppAuthenticator::Local(
                LocalAuthenticator::new(config.rules())
                    .with_latency(Duration::from_millis(600)),
            ),
        }
    }
}

impl Authenticator for AppAuthenticator {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        match self {
            AppAuthenticator::Local(a) => a.authenticate(email, password).await,
            AppAuthenticator::Http(a) => a.authenticate(email, password).await,
        }
    }
}

/// Current authentication state for one app session.
///
/// Created once by the app root and handed down explicitly; `logout` tears
/// the session down (user, error and persisted record).
pub struct AuthSession<A> {
    authenticator: A,
    store: Box<dyn SessionStore>,
    user: Option<User>,
    loading: bool,
    error: Option<String>,
}

impl<A: Authenticator> AuthSession<A> {
    pub fn new(authenticator: A, store: Box<dyn SessionStore>) -> Self {
        Self {
            authenticator,
            store,
            user: None,
            loading: false,
            error: None,
        }
    }

    /// Like `new`, but picks up a user persisted by an earlier session.
    pub fn restore(authenticator: A, store: Box<dyn SessionStore>) -> Self {
        let mut session = Self::new(authenticator, store);
        match session.store.load() {
            Ok(Some(user)) => {
                tracing::info!(email = %user.email, "restored session");
                session.user = Some(user);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "failed to load stored session"),
        }
        session
    }

    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// First half of a login, for drivers that cannot hold the session across
    /// the await (UI signals). Pair with `finish_login`.
    pub fn begin_login(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_login(&mut self, result: Result<User, AuthError>) -> LoginOutcome {
        self.loading = false;
        match result {
            Ok(user) => {
                if let Err(e) = self.store.save(&user) {
                    tracing::warn!(error = %e, "failed to persist session");
                }
                tracing::info!(email = %user.email, "login succeeded");
                self.user = Some(user.clone());
                LoginOutcome::Success(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                self.error = Some(e.to_string());
                LoginOutcome::Failure
            }
        }
    }

    pub async fn login(&mut self, email: &str, password: &str) -> LoginOutcome {
        self.begin_login();
        let result = self.authenticator.authenticate(email, password).await;
        self.finish_login(result)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(email = %user.email, "logged out");
        }
        self.error = None;
        self.loading = false;
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear stored session");
        }
    }
}
