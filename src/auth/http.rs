use super::{AuthError, Authenticator};
use crate::models::User;
use serde::{Deserialize, Serialize};

/// The address goes in `username`; the server's account key is the login email.
#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// `{token, user_id, username}`. The token is not kept; the session is the stored user.
#[derive(Deserialize)]
struct AuthResponse {
    user_id: String,
    username: String,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Authenticator backed by `POST {base_url}/api/auth/login`.
#[derive(Clone, Debug)]
pub struct HttpAuthenticator {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthenticator {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}/api/auth/login", self.base_url)
    }
}

impl Authenticator for HttpAuthenticator {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let url = self.login_url();
        tracing::debug!(%url, "sending login request");
        let res = self
            .client
            .post(&url)
            .json(&LoginRequest {
                username: email,
                password,
            })
            .send()
            .await?;

        let status = res.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(AuthError::Rejected(rejection_message(status, &text)));
        }

        let body: AuthResponse = res.json().await?;
        let mut user = User::new(body.username, email);
        user.id = body.user_id;
        Ok(user)
    }
}

/// Server-supplied `error`/`message` when the body carries one, else the status line.
pub(crate) fn rejection_message(status: reqwest::StatusCode, body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error
        .or(parsed.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Server returned {}", status))
}
