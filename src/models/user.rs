use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the auth collaborator and persisted per session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub logged_in_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            logged_in_at: chrono::Utc::now(),
        }
    }

    /// Display name for an address: the local part split on `.`, `_`, `-`, `+`,
    /// each piece capitalised. `alice.smith@x.io` becomes `Alice Smith`.
    pub fn display_name_for(email: &str) -> String {
        let local = email.split('@').next().unwrap_or(email);
        let name = local
            .split(['.', '_', '-', '+'])
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            email.to_string()
        } else {
            name
        }
    }
}
