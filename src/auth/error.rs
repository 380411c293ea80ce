use thiserror::Error;

/// Failure reported by an authenticator or the session store.
///
/// The `Display` text is what the login form shows in its error banner.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email atau password salah")]
    InvalidCredentials,

    #[error("{0}")]
    Rejected(String),

    #[error("Gagal menghubungi server: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gagal menyimpan sesi: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data sesi tidak valid: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Penyimpanan sesi tidak tersedia: {0}")]
    Storage(String),
}
