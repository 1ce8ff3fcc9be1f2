use auth::PasswordError;
use thiserror::Error;

/// Errors for session lifecycle operations.
///
/// The credential-mismatch variants carry no detail about which check
/// failed; their messages are the exact strings the HTTP boundary serves.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("User with this email already exists")]
    EmailAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Refresh token not found")]
    RefreshTokenNotFound,

    #[error("Refresh token expired")]
    RefreshTokenExpired,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
