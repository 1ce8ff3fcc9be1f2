use thiserror::Error;

/// Error type for JWT operations.
///
/// Verification failures collapse into a single `InvalidToken` variant:
/// callers cannot tell an expired token from one with a bad signature.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Invalid or expired token")]
    InvalidToken,
}
