use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Issues and verifies access/refresh token pairs.
///
/// Access and refresh tokens are signed with independent secrets and carry
/// independent expiry windows, so a refresh token can never be presented
/// where an access token is expected (or vice versa).
pub struct TokenIssuer {
    access: JwtHandler,
    refresh: JwtHandler,
    access_window: Duration,
    refresh_window: Duration,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `access_secret` - Signing secret for access tokens
    /// * `refresh_secret` - Signing secret for refresh tokens
    /// * `access_window` - Access token lifetime
    /// * `refresh_window` - Refresh token lifetime
    pub fn new(
        access_secret: &[u8],
        refresh_secret: &[u8],
        access_window: Duration,
        refresh_window: Duration,
    ) -> Self {
        Self {
            access: JwtHandler::new(access_secret),
            refresh: JwtHandler::new(refresh_secret),
            access_window,
            refresh_window,
        }
    }

    /// Issue a short-lived access token for the given identity.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_access(&self, user_id: &str, email: &str) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, email, self.access_window);
        self.access.encode(&claims)
    }

    /// Issue a longer-lived refresh token for the given identity.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_refresh(&self, user_id: &str, email: &str) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, email, self.refresh_window);
        self.refresh.encode(&claims)
    }

    /// Verify an access token's signature and expiry.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature invalid or token expired
    pub fn verify_access(&self, token: &str) -> Result<Claims, JwtError> {
        self.access.decode(token)
    }

    /// Verify a refresh token's signature and expiry.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature invalid or token expired
    pub fn verify_refresh(&self, token: &str) -> Result<Claims, JwtError> {
        self.refresh.decode(token)
    }

    /// Expiry timestamp a refresh token issued now would carry.
    ///
    /// Used by callers that persist refresh tokens alongside their expiry.
    pub fn refresh_expires_at(&self) -> DateTime<Utc> {
        Utc::now() + self.refresh_window
    }
}
