use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::models::EmailAddress;
use crate::user::models::User;
use crate::user::models::UserId;

/// Persisted refresh token record.
///
/// While present, denotes a still-valid session unless `expires_at` has
/// passed. Deleted on logout, on refresh-time expiry detection, and by
/// the periodic cleanup sweep. The token string is unique in the store.
#[derive(Debug, Clone)]
pub struct RefreshTokenRecord {
    pub id: Uuid,
    pub token: String,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    /// Build a record for a freshly issued refresh token.
    pub fn new(token: String, user_id: UserId, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            token,
            user_id,
            expires_at,
        }
    }

    /// Whether the persisted session has outlived its expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

/// Command to register a new user with a validated email.
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub password: String,
    pub name: Option<String>,
}

impl RegisterCommand {
    pub fn new(email: EmailAddress, password: String, name: Option<String>) -> Self {
        Self {
            email,
            password,
            name,
        }
    }
}

/// Result of a successful login: the user plus a fresh token pair.
#[derive(Debug)]
pub struct LoginOutcome {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}
