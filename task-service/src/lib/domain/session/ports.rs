use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::session::errors::SessionError;
use crate::session::models::LoginOutcome;
use crate::session::models::RefreshTokenRecord;
use crate::session::models::RegisterCommand;
use crate::user::models::User;

/// Port for session lifecycle operations.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Create a new user from validated registration data.
    ///
    /// Pure creation; does not authenticate.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<User, SessionError>;

    /// Verify credentials and mint an access/refresh token pair.
    ///
    /// The refresh token is persisted with its computed expiry. Unknown
    /// email and wrong password fail identically.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No such user or password mismatch
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, SessionError>;

    /// Exchange a valid refresh token for a new access token.
    ///
    /// The refresh token itself is not rotated.
    ///
    /// # Errors
    /// * `InvalidRefreshToken` - Signature or expiry check failed
    /// * `RefreshTokenNotFound` - Token was revoked or never issued
    /// * `RefreshTokenExpired` - Persisted record outlived its expiry
    async fn refresh(&self, refresh_token: &str) -> Result<String, SessionError>;

    /// Revoke a refresh token by deleting its persisted record.
    ///
    /// # Errors
    /// * `RefreshTokenNotFound` - No record matched the token value
    async fn logout(&self, refresh_token: &str) -> Result<(), SessionError>;

    /// Delete all expired refresh token records.
    ///
    /// # Returns
    /// Number of records removed
    async fn cleanup_expired_tokens(&self) -> Result<u64, SessionError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Unique constraint on email violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, SessionError>;

    /// Retrieve a user by exact email match (case-sensitive).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, SessionError>;
}

/// Persistence operations for refresh token records.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync + 'static {
    /// Persist a new refresh token record.
    async fn create(&self, record: RefreshTokenRecord)
        -> Result<RefreshTokenRecord, SessionError>;

    /// Retrieve a record by exact token value.
    async fn find_by_token(&self, token: &str)
        -> Result<Option<RefreshTokenRecord>, SessionError>;

    /// Delete a record by identifier.
    async fn delete_by_id(&self, id: &Uuid) -> Result<(), SessionError>;

    /// Delete all records matching the token value.
    ///
    /// # Returns
    /// Number of records removed (at most one; token values are unique)
    async fn delete_by_token(&self, token: &str) -> Result<u64, SessionError>;

    /// Delete all records whose expiry is before `now`.
    ///
    /// # Returns
    /// Number of records removed
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, SessionError>;
}
