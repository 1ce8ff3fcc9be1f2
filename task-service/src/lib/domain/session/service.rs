use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use chrono::Utc;

use crate::session::errors::SessionError;
use crate::session::models::LoginOutcome;
use crate::session::models::RefreshTokenRecord;
use crate::session::models::RegisterCommand;
use crate::session::ports::RefreshTokenRepository;
use crate::session::ports::SessionServicePort;
use crate::session::ports::UserRepository;
use crate::user::models::User;
use crate::user::models::UserId;

/// Domain service for the session lifecycle.
///
/// Orchestrates the password hasher, the token issuer, and the two stores
/// behind register/login/refresh/logout. Holds no mutable state; the
/// issuer's secrets and windows are fixed at construction.
pub struct SessionService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    users: Arc<UR>,
    refresh_tokens: Arc<RR>,
    token_issuer: Arc<TokenIssuer>,
    password_hasher: PasswordHasher,
}

impl<UR, RR> SessionService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    /// Create a new session service with injected dependencies.
    pub fn new(users: Arc<UR>, refresh_tokens: Arc<RR>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            users,
            refresh_tokens,
            token_issuer,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR, RR> SessionServicePort for SessionService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, SessionError> {
        if self
            .users
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(SessionError::EmailAlreadyExists);
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            name: command.name,
            password_hash,
            created_at: Utc::now(),
        };

        self.users.create(user).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, SessionError> {
        // Unknown email and wrong password must be indistinguishable
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(SessionError::InvalidCredentials)?;

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Err(SessionError::InvalidCredentials);
        }

        let user_id = user.id.to_string();
        let access_token = self
            .token_issuer
            .issue_access(&user_id, user.email.as_str())
            .map_err(|e| SessionError::Token(e.to_string()))?;
        let refresh_token = self
            .token_issuer
            .issue_refresh(&user_id, user.email.as_str())
            .map_err(|e| SessionError::Token(e.to_string()))?;

        let record = RefreshTokenRecord::new(
            refresh_token.clone(),
            user.id,
            self.token_issuer.refresh_expires_at(),
        );
        self.refresh_tokens.create(record).await?;

        Ok(LoginOutcome {
            user,
            access_token,
            refresh_token,
        })
    }

    async fn refresh(&self, refresh_token: &str) -> Result<String, SessionError> {
        let claims = self
            .token_issuer
            .verify_refresh(refresh_token)
            .map_err(|_| SessionError::InvalidRefreshToken)?;

        // A cryptographically valid token may still have been revoked
        let record = self
            .refresh_tokens
            .find_by_token(refresh_token)
            .await?
            .ok_or(SessionError::RefreshTokenNotFound)?;

        if record.is_expired(Utc::now()) {
            self.refresh_tokens.delete_by_id(&record.id).await?;
            return Err(SessionError::RefreshTokenExpired);
        }

        // The refresh token is not rotated; only a new access token is minted
        self.token_issuer
            .issue_access(&claims.sub, &claims.email)
            .map_err(|e| SessionError::Token(e.to_string()))
    }

    async fn logout(&self, refresh_token: &str) -> Result<(), SessionError> {
        let deleted = self.refresh_tokens.delete_by_token(refresh_token).await?;

        if deleted == 0 {
            return Err(SessionError::RefreshTokenNotFound);
        }

        Ok(())
    }

    async fn cleanup_expired_tokens(&self) -> Result<u64, SessionError> {
        self.refresh_tokens.delete_expired(Utc::now()).await
    }
}
