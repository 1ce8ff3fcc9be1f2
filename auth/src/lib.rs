//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the task service:
//! - Password hashing (Argon2id)
//! - JWT access/refresh token pairs signed with independent secrets
//! - Expiry-window parsing for duration strings like `15m` or `7d`
//! - Opaque random session tokens
//!
//! The service defines its own session semantics and adapts these
//! implementations; nothing in this crate touches storage.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Token Pairs
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(
//!     b"access_secret_at_least_32_bytes_long!!",
//!     b"refresh_secret_at_least_32_bytes_long!",
//!     Duration::minutes(15),
//!     Duration::days(7),
//! );
//!
//! let token = issuer.issue_access("user123", "user@example.com").unwrap();
//! let claims = issuer.verify_access(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//!
//! // Access tokens are rejected by the refresh verifier.
//! assert!(issuer.verify_refresh(&token).is_err());
//! ```

pub mod jwt;
pub mod opaque;
pub mod password;

// Re-export commonly used items
pub use jwt::compute_expiry;
pub use jwt::default_window;
pub use jwt::parse_window;
pub use jwt::parse_window_or_default;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenIssuer;
pub use opaque::random_opaque_token;
pub use password::PasswordError;
pub use password::PasswordHasher;
