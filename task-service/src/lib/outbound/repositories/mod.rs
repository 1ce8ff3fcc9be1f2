pub mod refresh_token;
pub mod task;
pub mod user;

pub use refresh_token::PostgresRefreshTokenRepository;
pub use task::PostgresTaskRepository;
pub use user::PostgresUserRepository;
