pub mod claims;
pub mod errors;
pub mod expiry;
pub mod handler;
pub mod issuer;

pub use claims::Claims;
pub use errors::JwtError;
pub use expiry::compute_expiry;
pub use expiry::default_window;
pub use expiry::parse_window;
pub use expiry::parse_window_or_default;
pub use handler::JwtHandler;
pub use issuer::TokenIssuer;
