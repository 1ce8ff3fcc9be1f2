use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::models::UserId;

/// Verified identity stored in request extensions for downstream handlers.
///
/// Task handlers trust this for ownership checks without re-verifying
/// the token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Middleware that validates access tokens and injects identity.
///
/// Every verification failure collapses into one generic message so the
/// boundary leaks nothing about why a token was rejected.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.token_issuer.verify_access(token).map_err(|e| {
        tracing::warn!("Access token validation failed: {}", e);
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::error!("Failed to parse user ID from token: {}", e);
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let no_token =
        || ApiError::Unauthorized("No token provided".to_string()).into_response();

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(no_token)?;

    let auth_str = auth_header.to_str().map_err(|_| no_token())?;

    if !auth_str.starts_with("Bearer ") {
        return Err(no_token());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
