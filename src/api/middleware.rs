//! Authentication Middleware
//!
//! Bearer-token verification for the protected CRUD endpoints. The token
//! issuer never verifies; this middleware does, and attaches the decoded
//! claims to the request before any handler runs.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::models::auth::AccessClaims;
use crate::service::TokenService;
use crate::utils::error::ApiError;

/// Extension type storing the authenticated principal's claims
#[derive(Debug, Clone)]
pub struct AuthUser(pub AccessClaims);

/// Validates the Authorization header and injects the caller's claims.
///
/// Missing, malformed, or invalid tokens reject the request with 401 before
/// it reaches the core.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(ApiError::InvalidCredentials)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::InvalidCredentials)?;

    let claims = tokens
        .validate(token)
        .map_err(|_| ApiError::InvalidCredentials)?;

    request.extensions_mut().insert(AuthUser(claims));

    Ok(next.run(request).await)
}
