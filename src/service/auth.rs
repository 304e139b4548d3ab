//! Authentication Service
//!
//! Orchestrates credential lookup, digest verification, and token issuance.
//! The connection lease lives inside the repository lookup; verification and
//! signing run with no connection held.

use crate::models::requests::{LoginRequest, LoginResponse};
use crate::service::{TokenService, UserService};
use crate::utils::{
    error::{ApiError, ApiResult},
    security::verify_password,
};

/// Login flow over the user repository and token issuer
#[derive(Clone)]
pub struct AuthService {
    users: UserService,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(users: UserService, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// An unknown email and a wrong password produce the identical error so
    /// the response never discloses whether the email exists. Infrastructure
    /// failures (pool, store) propagate separately as internal errors.
    pub async fn login(&self, request: LoginRequest) -> ApiResult<LoginResponse> {
        let credentials = self.users.credentials_by_email(&request.email).await?;

        let row = match credentials {
            Some(row) => row,
            None => return Err(ApiError::InvalidCredentials),
        };

        let matches = verify_password(request.password, row.password_hash).await?;
        if !matches {
            return Err(ApiError::InvalidCredentials);
        }

        let token = self.tokens.issue(row.id, &row.role)?;

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
        })
    }
}
