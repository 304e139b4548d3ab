//! Authentication Models
//!
//! JWT claim structures for issued bearer tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifetime of an issued token
pub const TOKEN_LIFETIME_HOURS: i64 = 2;

/// JWT claims carried by every issued token
///
/// Tokens are stateless: the service keeps no record of what it has issued,
/// so the claims are the whole artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject - user id
    pub sub: String,

    /// Flat role tag copied from the user record at issue time
    pub role: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Unique token identifier
    pub jti: String,
}

impl AccessClaims {
    /// Create claims for a user with the fixed two-hour expiry
    pub fn new(user_id: i64, role: &str, issued_at: DateTime<Utc>) -> Self {
        Self {
            sub: user_id.to_string(),
            role: role.to_string(),
            exp: (issued_at + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
            iat: issued_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parse the subject claim back into a user id
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}
