//! Security Utilities
//!
//! Password hashing and verification. bcrypt is CPU-bound, so both
//! operations run on the blocking thread pool rather than stalling the
//! async runtime.

use tokio::task;

use crate::utils::error::{ApiError, ApiResult};

/// Default bcrypt cost for password hashing
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Hash a password using bcrypt with the given cost factor
pub async fn hash_password(password: String, cost: u32) -> ApiResult<String> {
    task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| ApiError::Internal(format!("hashing task failed: {e}")))?
        .map_err(ApiError::from)
}

/// Verify a password against a stored bcrypt digest
pub async fn verify_password(password: String, digest: String) -> ApiResult<bool> {
    task::spawn_blocking(move || bcrypt::verify(password, &digest))
        .await
        .map_err(|e| ApiError::Internal(format!("verification task failed: {e}")))?
        .map_err(ApiError::from)
}
