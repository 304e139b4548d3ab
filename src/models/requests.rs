//! Request and Response Models
//!
//! Data structures for API request and response payloads with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::User;

/// Request payload for logging in
///
/// Not shape-validated: a malformed email or empty password simply fails
/// verification with the same 401 as any other bad credential.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Email the account was registered with
    pub email: String,

    /// Plaintext password; verified against the stored digest, never persisted
    pub password: String,
}

/// Request payload for creating a new user account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// User's display name (1-255 characters)
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    /// User's email address (must be unique and valid format)
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// User's password (non-empty, at most 128 characters)
    #[validate(length(
        min = 1,
        max = 128,
        message = "Password must be between 1 and 128 characters"
    ))]
    pub password: String,

    /// Optional role tag; defaults to "USER" when absent
    #[validate(length(min = 1, max = 64, message = "Role must be between 1 and 64 characters"))]
    pub role: Option<String>,
}

/// Request payload for updating a user (full replacement of mutable fields)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// Updated display name
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    /// Updated email address (must remain unique)
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// New password; the stored digest is untouched when absent
    #[validate(length(
        min = 1,
        max = 128,
        message = "Password must be between 1 and 128 characters"
    ))]
    pub password: Option<String>,

    /// Updated role tag
    #[validate(length(min = 1, max = 64, message = "Role must be between 1 and 64 characters"))]
    pub role: String,
}

/// Response for a successful login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Generic message-only response for write operations
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Response for the user listing
#[derive(Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    pub count: usize,
    pub users: Vec<User>,
}
