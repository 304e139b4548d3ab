//! User Model
//!
//! Core user data structures and typed row mappings.

use serde::{Deserialize, Serialize};

/// Role assigned when a creation request carries none
pub const DEFAULT_ROLE: &str = "USER";

/// User representation for external API responses
///
/// This is the projection returned by list and lookup operations. It never
/// carries the password digest.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique identifier assigned by the store
    pub id: i64,

    /// User's display name
    pub name: String,

    /// User's email address (unique, normalized)
    pub email: String,

    /// Flat role tag used for authorization decisions outside this service
    pub role: String,
}

/// Credential projection for the login lookup
///
/// Internal only: carries the stored digest so the authentication service
/// can verify a supplied password. Never exposed in API responses.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CredentialRow {
    pub id: i64,
    pub password_hash: String,
    pub role: String,
}
