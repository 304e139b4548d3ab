//! Validation Utilities
//!
//! Normalization helpers for user data. Payload shape validation lives on
//! the request structs via `validator` derives.

/// Normalizes email address to lowercase and removes surrounding whitespace
///
/// Applied before every insert and lookup so the unique-email invariant and
/// the login lookup agree on case and spacing.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
