//! Shared utilities for error handling, security, and validation

pub mod error;
pub mod security;
pub mod validation;
