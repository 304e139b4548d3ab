//! User Directory Service
//!
//! A user-directory service: authenticates callers against stored
//! credentials, issues bearer tokens, and performs CRUD operations on user
//! records behind a bounded connection pool.
//!
//! # Architecture
//!
//! - **API layer**: HTTP handlers, routes, and the bearer-verification
//!   middleware
//! - **Service layer**: authentication flow, token issuance, and the
//!   pool-backed user repository
//! - **Models**: typed rows, request/response payloads, token claims
//! - **Database**: pool configuration and construction
//! - **Utils**: error taxonomy, password hashing, validation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use user_directory::{
//!     api::{create_routes, AppState},
//!     database::DatabaseConfig,
//!     service::{AuthService, TokenService, UserService},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = DatabaseConfig::default().create_pool().await?;
//!
//!     let user_service = Arc::new(UserService::new(pool));
//!     let token_service = Arc::new(TokenService::new("signing-secret")?);
//!     let auth_service = Arc::new(AuthService::new(
//!         (*user_service).clone(),
//!         (*token_service).clone(),
//!     ));
//!
//!     let app = create_routes(AppState {
//!         user_service,
//!         auth_service,
//!         token_service,
//!     });
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Security
//!
//! - bcrypt password hashing (cost 12) on the blocking thread pool
//! - The password digest never appears in any response projection
//! - Login failures never disclose whether an email exists
//! - Infrastructure error detail stays in server logs; callers receive a
//!   sanitized message

/// HTTP API layer with handlers, routes, and auth middleware
pub mod api;

/// Configuration management
pub mod config;

/// Database pool configuration and construction
pub mod database;

/// Data models and request/response structures
pub mod models;

/// Business logic: repository, authentication, token issuance
pub mod service;

/// Shared utilities for errors, hashing, and validation
pub mod utils;

pub use api::{create_routes, AppState};
pub use config::AppConfig;
pub use database::{DatabaseConfig, DatabasePool};
pub use models::{
    CreateUserRequest, LoginRequest, LoginResponse, MessageResponse, UpdateUserRequest, User,
    UserListResponse,
};
pub use service::{AuthService, TokenService, UserService};
pub use utils::error::{ApiError, ApiResult, ErrorBody};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
