//! Data models and request/response structures

pub mod auth;
pub mod requests;
pub mod user;

pub use auth::AccessClaims;
pub use requests::{
    CreateUserRequest, LoginRequest, LoginResponse, MessageResponse, UpdateUserRequest,
    UserListResponse,
};
pub use user::{User, DEFAULT_ROLE};
