//! Business logic: repository, authentication, and token issuance

pub mod auth;
pub mod token;
pub mod user;

pub use auth::AuthService;
pub use token::TokenService;
pub use user::UserService;
