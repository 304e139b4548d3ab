//! HTTP API layer: handlers, routes, and the bearer-verification middleware

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_routes;
