//! API Route Definitions
//!
//! The service surface: one public login route and the bearer-protected
//! CRUD routes. The binary mounts this router under `/api/users`.

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use super::handlers::{self, AppState};
use super::middleware::auth_middleware;

/// Build the service router.
///
/// `/login` is reachable without credentials; everything else passes the
/// bearer-verification middleware first.
pub fn create_routes(state: AppState) -> Router {
    let protected = Router::new()
        .route("/", post(handlers::create_user).get(handlers::list_users))
        .route(
            "/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .layer(from_fn_with_state(
            state.token_service.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/login", post(handlers::login))
        .merge(protected)
        .with_state(state)
}
