//! User Directory Server
//!
//! Wires configuration, the connection pool, migrations, and the service
//! stack into an HTTP server.

use std::sync::Arc;

use dotenv::dotenv;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use user_directory::{
    api::{create_routes, AppState},
    config::AppConfig,
    service::{AuthService, TokenService, UserService},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv().ok();

    env_logger::init();

    log::info!("Starting user directory service v{}", user_directory::VERSION);

    // Configuration: missing DATABASE_URL or JWT_SECRET aborts here.
    let config = AppConfig::from_env()?;
    config.validate()?;

    // Pool: created once, passed by reference into the services.
    let pool = config.database.create_pool().await?;
    log::info!(
        "Connection pool ready (min={}, max={})",
        config.database.min_connections,
        config.database.max_connections
    );

    sqlx::migrate!("./migrations").run(&pool).await?;
    log::info!("Database migrations applied");

    let user_service =
        Arc::new(UserService::new(pool.clone()).with_bcrypt_cost(config.bcrypt_cost));
    let token_service = Arc::new(TokenService::new(&config.jwt.secret)?);
    let auth_service = Arc::new(AuthService::new(
        (*user_service).clone(),
        (*token_service).clone(),
    ));

    let state = AppState {
        user_service,
        auth_service,
        token_service,
    };

    let app = axum::Router::new()
        .nest("/api/users", create_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .into_inner(),
        );

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    log::info!("Server running on {bind_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
