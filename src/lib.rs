//! Credential service built with Rust.
//!
//! Registration with salted password hashes, login that issues signed
//! bearer tokens, and a verification endpoint that round-trips a
//! token's claims.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;

use axum::routing::{get, post};
use handlers::http;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router (register, login, secret, users, health). Used by
/// main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", get(http::root))
        .route("/health", get(http::health))
        .route("/register/", post(auth::register))
        .route("/login", post(auth::login))
        .route("/secret", get(auth::secret))
        .route("/users", get(auth::list_users))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
