//! `api` crate — HTTP REST API layer.
//!
//! Exposes two resource families:
//!   GET    /artists          GET    /reviews
//!   POST   /artists          POST   /reviews
//!   GET    /artists/{id}     GET    /reviews/{id}
//!   PUT    /artists/{id}     PUT    /reviews/{id}
//!   DELETE /artists/{id}     DELETE /reviews/{id}

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod mappers;
pub mod services;
pub mod state;
pub mod validation;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use db::DbPool;

pub use error::ApiError;
pub use state::AppState;

/// Build the full application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/artists",
            get(handlers::artists::list).post(handlers::artists::create),
        )
        .route(
            "/artists/:id",
            get(handlers::artists::get)
                .put(handlers::artists::update)
                .delete(handlers::artists::delete),
        )
        .route(
            "/reviews",
            get(handlers::reviews::list).post(handlers::reviews::create),
        )
        .route(
            "/reviews/:id",
            get(handlers::reviews::get)
                .put(handlers::reviews::update)
                .delete(handlers::reviews::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve the API over the given pool until shutdown.
pub async fn serve(addr: &str, pool: DbPool) -> Result<(), std::io::Error> {
    let state = AppState::new(pool);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}
