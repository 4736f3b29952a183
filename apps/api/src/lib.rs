pub mod config;
pub mod errors;
pub mod media;
pub mod models;
pub mod registry;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::routes::build_router;
use crate::state::AppState;

/// The full application: routes plus the middleware stack `main` serves.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // TODO: restrict origins once the frontend host is fixed
}
