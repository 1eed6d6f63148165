use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use souk_core::health::{healthz, readyz};
use souk_core::middleware::request_id_layer;

use crate::handlers::listing::{create_listing, search_listings};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Listings
        .route("/listings", get(search_listings))
        .route("/listings", post(create_listing))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
