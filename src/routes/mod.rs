//! Router assembly: API routes, health routes, `Invalid URL` fallback and middleware.

pub mod api;
pub mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::handlers::invalid_url;
use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: every route under `/api`, unmatched paths answer 404 `Invalid URL`.
pub fn app(state: AppState, request_body_limit: usize) -> Router {
    Router::new()
        .merge(api_routes(state.clone()))
        .merge(common_routes(state))
        .fallback(invalid_url)
        .layer(RequestBodyLimitLayer::new(request_body_limit))
        .layer(TraceLayer::new_for_http())
}
