//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use jb_viewer::STYLESHEET_ROUTE;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/docs", get(handlers::api::get_root_document))
        .route("/api/docs/", get(handlers::api::get_root_document))
        .route("/api/docs/{*path}", get(handlers::api::get_document))
        .route("/api/sidebar", get(handlers::sidebar::get_sidebar));

    let page_routes = Router::new()
        .route("/", get(|| async { Redirect::temporary("/docs") }))
        .route("/docs", get(handlers::pages::get_root_page))
        .route("/docs/", get(handlers::pages::get_root_page))
        .route("/docs/{*path}", get(handlers::pages::get_page))
        .route(STYLESHEET_ROUTE, get(handlers::theme::get_stylesheet));

    Router::new()
        .merge(api_routes)
        .merge(page_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
