//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every resource shares one set of generic handlers mounted under
//! `/runner/api/v1/{resource}`; the path segment selects the
//! [`schema::ResourceKind`] whose descriptors drive filtering and validation.

pub mod resources;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use schema::API_ROOT;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(&format!("{API_ROOT}/{{resource}}"), get(resources::list).post(resources::create))
        .route(
            &format!("{API_ROOT}/{{resource}}/{{id}}"),
            get(resources::read)
                .put(resources::update)
                .delete(resources::remove),
        )
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
