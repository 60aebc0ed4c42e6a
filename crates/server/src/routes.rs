use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod addresses;
pub mod auth;
pub mod contacts;
pub mod users;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: public user routes plus the
/// token-protected user, contact and address routes.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/api/users", post(users::register))
        .route("/api/users/login", post(users::login));

    let protected = Router::new()
        .route(
            "/api/users/current",
            get(users::current).patch(users::update).delete(users::logout),
        )
        .route("/api/contacts", post(contacts::create))
        .route(
            "/api/contacts/:contact_id",
            get(contacts::get).put(contacts::update).delete(contacts::remove),
        )
        .route(
            "/api/contacts/:contact_id/addresses",
            get(addresses::list).post(addresses::create),
        )
        .route(
            "/api/contacts/:contact_id/addresses/:address_id",
            get(addresses::get).put(addresses::update).delete(addresses::remove),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_token));

    public
        .merge(protected)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
