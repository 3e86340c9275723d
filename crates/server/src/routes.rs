use axum::{
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use common::types::Health;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::observability;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod customers;
pub mod locations;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics() -> (StatusCode, String) {
    observability::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn api_routes() -> Router<ServerState> {
    Router::new()
        .route("/api/Customers", get(customers::list_customers))
        .route(
            "/api/Customer",
            post(customers::add_customer).put(customers::update_customer),
        )
        .route(
            "/api/Customer/:id",
            get(customers::get_customer).delete(customers::delete_customer),
        )
        .route(
            "/api/Customer/:id/Location/:location_id",
            delete(customers::delete_customer_location),
        )
        .route("/api/Locations", get(locations::list_locations))
        .route(
            "/api/Location",
            post(locations::add_location).put(locations::update_location),
        )
        .route(
            "/api/Location/:id",
            get(locations::get_location).delete(locations::delete_location),
        )
}

/// Build the full application router: customer/location API plus health,
/// metrics and the OpenAPI document.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    public
        .merge(api_routes())
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
