use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Response,
    Json,
};
use models::location::LocationId;
use models::{messages, Location};
use service::customer_location::{AddLocationOutcome, UpdateLocationOutcome};
use tracing::info;

use crate::errors::ApiError;
use crate::observability::{failed, record};
use crate::response::{reply_message, reply_ok};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/Locations", tag = "locations",
    responses(
        (status = 200, description = "Canonical location registry, possibly empty"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_locations(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let locations = state.svc.list_locations().await.map_err(failed("location", "list"))?;
    info!(count = locations.len(), "list locations");
    record("location", "list", "ok");
    let message = if locations.is_empty() { messages::NO_LOCATIONS } else { messages::LOCATION_LIST };
    Ok(reply_ok(message, locations))
}

#[utoipa::path(
    get, path = "/api/Location/{id}", tag = "locations",
    params(("id" = i64, Path, description = "Location id")),
    responses(
        (status = 200, description = "The requested location"),
        (status = 404, description = "Location not found")
    )
)]
pub async fn get_location(
    State(state): State<ServerState>,
    id: Result<Path<LocationId>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id.map_err(failed("location", "get"))?;
    match state.svc.get_location(id).await.map_err(failed("location", "get"))? {
        Some(location) => {
            record("location", "get", "found");
            Ok(reply_ok(messages::LOCATION_DETAILS, location))
        }
        None => {
            record("location", "get", "not_found");
            Ok(reply_message(StatusCode::NOT_FOUND, messages::LOCATION_NOT_FOUND))
        }
    }
}

#[utoipa::path(
    post, path = "/api/Location", tag = "locations",
    request_body = crate::openapi::LocationDoc,
    responses(
        (status = 200, description = "Created, or the existing location with the same address"),
        (status = 400, description = "Entered data is not in correct format")
    )
)]
pub async fn add_location(
    State(state): State<ServerState>,
    payload: Result<Json<Location>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(candidate) = payload.map_err(failed("location", "add"))?;
    let outcome = state.svc.add_location(candidate).await.map_err(failed("location", "add"))?;
    let resp = match outcome {
        AddLocationOutcome::Created(location) => {
            record("location", "add", "created");
            reply_ok(messages::LOCATION_ADD, location)
        }
        AddLocationOutcome::AlreadyExists(existing) => {
            record("location", "add", "already_exists");
            reply_ok(messages::LOCATION_EXIST, existing)
        }
    };
    Ok(resp)
}

#[utoipa::path(
    put, path = "/api/Location", tag = "locations",
    request_body = crate::openapi::LocationDoc,
    responses(
        (status = 200, description = "Updated everywhere, or refused because the address is taken"),
        (status = 400, description = "Entered data is not in correct format"),
        (status = 404, description = "Location not found")
    )
)]
pub async fn update_location(
    State(state): State<ServerState>,
    payload: Result<Json<Location>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(candidate) = payload.map_err(failed("location", "update"))?;
    let outcome = state.svc.update_location(candidate).await.map_err(failed("location", "update"))?;
    let resp = match outcome {
        UpdateLocationOutcome::Updated(location) => {
            record("location", "update", "updated");
            reply_ok(messages::LOCATION_UPDATE, location)
        }
        UpdateLocationOutcome::NotFound => {
            record("location", "update", "not_found");
            reply_message(StatusCode::NOT_FOUND, messages::LOCATION_NOT_FOUND)
        }
        UpdateLocationOutcome::AddressTaken(existing) => {
            record("location", "update", "address_taken");
            reply_ok(messages::LOCATION_ADDRESS_TAKEN, existing)
        }
    };
    Ok(resp)
}

#[utoipa::path(
    delete, path = "/api/Location/{id}", tag = "locations",
    params(("id" = i64, Path, description = "Location id")),
    responses(
        (status = 200, description = "Deleted from the registry and from every customer"),
        (status = 404, description = "Location not found")
    )
)]
pub async fn delete_location(
    State(state): State<ServerState>,
    id: Result<Path<LocationId>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id.map_err(failed("location", "delete"))?;
    if state.svc.delete_location(id).await.map_err(failed("location", "delete"))? {
        record("location", "delete", "deleted");
        Ok(reply_message(StatusCode::OK, messages::LOCATION_DELETE))
    } else {
        record("location", "delete", "not_found");
        Ok(reply_message(StatusCode::NOT_FOUND, messages::LOCATION_NOT_FOUND))
    }
}
