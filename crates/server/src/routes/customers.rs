use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Response,
    Json,
};
use models::customer::CustomerId;
use models::location::LocationId;
use models::{messages, Customer};
use service::customer_location::{DeleteCustomerLocationOutcome, DeleteCustomerOutcome};
use tracing::info;

use crate::errors::ApiError;
use crate::observability::{failed, record};
use crate::response::{reply, reply_message, reply_ok};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/Customers", tag = "customers",
    responses(
        (status = 200, description = "List of customers, possibly empty"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_customers(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let customers = state.svc.list_customers().await.map_err(failed("customer", "list"))?;
    info!(count = customers.len(), "list customers");
    record("customer", "list", "ok");
    let message = if customers.is_empty() { messages::NO_CUSTOMERS } else { messages::CUSTOMER_LIST };
    Ok(reply_ok(message, customers))
}

#[utoipa::path(
    get, path = "/api/Customer/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "The requested customer"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<ServerState>,
    id: Result<Path<CustomerId>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id.map_err(failed("customer", "get"))?;
    match state.svc.get_customer(id).await.map_err(failed("customer", "get"))? {
        Some(customer) => {
            record("customer", "get", "found");
            Ok(reply_ok(messages::CUSTOMER_DETAILS, customer))
        }
        None => {
            record("customer", "get", "not_found");
            Ok(reply_message(StatusCode::NOT_FOUND, messages::CUSTOMER_NOT_FOUND))
        }
    }
}

#[utoipa::path(
    post, path = "/api/Customer", tag = "customers",
    request_body = crate::openapi::CustomerDoc,
    responses(
        (status = 200, description = "The created customer, identifiers resolved"),
        (status = 400, description = "Entered data is not in correct format")
    )
)]
pub async fn add_customer(
    State(state): State<ServerState>,
    payload: Result<Json<Customer>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(candidate) = payload.map_err(failed("customer", "add"))?;
    let created = state.svc.add_customer(candidate).await.map_err(failed("customer", "add"))?;
    record("customer", "add", "created");
    Ok(reply_ok(messages::CUSTOMER_ADD, created))
}

#[utoipa::path(
    put, path = "/api/Customer", tag = "customers",
    request_body = crate::openapi::CustomerDoc,
    responses(
        (status = 200, description = "The updated customer"),
        (status = 400, description = "Entered data is not in correct format"),
        (status = 404, description = "Customer not found; the submitted record is echoed back")
    )
)]
pub async fn update_customer(
    State(state): State<ServerState>,
    payload: Result<Json<Customer>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(candidate) = payload.map_err(failed("customer", "update"))?;
    let submitted = candidate.clone();
    match state.svc.update_customer(candidate).await.map_err(failed("customer", "update"))? {
        Some(updated) => {
            record("customer", "update", "updated");
            Ok(reply_ok(messages::CUSTOMER_UPDATE, updated))
        }
        None => {
            record("customer", "update", "not_found");
            Ok(reply(StatusCode::NOT_FOUND, messages::CUSTOMER_NOT_FOUND, Some(submitted)))
        }
    }
}

#[utoipa::path(
    delete, path = "/api/Customer/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Deleted, or refused because locations are still attached"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    State(state): State<ServerState>,
    id: Result<Path<CustomerId>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id.map_err(failed("customer", "delete"))?;
    let outcome = state.svc.delete_customer(id).await.map_err(failed("customer", "delete"))?;
    let resp = match outcome {
        DeleteCustomerOutcome::Deleted => {
            record("customer", "delete", "deleted");
            reply_message(StatusCode::OK, messages::CUSTOMER_DELETE)
        }
        DeleteCustomerOutcome::BlockedHasLocations => {
            record("customer", "delete", "blocked");
            reply_message(StatusCode::OK, messages::CUSTOMER_WITH_LOCATIONS)
        }
        DeleteCustomerOutcome::NotFound => {
            record("customer", "delete", "not_found");
            reply_message(StatusCode::NOT_FOUND, messages::CUSTOMER_NOT_FOUND)
        }
    };
    Ok(resp)
}

#[utoipa::path(
    delete, path = "/api/Customer/{id}/Location/{location_id}", tag = "customers",
    params(
        ("id" = i64, Path, description = "Customer id"),
        ("location_id" = i64, Path, description = "Location id")
    ),
    responses(
        (status = 200, description = "Location detached from the customer"),
        (status = 404, description = "Customer, or the location on that customer, not found")
    )
)]
pub async fn delete_customer_location(
    State(state): State<ServerState>,
    ids: Result<Path<(CustomerId, LocationId)>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path((customer_id, location_id)) = ids.map_err(failed("customer_location", "delete"))?;
    let outcome = state
        .svc
        .delete_customer_location(customer_id, location_id)
        .await
        .map_err(failed("customer_location", "delete"))?;
    let resp = match outcome {
        DeleteCustomerLocationOutcome::Deleted => {
            record("customer_location", "delete", "deleted");
            reply_message(StatusCode::OK, messages::CUSTOMER_LOCATION_DELETE)
        }
        DeleteCustomerLocationOutcome::LocationNotFound => {
            record("customer_location", "delete", "location_not_found");
            reply_message(StatusCode::NOT_FOUND, messages::CUSTOMER_LOCATION_NOT_FOUND)
        }
        DeleteCustomerLocationOutcome::CustomerNotFound => {
            record("customer_location", "delete", "customer_not_found");
            reply_message(StatusCode::NOT_FOUND, messages::CUSTOMER_NOT_FOUND)
        }
    };
    Ok(resp)
}
