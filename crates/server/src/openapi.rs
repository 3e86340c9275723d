use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

/// Request body for location create/update. `id` is ignored on create.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationDoc {
    pub id: i64,
    pub address: String,
}

/// Request body for customer create/update. `id` is ignored on create.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDoc {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub locations: Vec<LocationDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponseDoc {
    pub status_code: u16,
    pub message: String,
    #[schema(value_type = Object)]
    pub result: Option<serde_json::Value>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list_customers,
        crate::routes::customers::get_customer,
        crate::routes::customers::add_customer,
        crate::routes::customers::update_customer,
        crate::routes::customers::delete_customer,
        crate::routes::customers::delete_customer_location,
        crate::routes::locations::list_locations,
        crate::routes::locations::get_location,
        crate::routes::locations::add_location,
        crate::routes::locations::update_location,
        crate::routes::locations::delete_location,
    ),
    components(
        schemas(
            HealthResponse,
            LocationDoc,
            CustomerDoc,
            ApiResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers"),
        (name = "locations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_api_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/health",
            "/api/Customers",
            "/api/Customer",
            "/api/Customer/{id}",
            "/api/Customer/{id}/Location/{location_id}",
            "/api/Locations",
            "/api/Location",
            "/api/Location/{id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
