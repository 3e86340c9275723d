use async_trait::async_trait;
use models::customer::CustomerId;
use models::location::LocationId;
use models::{Customer, Location};

use crate::errors::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteCustomerOutcome {
    Deleted,
    /// Customer still has locations attached; nothing was removed.
    BlockedHasLocations,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteCustomerLocationOutcome {
    Deleted,
    LocationNotFound,
    CustomerNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddLocationOutcome {
    Created(Location),
    /// A location with the same address (ignoring case) is already registered.
    AlreadyExists(Location),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateLocationOutcome {
    Updated(Location),
    NotFound,
    /// Another location already owns the requested address.
    AddressTaken(Location),
}

/// Store contract for customers and the canonical location registry.
///
/// Routine outcomes (missing records, duplicates, blocked deletes) are values;
/// `Err` is reserved for internal faults, which leave the store untouched.
#[async_trait]
pub trait CustomerLocationRepository: Send + Sync {
    async fn list_customers(&self) -> Result<Vec<Customer>, ServiceError>;
    async fn get_customer(&self, id: CustomerId) -> Result<Option<Customer>, ServiceError>;
    async fn add_customer(&self, candidate: Customer) -> Result<Customer, ServiceError>;
    async fn update_customer(&self, candidate: Customer) -> Result<Option<Customer>, ServiceError>;
    async fn delete_customer(&self, id: CustomerId) -> Result<DeleteCustomerOutcome, ServiceError>;
    async fn delete_customer_location(
        &self,
        customer_id: CustomerId,
        location_id: LocationId,
    ) -> Result<DeleteCustomerLocationOutcome, ServiceError>;

    async fn list_locations(&self) -> Result<Vec<Location>, ServiceError>;
    async fn get_location(&self, id: LocationId) -> Result<Option<Location>, ServiceError>;
    async fn add_location(&self, candidate: Location) -> Result<AddLocationOutcome, ServiceError>;
    async fn update_location(&self, candidate: Location) -> Result<UpdateLocationOutcome, ServiceError>;
    async fn delete_location(&self, id: LocationId) -> Result<bool, ServiceError>;
}
