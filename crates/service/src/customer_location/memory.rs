use std::sync::Arc;

use async_trait::async_trait;
use models::customer::CustomerId;
use models::location::LocationId;
use models::{Customer, Location};
use tokio::sync::RwLock;
use tracing::debug;

use crate::customer_location::repository::{
    AddLocationOutcome, CustomerLocationRepository, DeleteCustomerLocationOutcome,
    DeleteCustomerOutcome, UpdateLocationOutcome,
};
use crate::errors::ServiceError;

/// Process-lifetime store for customers and the canonical location registry.
///
/// Both collections and both id counters sit behind a single `RwLock`, since
/// customer and location mutations rewrite each other's records. Cloning the
/// handle shares the same underlying state.
#[derive(Clone, Default)]
pub struct InMemoryCustomerLocationStore {
    inner: Arc<RwLock<StoreState>>,
}

impl InMemoryCustomerLocationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Default)]
struct StoreState {
    customers: Vec<Customer>,
    locations: Vec<Location>,
    last_customer_id: CustomerId,
    last_location_id: LocationId,
}

/// Customer whose embedded locations have been resolved against the registry,
/// together with the registry entries it still has to insert.
struct Reconciled {
    customer: Customer,
    new_locations: Vec<Location>,
    last_location_id: LocationId,
}

fn next_id(last: i64, entity: &str) -> Result<i64, ServiceError> {
    last.checked_add(1)
        .ok_or_else(|| ServiceError::internal(format!("{entity} identifier space exhausted")))
}

impl StoreState {
    fn customer_index(&self, id: CustomerId) -> Option<usize> {
        self.customers.iter().position(|c| c.id == id)
    }

    fn location_index(&self, id: LocationId) -> Option<usize> {
        self.locations.iter().position(|l| l.id == id)
    }

    fn location_by_address(&self, address: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.has_address(address))
    }

    /// Resolve every embedded location to its canonical id, minting ids for
    /// unseen addresses. Nothing is written until `commit` runs.
    fn reconcile(&self, mut customer: Customer) -> Result<Reconciled, ServiceError> {
        let mut new_locations: Vec<Location> = Vec::new();
        let mut last_location_id = self.last_location_id;
        for loc in customer.locations.iter_mut() {
            let known = self
                .locations
                .iter()
                .chain(new_locations.iter())
                .find(|l| l.has_address(&loc.address))
                .map(|l| l.id);
            match known {
                Some(id) => {
                    debug!(location_id = id, address = %loc.address, "reusing registered location");
                    loc.id = id;
                }
                None => {
                    last_location_id = next_id(last_location_id, "location")?;
                    loc.id = last_location_id;
                    debug!(location_id = loc.id, address = %loc.address, "registering new location");
                    new_locations.push(loc.clone());
                }
            }
        }
        Ok(Reconciled { customer, new_locations, last_location_id })
    }

    fn commit(&mut self, reconciled: Reconciled) -> Customer {
        self.locations.extend(reconciled.new_locations);
        self.last_location_id = reconciled.last_location_id;
        reconciled.customer
    }

    fn add_customer(&mut self, candidate: Customer) -> Result<Customer, ServiceError> {
        let id = next_id(self.last_customer_id, "customer")?;
        let mut reconciled = self.reconcile(candidate)?;
        reconciled.customer.id = id;
        self.last_customer_id = id;
        let customer = self.commit(reconciled);
        self.customers.push(customer.clone());
        Ok(customer)
    }

    fn update_customer(&mut self, candidate: Customer) -> Result<Option<Customer>, ServiceError> {
        let Some(idx) = self.customer_index(candidate.id) else {
            return Ok(None);
        };
        let reconciled = self.reconcile(candidate)?;
        let customer = self.commit(reconciled);
        match self.customers.get_mut(idx) {
            Some(slot) => *slot = customer.clone(),
            None => return Err(ServiceError::internal("customer index out of range")),
        }
        Ok(Some(customer))
    }

    fn delete_customer(&mut self, id: CustomerId) -> DeleteCustomerOutcome {
        let Some(idx) = self.customer_index(id) else {
            return DeleteCustomerOutcome::NotFound;
        };
        if self.customers.get(idx).is_some_and(|c| !c.locations.is_empty()) {
            return DeleteCustomerOutcome::BlockedHasLocations;
        }
        self.customers.remove(idx);
        DeleteCustomerOutcome::Deleted
    }

    fn delete_customer_location(
        &mut self,
        customer_id: CustomerId,
        location_id: LocationId,
    ) -> DeleteCustomerLocationOutcome {
        let Some(customer) = self.customers.iter_mut().find(|c| c.id == customer_id) else {
            return DeleteCustomerLocationOutcome::CustomerNotFound;
        };
        if !customer.has_location(location_id) {
            return DeleteCustomerLocationOutcome::LocationNotFound;
        }
        customer.locations.retain(|l| l.id != location_id);
        DeleteCustomerLocationOutcome::Deleted
    }

    fn add_location(&mut self, mut candidate: Location) -> Result<AddLocationOutcome, ServiceError> {
        if let Some(existing) = self.location_by_address(&candidate.address) {
            return Ok(AddLocationOutcome::AlreadyExists(existing.clone()));
        }
        let id = next_id(self.last_location_id, "location")?;
        candidate.id = id;
        self.last_location_id = id;
        self.locations.push(candidate.clone());
        Ok(AddLocationOutcome::Created(candidate))
    }

    fn update_location(&mut self, candidate: Location) -> Result<UpdateLocationOutcome, ServiceError> {
        let Some(idx) = self.location_index(candidate.id) else {
            return Ok(UpdateLocationOutcome::NotFound);
        };
        if let Some(other) = self
            .locations
            .iter()
            .find(|l| l.id != candidate.id && l.has_address(&candidate.address))
        {
            return Ok(UpdateLocationOutcome::AddressTaken(other.clone()));
        }
        if idx >= self.locations.len() {
            return Err(ServiceError::internal("location index out of range"));
        }

        let mut propagated = 0usize;
        for customer in self.customers.iter_mut() {
            for embedded in customer.locations.iter_mut().filter(|l| l.id == candidate.id) {
                *embedded = candidate.clone();
                propagated += 1;
            }
        }
        debug!(location_id = candidate.id, propagated, "propagated location update");

        match self.locations.get_mut(idx) {
            Some(slot) => *slot = candidate.clone(),
            None => return Err(ServiceError::internal("location index out of range")),
        }
        Ok(UpdateLocationOutcome::Updated(candidate))
    }

    fn delete_location(&mut self, id: LocationId) -> bool {
        let Some(idx) = self.location_index(id) else {
            return false;
        };
        let mut detached = 0usize;
        for customer in self.customers.iter_mut() {
            let before = customer.locations.len();
            customer.locations.retain(|l| l.id != id);
            detached += before - customer.locations.len();
        }
        debug!(location_id = id, detached, "detached location from customers");
        self.locations.remove(idx);
        true
    }
}

#[async_trait]
impl CustomerLocationRepository for InMemoryCustomerLocationStore {
    async fn list_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        Ok(self.inner.read().await.customers.clone())
    }

    async fn get_customer(&self, id: CustomerId) -> Result<Option<Customer>, ServiceError> {
        let state = self.inner.read().await;
        Ok(state.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn add_customer(&self, candidate: Customer) -> Result<Customer, ServiceError> {
        self.inner.write().await.add_customer(candidate)
    }

    async fn update_customer(&self, candidate: Customer) -> Result<Option<Customer>, ServiceError> {
        self.inner.write().await.update_customer(candidate)
    }

    async fn delete_customer(&self, id: CustomerId) -> Result<DeleteCustomerOutcome, ServiceError> {
        Ok(self.inner.write().await.delete_customer(id))
    }

    async fn delete_customer_location(
        &self,
        customer_id: CustomerId,
        location_id: LocationId,
    ) -> Result<DeleteCustomerLocationOutcome, ServiceError> {
        Ok(self.inner.write().await.delete_customer_location(customer_id, location_id))
    }

    async fn list_locations(&self) -> Result<Vec<Location>, ServiceError> {
        Ok(self.inner.read().await.locations.clone())
    }

    async fn get_location(&self, id: LocationId) -> Result<Option<Location>, ServiceError> {
        let state = self.inner.read().await;
        Ok(state.locations.iter().find(|l| l.id == id).cloned())
    }

    async fn add_location(&self, candidate: Location) -> Result<AddLocationOutcome, ServiceError> {
        self.inner.write().await.add_location(candidate)
    }

    async fn update_location(&self, candidate: Location) -> Result<UpdateLocationOutcome, ServiceError> {
        self.inner.write().await.update_location(candidate)
    }

    async fn delete_location(&self, id: LocationId) -> Result<bool, ServiceError> {
        Ok(self.inner.write().await.delete_location(id))
    }
}
