use std::sync::Arc;

use models::customer::{self, CustomerId};
use models::location::{self, LocationId};
use models::{Customer, Location};
use tracing::{debug, info, instrument, warn};

use crate::customer_location::repository::{
    AddLocationOutcome, CustomerLocationRepository, DeleteCustomerLocationOutcome,
    DeleteCustomerOutcome, UpdateLocationOutcome,
};
use crate::errors::ServiceError;

/// Application service in front of the customer/location store.
/// Validates and normalizes candidates, then delegates to the repository.
pub struct CustomerLocationService<R: CustomerLocationRepository> {
    repo: Arc<R>,
}

impl<R: CustomerLocationRepository> CustomerLocationService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        self.repo.list_customers().await
    }

    pub async fn get_customer(&self, id: CustomerId) -> Result<Option<Customer>, ServiceError> {
        self.repo.get_customer(id).await
    }

    /// Create a customer, registering any embedded location whose address is new.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::Customer;
    /// use service::customer_location::{CustomerLocationService, InMemoryCustomerLocationStore};
    ///
    /// let svc = CustomerLocationService::new(Arc::new(InMemoryCustomerLocationStore::new()));
    /// let created = tokio_test::block_on(svc.add_customer(Customer::new("A", "B").with_location("Main St"))).unwrap();
    /// assert_eq!(created.id, 1);
    /// assert_eq!(created.locations[0].id, 1);
    /// ```
    #[instrument(skip(self, candidate), fields(locations = candidate.locations.len()))]
    pub async fn add_customer(&self, candidate: Customer) -> Result<Customer, ServiceError> {
        customer::validate(&candidate)?;
        let created = self.repo.add_customer(candidate.normalized()).await?;
        info!(customer_id = created.id, "customer_added");
        Ok(created)
    }

    #[instrument(skip(self, candidate), fields(customer_id = candidate.id))]
    pub async fn update_customer(&self, candidate: Customer) -> Result<Option<Customer>, ServiceError> {
        customer::validate(&candidate)?;
        let updated = self.repo.update_customer(candidate.normalized()).await?;
        match &updated {
            Some(c) => info!(customer_id = c.id, locations = c.locations.len(), "customer_updated"),
            None => debug!("customer not found for update"),
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: CustomerId) -> Result<DeleteCustomerOutcome, ServiceError> {
        let outcome = self.repo.delete_customer(id).await?;
        match outcome {
            DeleteCustomerOutcome::Deleted => info!("customer_deleted"),
            DeleteCustomerOutcome::BlockedHasLocations => warn!("customer delete blocked: locations attached"),
            DeleteCustomerOutcome::NotFound => debug!("customer not found for delete"),
        }
        Ok(outcome)
    }

    #[instrument(skip(self))]
    pub async fn delete_customer_location(
        &self,
        customer_id: CustomerId,
        location_id: LocationId,
    ) -> Result<DeleteCustomerLocationOutcome, ServiceError> {
        let outcome = self.repo.delete_customer_location(customer_id, location_id).await?;
        debug!(?outcome, "delete_customer_location");
        Ok(outcome)
    }

    pub async fn list_locations(&self) -> Result<Vec<Location>, ServiceError> {
        self.repo.list_locations().await
    }

    pub async fn get_location(&self, id: LocationId) -> Result<Option<Location>, ServiceError> {
        self.repo.get_location(id).await
    }

    #[instrument(skip(self, candidate))]
    pub async fn add_location(&self, candidate: Location) -> Result<AddLocationOutcome, ServiceError> {
        location::validate(&candidate)?;
        let outcome = self.repo.add_location(candidate.normalized()).await?;
        match &outcome {
            AddLocationOutcome::Created(l) => info!(location_id = l.id, "location_added"),
            AddLocationOutcome::AlreadyExists(l) => debug!(location_id = l.id, "location already registered"),
        }
        Ok(outcome)
    }

    #[instrument(skip(self, candidate), fields(location_id = candidate.id))]
    pub async fn update_location(&self, candidate: Location) -> Result<UpdateLocationOutcome, ServiceError> {
        location::validate(&candidate)?;
        let outcome = self.repo.update_location(candidate.normalized()).await?;
        match &outcome {
            UpdateLocationOutcome::Updated(_) => info!("location_updated"),
            UpdateLocationOutcome::NotFound => debug!("location not found for update"),
            UpdateLocationOutcome::AddressTaken(other) => {
                warn!(conflicting_id = other.id, "location address already in use")
            }
        }
        Ok(outcome)
    }

    #[instrument(skip(self))]
    pub async fn delete_location(&self, id: LocationId) -> Result<bool, ServiceError> {
        let deleted = self.repo.delete_location(id).await?;
        if deleted {
            info!("location_deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer_location::InMemoryCustomerLocationStore;

    fn svc() -> CustomerLocationService<InMemoryCustomerLocationStore> {
        CustomerLocationService::new(Arc::new(InMemoryCustomerLocationStore::new()))
    }

    #[tokio::test]
    async fn rejects_blank_names_and_addresses() {
        let svc = svc();
        assert!(matches!(
            svc.add_customer(Customer::new("", "B")).await,
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            svc.add_customer(Customer::new("A", "  ")).await,
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            svc.add_customer(Customer::new("A", "B").with_location("")).await,
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            svc.add_location(Location::new(" ")).await,
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            svc.update_location(Location { id: 1, address: String::new() }).await,
            Err(ServiceError::Validation(_))
        ));
        let mut c = Customer::new("", "B");
        c.id = 1;
        assert!(matches!(svc.update_customer(c).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn rejected_candidates_do_not_mutate() -> anyhow::Result<()> {
        let svc = svc();
        let _ = svc.add_customer(Customer::new("A", "").with_location("Main St")).await;
        assert!(svc.list_customers().await?.is_empty());
        assert!(svc.list_locations().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn trims_before_storing() -> anyhow::Result<()> {
        let svc = svc();
        let c = svc.add_customer(Customer::new(" A ", "B ").with_location(" Main St ")).await?;
        assert_eq!(c.first_name, "A");
        assert_eq!(c.last_name, "B");
        assert_eq!(svc.list_locations().await?[0].address, "Main St");

        let outcome = svc.add_location(Location::new("  main st")).await?;
        assert!(matches!(outcome, AddLocationOutcome::AlreadyExists(l) if l.id == 1));
        Ok(())
    }

    #[tokio::test]
    async fn scenario_shared_location_then_delete() -> anyhow::Result<()> {
        let svc = svc();
        let a = svc.add_customer(Customer::new("A", "B").with_location("Main St")).await?;
        let c = svc.add_customer(Customer::new("C", "D").with_location("main st")).await?;
        assert_eq!((a.id, a.locations[0].id), (1, 1));
        assert_eq!((c.id, c.locations[0].id), (2, 1));
        assert_eq!(svc.list_locations().await?.len(), 1);

        assert_eq!(svc.delete_customer(1).await?, DeleteCustomerOutcome::BlockedHasLocations);
        assert_eq!(svc.delete_customer_location(1, 1).await?, DeleteCustomerLocationOutcome::Deleted);
        assert_eq!(svc.delete_customer(1).await?, DeleteCustomerOutcome::Deleted);
        Ok(())
    }
}
