use std::sync::Arc;

use service::customer_location::{CustomerLocationService, InMemoryCustomerLocationStore};

pub type StoreService = CustomerLocationService<InMemoryCustomerLocationStore>;

/// Shared handler state. One store per process, handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub svc: Arc<StoreService>,
}

impl ServerState {
    pub fn new(svc: Arc<StoreService>) -> Self {
        Self { svc }
    }

    /// Fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryCustomerLocationStore::new());
        Self::new(Arc::new(CustomerLocationService::new(store)))
    }
}
