pub mod repository;
pub mod memory;
pub mod service;

pub use memory::InMemoryCustomerLocationStore;
pub use repository::{
    AddLocationOutcome, CustomerLocationRepository, DeleteCustomerLocationOutcome,
    DeleteCustomerOutcome, UpdateLocationOutcome,
};
pub use service::CustomerLocationService;
